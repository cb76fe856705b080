//! Footfall-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod shop;
mod visitor;

pub use capability::Capability;
pub use config::FootfallConfig;
pub use connector::ConnectorKey;
pub use error::FootfallError;
pub use shop::{Shop, ShopId};
pub use visitor::{AlignedPoint, NightChart, RawSample, VisitorRequest, VisitorSeries};
