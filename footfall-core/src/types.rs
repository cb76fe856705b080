//! Re-export of foundational types from `footfall-types`.
// Consolidated re-exports so downstream crates can depend on `footfall-core` only

pub use footfall_types::{Capability, ConnectorKey, FootfallConfig, FootfallError};

pub use footfall_types::{AlignedPoint, NightChart, RawSample, VisitorRequest, VisitorSeries};
pub use footfall_types::{Shop, ShopId};
