//! footfall-core
//!
//! Core types, traits, and the alignment engine shared across the footfall
//! ecosystem.
//!
//! - `types`: common data structures (shops, requests, raw series, aligned points).
//! - `connector`: the `FootfallConnector` trait and capability provider traits.
//! - `timeseries`: the overnight grid generator and nearest-match resampler.
//!
//! The alignment engine is a pure, synchronous transform: it never fetches,
//! caches, or retries. Data retrieval belongs to connector implementations and
//! the orchestrator crate.
#![warn(missing_docs)]

/// Connector capability traits and the primary `FootfallConnector` interface.
pub mod connector;
/// Time-series utilities: overnight grid, midnight-rollover normalization,
/// and nearest-sample alignment.
pub mod timeseries;
pub mod types;

pub use connector::{FootfallConnector, ShopDirectoryProvider, VisitorDataProvider};
pub use timeseries::align::{MATCH_TOLERANCE_MINUTES, align_night};
pub use timeseries::grid::{GRID_LEN, GRID_STEP_MINUTES, night_grid};
pub use timeseries::normalize::{is_overnight_hour, normalized_minutes};
pub use types::*;
