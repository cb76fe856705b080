//! Footfall orchestrates visitor-count requests across multiple data providers.
//!
//! Overview
//! - Routes requests to connectors that implement the `footfall_core` contracts.
//! - Applies a configurable priority order to influence provider selection,
//!   falling back to the next provider on failure.
//! - Fetches the current and comparison nights concurrently and aligns them on
//!   the fixed overnight grid via [`footfall_core::align_night`].
//! - Normalizes error handling and exposes uniform domain types from
//!   `footfall_core`.
//!
//! Key behaviors and trade-offs
//! - Provider routing is deterministic priority-with-fallback: each attempt is
//!   bounded by the per-provider timeout and errors are aggregated, so a dead
//!   provider costs latency but never wrong data.
//! - A comparison night with no data degrades to an all-absent baseline rather
//!   than failing the chart; only a missing current night is an error.
//! - Absence is not zero: aligned points carry `Option` counts, and a slot with
//!   no nearby sample stays `None` even when neighbouring slots observed zero.
//!
//! Examples
//! Building an orchestrator and fetching a night chart:
//! ```rust,ignore
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use footfall::{Footfall, ShopId};
//!
//! let http = Arc::new(
//!     footfall_http::HttpConnector::builder()
//!         .base_url("https://api.example.com")
//!         .build()?,
//! );
//! let mock = Arc::new(footfall_mock::MockConnector::new());
//!
//! let footfall = Footfall::builder()
//!     .with_connector(http.clone())
//!     .with_connector(mock.clone())
//!     .prefer(&[http, mock])
//!     .provider_timeout(std::time::Duration::from_secs(3))
//!     .build()?;
//!
//! let shop = ShopId::from("shop-11");
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let chart = footfall.night_chart(&shop, date).await?;
//! for p in chart.points.iter().filter(|p| p.male.is_some()) {
//!     println!("{} {:?} vs {:?}", p.time_label, p.male, p.prev_male);
//! }
//! ```
//!
//! Listing shops:
//! ```rust,ignore
//! for shop in footfall.shops().await? {
//!     println!("{} - {}", shop.id, shop.label());
//! }
//! ```
//!
//! See the `demos/` workspace member for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Footfall, FootfallBuilder};
pub use router::util::collapse_errors;

// Re-export core types for convenience
pub use footfall_core::{
    // Aligned output
    AlignedPoint,
    // Foundational types
    Capability,
    ConnectorKey,
    FootfallConfig,
    FootfallConnector,
    FootfallError,
    // Engine surface
    GRID_LEN,
    GRID_STEP_MINUTES,
    MATCH_TOLERANCE_MINUTES,
    NightChart,
    // Domain types
    RawSample,
    Shop,
    ShopDirectoryProvider,
    ShopId,
    VisitorDataProvider,
    VisitorRequest,
    VisitorSeries,
    align_night,
    is_overnight_hour,
    night_grid,
    normalized_minutes,
};
