use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ShopId;

/// Request for one shop's raw visitor counts over one elapsed night.
///
/// `date` is the anchor calendar day; the night it names runs from 18:00 of
/// that day into the early hours of the following day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisitorRequest {
    /// Shop to query.
    pub shop: ShopId,
    /// Anchor date in `yyyy-MM-dd` form on the wire.
    pub date: NaiveDate,
}

/// One raw observation: visitor counts at an instant.
///
/// Counts are totals observed at that instant, not deltas. A count of zero is
/// a real observation and is distinct from a missing sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSample {
    /// Observation instant (UTC, second resolution on the wire).
    #[serde(with = "chrono::serde::ts_seconds")]
    pub ts: DateTime<Utc>,
    /// Male visitor count.
    pub male: u32,
    /// Female visitor count.
    pub female: u32,
}

impl RawSample {
    /// Combined count across both series.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.male + self.female
    }
}

/// Raw series for one shop and one night, as returned by a data source.
///
/// Samples are arbitrarily ordered and may contain duplicates; consumers sort
/// before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorSeries {
    /// Shop the samples belong to.
    pub shop: ShopId,
    /// Anchor date of the night.
    pub date: NaiveDate,
    /// Irregularly timestamped observations.
    pub samples: Vec<RawSample>,
}

/// One row of the aligned output: a grid instant with counts matched from the
/// current and comparison nights.
///
/// `None` means "no sample observed near this slot", which is semantically
/// distinct from an observed count of zero; absent fields are omitted when
/// serialized so renderers can tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedPoint {
    /// Grid instant (UTC).
    #[serde(with = "chrono::serde::ts_seconds")]
    pub ts: DateTime<Utc>,
    /// Wall-clock "HH:mm" label in the display timezone.
    pub time_label: String,
    /// Local hour of day (0-23), for window-membership checks by consumers.
    pub hour_of_day: u32,
    /// Male count from the current night, if a sample matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub male: Option<u32>,
    /// Female count from the current night, if a sample matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub female: Option<u32>,
    /// Male count from the comparison night, if a sample matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_male: Option<u32>,
    /// Female count from the comparison night, if a sample matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_female: Option<u32>,
}

/// Result envelope for a night-chart request: the aligned series plus the
/// dates it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightChart {
    /// Shop the chart belongs to.
    pub shop: ShopId,
    /// Anchor date of the current night.
    pub date: NaiveDate,
    /// Anchor date of the comparison night (one week earlier by default).
    pub comparison_date: NaiveDate,
    /// Aligned points, one per grid slot, in grid order.
    pub points: Vec<AlignedPoint>,
}
