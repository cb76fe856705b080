//! Wire-format DTOs for the visitor-data endpoint.
//!
//! The upstream API is loose about numeric types: counts and epoch timestamps
//! arrive as JSON numbers or as decimal strings depending on the backend
//! revision. Deserialization coerces both forms before the payload is lifted
//! into canonical `footfall-types` structures.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use footfall_types::{FootfallError, RawSample, VisitorSeries};

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) => s.trim().parse::<i64>().map_err(serde::de::Error::custom),
    }
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u32),
        Str(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) => s.trim().parse::<u32>().map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSample {
    #[serde(deserialize_with = "lenient_i64")]
    pub timestamp: i64,
    #[serde(deserialize_with = "lenient_u32")]
    pub male: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub female: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSeries {
    pub shop: String,
    pub date: String,
    pub data: Vec<WireSample>,
}

/// Error body the upstream returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct WireErrorBody {
    pub message: Option<String>,
}

impl WireSeries {
    pub(crate) fn into_series(self) -> Result<VisitorSeries, FootfallError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|e| FootfallError::Data(format!("bad date {:?}: {e}", self.date)))?;
        let samples = self
            .data
            .into_iter()
            .map(|s| {
                let ts = DateTime::<Utc>::from_timestamp(s.timestamp, 0).ok_or_else(|| {
                    FootfallError::Data(format!("timestamp {} out of range", s.timestamp))
                })?;
                Ok(RawSample {
                    ts,
                    male: s.male,
                    female: s.female,
                })
            })
            .collect::<Result<Vec<_>, FootfallError>>()?;
        Ok(VisitorSeries {
            shop: self.shop.into(),
            date,
            samples,
        })
    }
}
