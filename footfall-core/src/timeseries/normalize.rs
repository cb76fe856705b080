use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

/// Local hours strictly before this value are treated as belonging to the
/// previous night and shifted forward by 24 hours during normalization.
pub const ROLLOVER_HOUR: u32 = 4;

/// Convert an instant to comparable minutes-since-midnight in `tz`, shifting
/// the post-midnight segment past 24:00 so it sorts after the evening hours.
///
/// Without the shift, 00:30 would compare numerically below 18:00 and
/// nearest-neighbor matching would break across the midnight boundary.
/// Seconds truncate.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_tz::Asia::Tokyo;
/// use footfall_core::normalized_minutes;
///
/// let evening = Tokyo.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap().with_timezone(&Utc);
/// let past_midnight = Tokyo.with_ymd_and_hms(2024, 6, 2, 0, 30, 0).unwrap().with_timezone(&Utc);
/// assert_eq!(normalized_minutes(evening, Tokyo), 18 * 60);
/// // 00:30 lands after 18:00, not before it
/// assert_eq!(normalized_minutes(past_midnight, Tokyo), 24 * 60 + 30);
/// ```
#[must_use]
pub fn normalized_minutes(ts: DateTime<Utc>, tz: Tz) -> i64 {
    let local = ts.with_timezone(&tz);
    let mut hours = i64::from(local.hour());
    if local.hour() < ROLLOVER_HOUR {
        hours += 24;
    }
    hours * 60 + i64::from(local.minute())
}

/// Whether a local hour of day falls inside the overnight display window
/// (18:00 through 02:59).
///
/// The alignment engine never filters on this; it is exposed for renderers
/// that trim edge hours.
#[must_use]
pub const fn is_overnight_hour(hour: u32) -> bool {
    hour >= 18 || hour < 3
}
