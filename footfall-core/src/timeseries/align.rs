use chrono::{NaiveDate, Timelike};
use chrono_tz::Tz;

use footfall_types::{AlignedPoint, VisitorSeries};

use crate::timeseries::grid::night_grid;
use crate::timeseries::normalize::normalized_minutes;

/// Maximum distance, in normalized minutes, at which a raw sample may be
/// assigned to a grid slot.
pub const MATCH_TOLERANCE_MINUTES: i64 = 5;

// A raw sample reduced to what matching needs, in ascending timestamp order.
struct PreparedSample {
    norm: i64,
    male: u32,
    female: u32,
}

fn prepare(series: &VisitorSeries, tz: Tz) -> Vec<PreparedSample> {
    let mut samples: Vec<_> = series.samples.iter().collect();
    samples.sort_by_key(|s| s.ts);
    samples
        .into_iter()
        .map(|s| PreparedSample {
            norm: normalized_minutes(s.ts, tz),
            male: s.male,
            female: s.female,
        })
        .collect()
}

/// Pick the nearest unconsumed sample within tolerance and consume it.
///
/// Strict `<` on the distance comparison keeps the first candidate on ties;
/// since samples are sorted ascending, that is the earlier sample. Consuming
/// the pick ensures a sample feeds at most one grid slot.
fn take_nearest(
    slot_norm: i64,
    samples: &[PreparedSample],
    used: &mut [bool],
) -> Option<(u32, u32)> {
    let mut best: Option<(i64, usize)> = None;
    for (i, s) in samples.iter().enumerate() {
        if used[i] {
            continue;
        }
        let dist = (s.norm - slot_norm).abs();
        if dist > MATCH_TOLERANCE_MINUTES {
            continue;
        }
        if best.is_none_or(|(best_dist, _)| dist < best_dist) {
            best = Some((dist, i));
        }
    }
    best.map(|(_, i)| {
        used[i] = true;
        (samples[i].male, samples[i].female)
    })
}

/// Resample two raw overnight series onto the fixed grid for the night
/// anchored at `date`.
///
/// Each grid slot is matched independently against the current and comparison
/// series: the nearest sample by normalized-minute distance within
/// [`MATCH_TOLERANCE_MINUTES`] wins, equidistant candidates resolve to the
/// earlier sample, and a sample is assigned to at most one slot. Slots with no
/// candidate carry `None`, which is distinct from an observed count of zero.
///
/// If either input is `None` (still loading or failed upstream), the output is
/// empty; a present-but-empty series instead yields all 54 slots with absent
/// counts. The transform is pure: identical inputs produce identical outputs.
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use chrono_tz::Asia::Tokyo;
/// use footfall_core::{RawSample, VisitorSeries, align_night};
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let series = |samples| VisitorSeries { shop: "shop-12".into(), date, samples };
/// let current = series(vec![RawSample {
///     ts: Tokyo.with_ymd_and_hms(2024, 6, 1, 18, 2, 0).unwrap().with_timezone(&Utc),
///     male: 5,
///     female: 3,
/// }]);
/// let comparison = series(vec![]);
///
/// let points = align_night(date, Tokyo, Some(&current), Some(&comparison));
/// // 18:02 is within tolerance of the 18:00 slot but too far from 18:10.
/// assert_eq!(points[0].male, Some(5));
/// assert_eq!(points[0].female, Some(3));
/// assert_eq!(points[1].male, None);
/// // Comparison night is empty: loaded, but nothing observed.
/// assert!(points.iter().all(|p| p.prev_male.is_none()));
///
/// // Either series missing entirely means "not ready".
/// assert!(align_night(date, Tokyo, Some(&current), None).is_empty());
/// ```
#[must_use]
pub fn align_night(
    date: NaiveDate,
    tz: Tz,
    current: Option<&VisitorSeries>,
    comparison: Option<&VisitorSeries>,
) -> Vec<AlignedPoint> {
    let (Some(current), Some(comparison)) = (current, comparison) else {
        return Vec::new();
    };

    let cur = prepare(current, tz);
    let cmp = prepare(comparison, tz);
    let mut cur_used = vec![false; cur.len()];
    let mut cmp_used = vec![false; cmp.len()];

    night_grid(date, tz)
        .into_iter()
        .map(|ts| {
            let local = ts.with_timezone(&tz);
            let slot_norm = normalized_minutes(ts, tz);
            let cur_match = take_nearest(slot_norm, &cur, &mut cur_used);
            let cmp_match = take_nearest(slot_norm, &cmp, &mut cmp_used);
            AlignedPoint {
                ts,
                time_label: local.format("%H:%M").to_string(),
                hour_of_day: local.hour(),
                male: cur_match.map(|(m, _)| m),
                female: cur_match.map(|(_, f)| f),
                prev_male: cmp_match.map(|(m, _)| m),
                prev_female: cmp_match.map(|(_, f)| f),
            }
        })
        .collect()
}
