use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Spacing between adjacent grid instants, in minutes.
pub const GRID_STEP_MINUTES: i64 = 10;

/// Number of grid instants per night: 18:00 through 02:50 inclusive spans
/// 530 minutes, i.e. 53 steps.
pub const GRID_LEN: usize = 54;

/// Local wall-clock start of the overnight window (18:00:00 on the anchor date).
pub const NIGHT_START: (u32, u32) = (18, 0);

/// Local wall-clock end of the overnight window (02:50:00 on the following day).
pub const NIGHT_END: (u32, u32) = (2, 50);

/// Resolve a local wall-clock time in `tz` to a UTC instant.
///
/// A fold (clocks set back) maps to the earlier of the two instants; a gap
/// (clocks set forward) falls back to reading the wall-clock as UTC.
fn resolve_local(date: NaiveDate, hour: u32, minute: u32, tz: Tz) -> DateTime<Utc> {
    // 18:00 exists on every calendar day chrono can represent
    let naive = date
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN));
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => naive.and_utc(),
    }
}

/// Produce the ordered overnight grid for the night anchored at `date`.
///
/// The first instant is `date` 18:00:00 local time in `tz`; subsequent
/// instants follow at exact 10-minute steps through 02:50:00 of the next
/// calendar day, 54 instants in total. Stepping happens in absolute time from
/// the resolved start, so spacing is exact even across timezone transitions.
///
/// ```
/// use chrono::{NaiveDate, Timelike};
/// use chrono_tz::Asia::Tokyo;
/// use footfall_core::{GRID_LEN, night_grid};
///
/// let grid = night_grid(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), Tokyo);
/// assert_eq!(grid.len(), GRID_LEN);
/// let first = grid[0].with_timezone(&Tokyo);
/// let last = grid[GRID_LEN - 1].with_timezone(&Tokyo);
/// assert_eq!((first.hour(), first.minute()), (18, 0));
/// assert_eq!((last.hour(), last.minute()), (2, 50));
/// ```
#[must_use]
pub fn night_grid(date: NaiveDate, tz: Tz) -> Vec<DateTime<Utc>> {
    let start = resolve_local(date, NIGHT_START.0, NIGHT_START.1, tz);
    let step = Duration::minutes(GRID_STEP_MINUTES);
    let mut out = Vec::with_capacity(GRID_LEN);
    let mut cur = start;
    for _ in 0..GRID_LEN {
        out.push(cur);
        cur += step;
    }
    out
}
