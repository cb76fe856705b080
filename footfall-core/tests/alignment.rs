use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Asia::Tokyo;
use footfall_core::{GRID_LEN, RawSample, VisitorSeries, align_night, is_overnight_hour};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn jst(day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Tokyo
        .with_ymd_and_hms(2024, 6, day, hour, min, sec)
        .unwrap()
        .with_timezone(&Utc)
}

fn series(samples: Vec<RawSample>) -> VisitorSeries {
    VisitorSeries {
        shop: "shop-12".into(),
        date: anchor(),
        samples,
    }
}

fn sample(ts: DateTime<Utc>, male: u32, female: u32) -> RawSample {
    RawSample { ts, male, female }
}

fn empty() -> VisitorSeries {
    series(vec![])
}

#[test]
fn matches_across_midnight_boundary() {
    // A sample at 00:30 must land on the 00:30 slot even though 00:30 < 18:00
    // in raw clock time.
    let current = series(vec![sample(jst(2, 0, 30, 0), 7, 4)]);
    let points = align_night(anchor(), Tokyo, Some(&current), Some(&empty()));

    let slot = points.iter().find(|p| p.time_label == "00:30").unwrap();
    assert_eq!(slot.male, Some(7));
    assert_eq!(slot.female, Some(4));
    assert_eq!(points.iter().filter(|p| p.male.is_some()).count(), 1);
}

#[test]
fn tolerance_is_inclusive_at_five_minutes() {
    // Exactly 5 minutes from 19:00 matches; 6 minutes from 20:00 does not.
    let current = series(vec![
        sample(jst(1, 19, 5, 0), 2, 2),
        sample(jst(1, 20, 6, 0), 9, 9),
    ]);
    let points = align_night(anchor(), Tokyo, Some(&current), Some(&empty()));

    let at_19 = points.iter().find(|p| p.time_label == "19:00").unwrap();
    assert_eq!(at_19.male, Some(2));
    let at_20 = points.iter().find(|p| p.time_label == "20:00").unwrap();
    assert_eq!(at_20.male, None);
}

#[test]
fn equidistant_candidates_resolve_to_earlier_sample() {
    // Both samples are exactly 5 minutes from the 18:05-free grid: a slot at
    // 18:00 sees the 18:05 sample at distance 5 only after the earlier one at
    // 17:55 is considered; ascending order makes 17:55 win.
    let current = series(vec![
        sample(jst(1, 18, 5, 0), 20, 20),
        sample(jst(1, 17, 55, 0), 1, 1),
    ]);
    let points = align_night(anchor(), Tokyo, Some(&current), Some(&empty()));
    assert_eq!(points[0].time_label, "18:00");
    assert_eq!(points[0].male, Some(1));
}

#[test]
fn a_sample_feeds_at_most_one_slot() {
    // 18:05 is equidistant from the 18:00 and 18:10 slots; the earlier slot
    // consumes it and the later slot stays absent.
    let current = series(vec![sample(jst(1, 18, 5, 0), 6, 1)]);
    let points = align_night(anchor(), Tokyo, Some(&current), Some(&empty()));
    assert_eq!(points[0].male, Some(6));
    assert_eq!(points[1].male, None);
    assert_eq!(points.iter().filter(|p| p.male.is_some()).count(), 1);
}

#[test]
fn observed_zero_is_not_absent() {
    let current = series(vec![sample(jst(1, 22, 0, 0), 0, 0)]);
    let points = align_night(anchor(), Tokyo, Some(&current), Some(&empty()));

    let slot = points.iter().find(|p| p.time_label == "22:00").unwrap();
    assert_eq!(slot.male, Some(0));
    assert_eq!(slot.female, Some(0));
}

#[test]
fn series_are_matched_independently() {
    let current = series(vec![sample(jst(1, 21, 0, 0), 3, 1)]);
    let comparison = series(vec![sample(jst(1, 23, 30, 0), 8, 5)]);
    let points = align_night(anchor(), Tokyo, Some(&current), Some(&comparison));

    let at_21 = points.iter().find(|p| p.time_label == "21:00").unwrap();
    assert_eq!(at_21.male, Some(3));
    assert_eq!(at_21.prev_male, None);
    let at_2330 = points.iter().find(|p| p.time_label == "23:30").unwrap();
    assert_eq!(at_2330.male, None);
    assert_eq!(at_2330.prev_male, Some(8));
    assert_eq!(at_2330.prev_female, Some(5));
}

#[test]
fn missing_input_yields_empty_output() {
    let current = series(vec![sample(jst(1, 18, 0, 0), 5, 5)]);
    assert!(align_night(anchor(), Tokyo, Some(&current), None).is_empty());
    assert!(align_night(anchor(), Tokyo, None, Some(&current)).is_empty());
    assert!(align_night(anchor(), Tokyo, None, None).is_empty());
}

#[test]
fn loaded_but_empty_yields_full_grid_of_absent_points() {
    let points = align_night(anchor(), Tokyo, Some(&empty()), Some(&empty()));
    assert_eq!(points.len(), GRID_LEN);
    assert!(points.iter().all(|p| {
        p.male.is_none() && p.female.is_none() && p.prev_male.is_none() && p.prev_female.is_none()
    }));
}

#[test]
fn every_grid_hour_lies_in_the_overnight_window() {
    let points = align_night(anchor(), Tokyo, Some(&empty()), Some(&empty()));
    assert!(points.iter().all(|p| is_overnight_hour(p.hour_of_day)));
}

#[test]
fn samples_outside_the_window_never_match() {
    // 03:30 normalizes to 27:30, 40 minutes past the last slot at 02:50.
    // 12:00 is nowhere near any slot.
    let current = series(vec![sample(jst(2, 3, 30, 0), 4, 4), sample(jst(1, 12, 0, 0), 6, 6)]);
    let points = align_night(anchor(), Tokyo, Some(&current), Some(&empty()));
    assert!(points.iter().all(|p| p.male.is_none()));
}

#[test]
fn input_order_does_not_matter() {
    let a = sample(jst(1, 18, 2, 0), 5, 3);
    let b = sample(jst(1, 19, 58, 0), 2, 9);
    let c = sample(jst(2, 1, 4, 0), 1, 1);
    let fwd = align_night(
        anchor(),
        Tokyo,
        Some(&series(vec![a, b, c])),
        Some(&empty()),
    );
    let rev = align_night(
        anchor(),
        Tokyo,
        Some(&series(vec![c, b, a])),
        Some(&empty()),
    );
    assert_eq!(fwd, rev);
}
