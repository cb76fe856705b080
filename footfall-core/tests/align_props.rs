use chrono::{Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Asia::Tokyo;
use footfall_core::{
    GRID_LEN, GRID_STEP_MINUTES, MATCH_TOLERANCE_MINUTES, RawSample, VisitorSeries, align_night,
    normalized_minutes,
};
use proptest::prelude::*;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

// Samples scattered from an hour before the window opens to past its close,
// at second resolution, so matching sees in-window and out-of-window inputs.
fn arb_sample() -> impl Strategy<Value = RawSample> {
    (-3600i64..=36_000i64, 0u32..1000, 0u32..1000).prop_map(|(offset_secs, male, female)| {
        let start = Tokyo
            .with_ymd_and_hms(2024, 6, 1, 18, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        RawSample {
            ts: start + Duration::seconds(offset_secs),
            male,
            female,
        }
    })
}

fn arb_series() -> impl Strategy<Value = VisitorSeries> {
    proptest::collection::vec(arb_sample(), 0..120).prop_map(|samples| VisitorSeries {
        shop: "shop-12".into(),
        date: anchor(),
        samples,
    })
}

proptest! {
    #[test]
    fn align_is_idempotent(current in arb_series(), comparison in arb_series()) {
        let once = align_night(anchor(), Tokyo, Some(&current), Some(&comparison));
        let twice = align_night(anchor(), Tokyo, Some(&current), Some(&comparison));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_is_always_the_full_grid(current in arb_series(), comparison in arb_series()) {
        let points = align_night(anchor(), Tokyo, Some(&current), Some(&comparison));
        prop_assert_eq!(points.len(), GRID_LEN);
        for pair in points.windows(2) {
            prop_assert_eq!((pair[1].ts - pair[0].ts).num_minutes(), GRID_STEP_MINUTES);
        }
    }

    #[test]
    fn every_match_has_a_sample_within_tolerance(current in arb_series(), comparison in arb_series()) {
        let points = align_night(anchor(), Tokyo, Some(&current), Some(&comparison));
        for p in &points {
            let slot_norm = normalized_minutes(p.ts, Tokyo);
            if let (Some(male), Some(female)) = (p.male, p.female) {
                let witness = current.samples.iter().any(|s| {
                    s.male == male
                        && s.female == female
                        && (normalized_minutes(s.ts, Tokyo) - slot_norm).abs()
                            <= MATCH_TOLERANCE_MINUTES
                });
                prop_assert!(witness, "slot {} has no witness sample", p.time_label);
            }
        }
    }

    #[test]
    fn matched_slots_never_outnumber_samples(current in arb_series(), comparison in arb_series()) {
        let points = align_night(anchor(), Tokyo, Some(&current), Some(&comparison));
        let cur_matched = points.iter().filter(|p| p.male.is_some()).count();
        let cmp_matched = points.iter().filter(|p| p.prev_male.is_some()).count();
        prop_assert!(cur_matched <= current.samples.len());
        prop_assert!(cmp_matched <= comparison.samples.len());
    }

    #[test]
    fn male_and_female_are_present_together(current in arb_series(), comparison in arb_series()) {
        let points = align_night(anchor(), Tokyo, Some(&current), Some(&comparison));
        for p in points {
            prop_assert_eq!(p.male.is_some(), p.female.is_some());
            prop_assert_eq!(p.prev_male.is_some(), p.prev_female.is_some());
        }
    }
}
