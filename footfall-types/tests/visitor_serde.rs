use chrono::{DateTime, NaiveDate, Utc};
use footfall_types::{AlignedPoint, RawSample, VisitorRequest, VisitorSeries};

fn t(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).unwrap()
}

#[test]
fn request_date_uses_dashed_form() {
    let req = VisitorRequest {
        shop: "shop-12".into(),
        date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    };
    let json = serde_json::to_value(&req).expect("serialize request");
    assert_eq!(json["shop"], "shop-12");
    assert_eq!(json["date"], "2024-06-01");

    let de: VisitorRequest = serde_json::from_value(json).expect("deserialize request");
    assert_eq!(de, req);
}

#[test]
fn raw_sample_timestamp_is_epoch_seconds() {
    let sample = RawSample {
        ts: t(1_717_261_320),
        male: 5,
        female: 3,
    };
    let json = serde_json::to_value(sample).expect("serialize sample");
    assert_eq!(json["ts"], 1_717_261_320i64);
    assert_eq!(sample.total(), 8);

    let de: RawSample = serde_json::from_value(json).expect("deserialize sample");
    assert_eq!(de, sample);
}

#[test]
fn series_roundtrip() {
    let series = VisitorSeries {
        shop: "shop-12".into(),
        date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        samples: vec![
            RawSample {
                ts: t(1_717_261_320),
                male: 5,
                female: 3,
            },
            RawSample {
                ts: t(1_717_261_920),
                male: 0,
                female: 1,
            },
        ],
    };
    let json = serde_json::to_string(&series).expect("serialize series");
    let de: VisitorSeries = serde_json::from_str(&json).expect("deserialize series");
    assert_eq!(de, series);
}

#[test]
fn absent_counts_are_omitted_not_null() {
    let point = AlignedPoint {
        ts: t(1_717_261_200),
        time_label: "18:00".to_string(),
        hour_of_day: 18,
        male: Some(0),
        female: Some(3),
        prev_male: None,
        prev_female: None,
    };
    let json = serde_json::to_value(&point).expect("serialize point");
    // Observed zero stays present; unobserved slots disappear entirely.
    assert_eq!(json["male"], 0);
    assert_eq!(json["female"], 3);
    assert!(json.get("prev_male").is_none());
    assert!(json.get("prev_female").is_none());

    let de: AlignedPoint = serde_json::from_value(json).expect("deserialize point");
    assert_eq!(de, point);
}
