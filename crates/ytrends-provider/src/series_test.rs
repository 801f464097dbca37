use chrono::{NaiveDate, Timelike};

use super::*;

fn naive(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn point(time: &str, value: Vec<f64>, is_partial: Option<bool>) -> TimelinePoint {
    TimelinePoint {
        time: time.to_owned(),
        value,
        is_partial,
    }
}

fn keywords(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn from_timeline_builds_columns_in_keyword_order() {
    let series = TrendSeries::from_timeline(
        &keywords(&["a", "b"]),
        vec![
            point("1709251200", vec![10.0, 20.0], None),
            point("1709251680", vec![30.0, 40.0], None),
        ],
    )
    .unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series.columns()[0].keyword, "a");
    assert_eq!(series.columns()[0].values, vec![10.0, 30.0]);
    assert_eq!(series.columns()[1].values, vec![20.0, 40.0]);
    assert_eq!(series.index()[0], naive(0, 0));
    assert_eq!(series.index()[1], naive(0, 8));
    assert!(series.source_offset().is_none(), "provider timestamps are naive");
    assert!(!series.has_partial_flag());
}

#[test]
fn from_timeline_adds_partial_column_when_any_bucket_reports_it() {
    let series = TrendSeries::from_timeline(
        &keywords(&["a"]),
        vec![
            point("1709251200", vec![1.0], None),
            point("1709251680", vec![2.0], Some(true)),
        ],
    )
    .unwrap();
    assert_eq!(series.partial(), Some(&[false, true][..]));
}

#[test]
fn from_timeline_rejects_value_count_mismatch() {
    let err = TrendSeries::from_timeline(
        &keywords(&["a", "b"]),
        vec![point("1709251200", vec![1.0], None)],
    )
    .unwrap_err();
    assert!(matches!(err, TrendsError::MalformedTimeline(_)));
}

#[test]
fn from_timeline_rejects_non_numeric_time() {
    let err = TrendSeries::from_timeline(
        &keywords(&["a"]),
        vec![point("yesterday", vec![1.0], None)],
    )
    .unwrap_err();
    assert!(err.to_string().contains("yesterday"), "got: {err}");
}

#[test]
fn from_timeline_empty_points_is_empty_series() {
    let series = TrendSeries::from_timeline(&keywords(&["a"]), vec![]).unwrap();
    assert!(series.is_empty());
    assert_eq!(series.columns().len(), 1);
}

#[test]
fn new_rejects_ragged_columns() {
    let err = TrendSeries::new(
        vec![naive(0, 0), naive(1, 0)],
        vec![ScoreColumn {
            keyword: "a".to_owned(),
            values: vec![1.0],
        }],
        None,
    )
    .unwrap_err();
    assert!(err.to_string().contains("'a'"), "got: {err}");
}

#[test]
fn drop_partial_flag_is_idempotent() {
    let series = TrendSeries::new(
        vec![naive(0, 0)],
        vec![ScoreColumn {
            keyword: "a".to_owned(),
            values: vec![5.0],
        }],
        Some(vec![true]),
    )
    .unwrap();

    let once = series.clone().drop_partial_flag();
    assert!(!once.has_partial_flag());
    assert_eq!(once.columns(), series.columns());

    let twice = once.clone().drop_partial_flag();
    assert_eq!(twice, once);
}

#[test]
fn naive_index_is_localized_as_utc() {
    let series = TrendSeries::new(vec![naive(17, 0)], vec![], None).unwrap();
    let localized = series.localized_index();
    assert_eq!(localized[0].naive_utc(), naive(17, 0));
}

#[test]
fn aware_index_keeps_its_source_offset() {
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    let series = TrendSeries::new(vec![naive(12, 0)], vec![], None)
        .unwrap()
        .with_source_offset(plus_two);
    assert_eq!(series.localized_index()[0].naive_utc(), naive(10, 0));
}

#[test]
fn converted_index_shifts_wall_clock_to_target() {
    let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
    let series = TrendSeries::new(vec![naive(20, 30)], vec![], None).unwrap();
    let converted = series.converted_index(jakarta);
    assert_eq!(converted[0].hour(), 3);
    assert_eq!(converted[0].minute(), 30);
    assert_eq!(converted[0].offset(), &jakarta);
}

#[test]
fn timezone_round_trip_preserves_instant() {
    let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
    let series = TrendSeries::new(vec![naive(0, 0), naive(23, 52)], vec![], None).unwrap();
    let utc = series.localized_index();
    let back: Vec<DateTime<Utc>> = series
        .converted_index(jakarta)
        .into_iter()
        .map(|dt| dt.with_timezone(&Utc))
        .collect();
    assert_eq!(back, utc);
}
