use caldiff::{
    compare_asc, compare_desc, difference_in_calendar_days, difference_in_calendar_iso_weeks,
    difference_in_calendar_weeks, difference_in_days, difference_in_hours,
    difference_in_milliseconds, difference_in_minutes, difference_in_months,
    difference_in_quarters, difference_in_seconds, difference_in_weeks, ordering_desc, Instant,
    RoundingMethod, RoundingOptions, WeekOptions,
};
use chrono::{DateTime, Local, TimeZone, Utc};

fn local(y: i32, m: u32, d: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

#[test]
fn comparator_is_antisymmetric_and_reflexive() {
    let dates = [local(1987, 2, 11), local(1989, 7, 10), local(1995, 7, 2)];
    for a in dates {
        assert_eq!(compare_desc(a, a), 0.0);
        assert_eq!(compare_asc(a, a), 0.0);
        for b in dates {
            if a != b {
                assert_eq!(compare_desc(a, b), -compare_desc(b, a));
            }
        }
    }
}

#[test]
fn descending_sort_is_reverse_chronological() {
    let mut dates = vec![local(1995, 7, 2), local(1987, 2, 11), local(1989, 7, 10)];
    dates.sort_by(|a, b| ordering_desc(a, b));
    assert_eq!(
        dates,
        vec![local(1995, 7, 2), local(1989, 7, 10), local(1987, 2, 11)]
    );
}

#[test]
fn invalid_dates_yield_self_unequal_sentinel() {
    let valid = local(2014, 7, 2);
    let out_of_range = Local.with_ymd_and_hms(2014, 2, 30, 0, 0, 0).single();
    let options = RoundingOptions::default();
    let week = WeekOptions::default();

    let results = [
        compare_desc(out_of_range, valid),
        compare_asc(valid, Instant::INVALID),
        difference_in_milliseconds(f64::NAN, valid),
        difference_in_calendar_iso_weeks(valid, out_of_range, &Local),
        difference_in_days(Instant::INVALID, valid, &Local),
        difference_in_months(valid, Instant::INVALID, &Local),
        difference_in_quarters(out_of_range, valid, &Local, options),
        difference_in_seconds(Instant::INVALID, valid, options),
        difference_in_seconds(valid, out_of_range, options),
        difference_in_minutes(out_of_range, valid, options),
        difference_in_minutes(valid, Instant::INVALID, options),
        difference_in_hours(f64::NAN, valid, options),
        difference_in_hours(valid, out_of_range, options),
        difference_in_calendar_days(Instant::INVALID, valid, &Local),
        difference_in_calendar_days(valid, out_of_range, &Local),
        difference_in_calendar_weeks(out_of_range, valid, &Local, week),
        difference_in_calendar_weeks(valid, Instant::INVALID, &Local, week),
        difference_in_weeks(Instant::INVALID, valid, &Local, options),
        difference_in_weeks(valid, out_of_range, &Local, options),
    ];
    for result in results {
        assert!(result != result, "expected NaN, got {result}");
    }
}

#[test]
fn timestamps_and_dates_are_interchangeable() {
    let left = local(2014, 7, 21);
    let right = local(2014, 7, 6);
    let (left_ms, right_ms) = (left.timestamp_millis(), right.timestamp_millis());

    assert_eq!(
        difference_in_calendar_iso_weeks(left, right, &Local),
        difference_in_calendar_iso_weeks(left_ms, right_ms, &Local)
    );
    assert_eq!(
        difference_in_quarters(left, right, &Local, RoundingOptions::default()),
        difference_in_quarters(left_ms as f64, right, &Local, RoundingOptions::default())
    );
    assert_eq!(compare_desc(left, right), compare_desc(left_ms, right_ms));
    assert_eq!(
        difference_in_milliseconds(left, right),
        difference_in_milliseconds(left_ms, right_ms)
    );
}

#[test]
fn worked_examples() {
    let later = Local.with_ymd_and_hms(2014, 7, 2, 12, 30, 20).unwrap();
    assert_eq!(
        difference_in_milliseconds(
            later + chrono::Duration::milliseconds(700),
            later + chrono::Duration::milliseconds(600)
        ),
        100.0
    );
    assert_eq!(
        difference_in_quarters(
            Local.with_ymd_and_hms(2014, 7, 2, 0, 0, 0).unwrap(),
            Local.with_ymd_and_hms(2013, 12, 31, 0, 0, 0).unwrap(),
            &Local,
            RoundingOptions::default()
        ),
        2.0
    );
    assert_eq!(
        difference_in_calendar_iso_weeks(local(2014, 7, 21), local(2014, 7, 6), &Local),
        3.0
    );
}

#[test]
fn rounding_option_changes_quarter_count() {
    let left = Utc.with_ymd_and_hms(2014, 7, 2, 0, 0, 0).unwrap();
    let right = Utc.with_ymd_and_hms(2013, 12, 1, 0, 0, 0).unwrap();
    let ceil = RoundingOptions::new(RoundingMethod::Ceil);
    assert_eq!(difference_in_quarters(left, right, &Utc, ceil), 3.0);
    let fallback = RoundingMethod::from_name(Some("nope")).into();
    assert_eq!(difference_in_quarters(left, right, &Utc, fallback), 2.0);
}

#[cfg(feature = "serde")]
#[test]
fn serde_options_drive_rounding() {
    let options: RoundingOptions = serde_json::from_str(r#"{"roundingMethod":"ceil"}"#).unwrap();
    let left = Utc.with_ymd_and_hms(2014, 7, 2, 0, 0, 0).unwrap();
    let right = Utc.with_ymd_and_hms(2013, 12, 1, 0, 0, 0).unwrap();
    assert_eq!(difference_in_quarters(left, right, &Utc, options), 3.0);

    let instant: Instant = serde_json::from_str("1404304220700").unwrap();
    assert_eq!(instant.value(), 1_404_304_220_700.0);
    assert_eq!(serde_json::to_string(&instant).unwrap(), "1404304220700.0");
}
