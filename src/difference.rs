// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Differences between two dates in whole units.
//!
//! Every function takes the later date first (`left`) and the earlier one
//! second (`right`); swapping them flips the sign.  Results are `f64` so that
//! an invalid argument yields `NaN`; a zero result is always `+0.0`.
//!
//! # Absolute units
//!
//! Milliseconds, seconds, minutes and hours depend only on the two instants.
//! The fractional count is reduced with the caller's [`RoundingOptions`].
//!
//! # Calendar units
//!
//! Functions named `difference_in_calendar_*` count unit *boundaries*
//! crossed in the local calendar of `tz`.  Both dates are snapped to the
//! start of their unit and shifted by their own zone offset, so that a week
//! containing a DST transition still counts as one week.  The resulting
//! day count is rounded to the nearest integer; this rounding is fixed.
//!
//! Functions without `calendar` count *full* units (days, weeks, months,
//! quarters): a unit only counts once the left date's local time of day
//! (or day of month) has been reached.
//!
//! Every zone-aware function also yields `NaN` for valid instants outside
//! chrono's calendar range (years beyond ±262 143, roughly
//! `|t| > 8.2e15` ms), because their local fields cannot be read.

use crate::boundaries::{
    is_last_day_of_month, start_of_day, start_of_iso_week, start_of_week, WeekOptions,
};
use crate::compare::compare_asc;
use crate::constants::{
    DAYS_IN_DAY, DAYS_IN_WEEK, MILLISECONDS_IN_HOUR, MILLISECONDS_IN_MINUTE,
    MILLISECONDS_IN_SECOND,
};
use crate::instant::Instant;
use crate::rounding::RoundingOptions;
use crate::zone::{resolve_local, timezone_offset_in_milliseconds};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone};
use qtty::{Day, Days, Seconds, Simplify};
use std::cmp::Ordering;

// `+ 0.0` maps -0.0 to +0.0 and leaves every other value, NaN included, as is.
#[inline]
fn positive_zero(value: f64) -> f64 {
    value + 0.0
}

#[inline]
fn ordering_sign(ordering: Ordering) -> f64 {
    f64::from(ordering as i8)
}

// ═══════════════════════════════════════════════════════════════════════════
// Absolute units
// ═══════════════════════════════════════════════════════════════════════════

/// Milliseconds between two dates.
///
/// ```
/// use caldiff::difference_in_milliseconds;
/// use chrono::{TimeZone, Utc};
///
/// let left = Utc.with_ymd_and_hms(2014, 7, 2, 12, 30, 20).unwrap()
///     + chrono::Duration::milliseconds(700);
/// let right = Utc.with_ymd_and_hms(2014, 7, 2, 12, 30, 20).unwrap()
///     + chrono::Duration::milliseconds(600);
/// assert_eq!(difference_in_milliseconds(left, right), 100.0);
/// ```
pub fn difference_in_milliseconds(left: impl Into<Instant>, right: impl Into<Instant>) -> f64 {
    positive_zero(left.into() - right.into())
}

fn difference_in_unit(
    left: Instant,
    right: Instant,
    unit_millis: f64,
    options: RoundingOptions,
) -> f64 {
    options
        .rounding_method
        .apply(difference_in_milliseconds(left, right) / unit_millis)
}

/// Seconds between two dates, rounded per `options`.
pub fn difference_in_seconds(
    left: impl Into<Instant>,
    right: impl Into<Instant>,
    options: RoundingOptions,
) -> f64 {
    difference_in_unit(left.into(), right.into(), MILLISECONDS_IN_SECOND, options)
}

/// Minutes between two dates, rounded per `options`.
pub fn difference_in_minutes(
    left: impl Into<Instant>,
    right: impl Into<Instant>,
    options: RoundingOptions,
) -> f64 {
    difference_in_unit(left.into(), right.into(), MILLISECONDS_IN_MINUTE, options)
}

/// Hours between two dates, rounded per `options`.
pub fn difference_in_hours(
    left: impl Into<Instant>,
    right: impl Into<Instant>,
    options: RoundingOptions,
) -> f64 {
    difference_in_unit(left.into(), right.into(), MILLISECONDS_IN_HOUR, options)
}

// ═══════════════════════════════════════════════════════════════════════════
// Calendar units
// ═══════════════════════════════════════════════════════════════════════════

/// Shared shape of the calendar differences: snapped boundaries, offset
/// corrected, counted in `unit` and rounded to nearest.
fn calendar_difference<Tz, F>(left: Instant, right: Instant, tz: &Tz, unit: Days, snap: F) -> f64
where
    Tz: TimeZone,
    F: Fn(Instant) -> Instant,
{
    let wall_clock = |date: Instant| {
        let boundary = snap(date);
        boundary.value() - timezone_offset_in_milliseconds(boundary, tz)
    };
    let delta = Seconds::new((wall_clock(left) - wall_clock(right)) / MILLISECONDS_IN_SECOND)
        .to::<Day>();
    positive_zero((delta / unit).simplify().value().round())
}

/// Number of local calendar days between two dates.
pub fn difference_in_calendar_days<Tz: TimeZone>(
    left: impl Into<Instant>,
    right: impl Into<Instant>,
    tz: &Tz,
) -> f64 {
    calendar_difference(left.into(), right.into(), tz, DAYS_IN_DAY, |date| {
        start_of_day(date, tz)
    })
}

/// Number of local calendar weeks between two dates.
pub fn difference_in_calendar_weeks<Tz: TimeZone>(
    left: impl Into<Instant>,
    right: impl Into<Instant>,
    tz: &Tz,
    options: WeekOptions,
) -> f64 {
    calendar_difference(left.into(), right.into(), tz, DAYS_IN_WEEK, |date| {
        start_of_week(date, tz, options)
    })
}

/// Number of local calendar ISO weeks between two dates.
///
/// ```
/// use caldiff::difference_in_calendar_iso_weeks;
/// use chrono::{TimeZone, Utc};
///
/// let left = Utc.with_ymd_and_hms(2014, 7, 21, 0, 0, 0).unwrap();
/// let right = Utc.with_ymd_and_hms(2014, 7, 6, 0, 0, 0).unwrap();
/// assert_eq!(difference_in_calendar_iso_weeks(left, right, &Utc), 3.0);
/// ```
pub fn difference_in_calendar_iso_weeks<Tz: TimeZone>(
    left: impl Into<Instant>,
    right: impl Into<Instant>,
    tz: &Tz,
) -> f64 {
    calendar_difference(left.into(), right.into(), tz, DAYS_IN_WEEK, |date| {
        start_of_iso_week(date, tz)
    })
}

/// Number of local calendar months between two dates.
pub fn difference_in_calendar_months<Tz: TimeZone>(
    left: impl Into<Instant>,
    right: impl Into<Instant>,
    tz: &Tz,
) -> f64 {
    let (Some(left), Some(right)) = (left.into().to_datetime(tz), right.into().to_datetime(tz))
    else {
        return f64::NAN;
    };
    let years = left.year() - right.year();
    let months = left.month() as i32 - right.month() as i32;
    positive_zero(f64::from(years * 12 + months))
}

// ═══════════════════════════════════════════════════════════════════════════
// Full units
// ═══════════════════════════════════════════════════════════════════════════

/// Number of full days between two dates.
///
/// A day is full once the left date's local time of day is reached, so the
/// result can differ from [`difference_in_calendar_days`] by one, and a day
/// shortened by DST still counts.
pub fn difference_in_days<Tz: TimeZone>(
    left: impl Into<Instant>,
    right: impl Into<Instant>,
    tz: &Tz,
) -> f64 {
    let (left, right) = (left.into(), right.into());
    let (Some(left_local), Some(right_local)) = (left.to_datetime(tz), right.to_datetime(tz))
    else {
        return f64::NAN;
    };
    let (left_local, right_local) = (left_local.naive_local(), right_local.naive_local());

    let sign = ordering_sign(left_local.cmp(&right_local));
    let difference = difference_in_calendar_days(left, right, tz).abs();

    // Step the left date back over the counted days, keeping its time of day.
    let stepped = left_local
        .checked_sub_signed(Duration::days((sign * difference) as i64))
        .and_then(|naive| resolve_local(tz, naive))
        .map(|datetime| datetime.naive_local());
    let last_day_not_full =
        stepped.is_some_and(|naive| ordering_sign(naive.cmp(&right_local)) == -sign);

    positive_zero(sign * (difference - f64::from(u8::from(last_day_not_full))))
}

/// Number of full weeks between two dates, rounded per `options`.
pub fn difference_in_weeks<Tz: TimeZone>(
    left: impl Into<Instant>,
    right: impl Into<Instant>,
    tz: &Tz,
    options: RoundingOptions,
) -> f64 {
    options
        .rounding_method
        .apply(difference_in_days(left, right, tz) / 7.0)
}

/// `naive` with its day of month set to `day`, rolling over into the
/// following months when the month is shorter.
fn with_day_rolling(naive: NaiveDateTime, day: u32) -> Option<NaiveDateTime> {
    let first = naive.date().with_day(1)?;
    let date = first.checked_add_signed(Duration::days(i64::from(day) - 1))?;
    Some(date.and_time(naive.time()))
}

/// `naive` moved by `months`, keeping its day of month and rolling over
/// when the target month is shorter (31 March − 1 month → 3 March).
fn add_months_rolling(naive: NaiveDateTime, months: i32) -> Option<NaiveDateTime> {
    let total = naive.year() * 12 + naive.month0() as i32 + months;
    let first = NaiveDate::from_ymd_opt(total.div_euclid(12), total.rem_euclid(12) as u32 + 1, 1)?;
    with_day_rolling(first.and_time(naive.time()), naive.day())
}

/// Number of full months between two dates.
///
/// A month is full once the left date's day of month (and time of day) is
/// reached.  The last day of a month completes the month started on any
/// later day of the previous month, so 30 April is one full month after
/// 31 March and 28 February one full month after 31 January.
pub fn difference_in_months<Tz: TimeZone>(
    left: impl Into<Instant>,
    right: impl Into<Instant>,
    tz: &Tz,
) -> f64 {
    let (left, right) = (left.into(), right.into());
    let Some(left_local) = left.to_datetime(tz) else {
        return f64::NAN;
    };
    if !right.is_valid() {
        return f64::NAN;
    }

    let sign = compare_asc(left, right);
    let difference = difference_in_calendar_months(left, right, tz).abs();
    if difference < 1.0 {
        return 0.0;
    }

    let mut moved = Some(left_local.naive_local());
    if left_local.month() == 2 && left_local.day() > 27 {
        moved = moved.and_then(|naive| with_day_rolling(naive, 30));
    }
    let moved: Instant = moved
        .and_then(|naive| add_months_rolling(naive, -((sign * difference) as i32)))
        .and_then(|naive| resolve_local(tz, naive))
        .into();

    let mut last_month_not_full = compare_asc(moved, right) == -sign;
    if is_last_day_of_month(left, tz)
        && difference == 1.0
        && compare_asc(left, right) == 1.0
    {
        last_month_not_full = false;
    }

    positive_zero(sign * (difference - f64::from(u8::from(last_month_not_full))))
}

/// Number of full quarters between two dates, rounded per `options`.
///
/// ```
/// use caldiff::{difference_in_quarters, RoundingOptions};
/// use chrono::{TimeZone, Utc};
///
/// let left = Utc.with_ymd_and_hms(2014, 7, 2, 0, 0, 0).unwrap();
/// let right = Utc.with_ymd_and_hms(2013, 12, 31, 0, 0, 0).unwrap();
/// assert_eq!(difference_in_quarters(left, right, &Utc, RoundingOptions::default()), 2.0);
/// ```
pub fn difference_in_quarters<Tz: TimeZone>(
    left: impl Into<Instant>,
    right: impl Into<Instant>,
    tz: &Tz,
    options: RoundingOptions,
) -> f64 {
    options
        .rounding_method
        .apply(difference_in_months(left, right, tz) / 3.0)
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
