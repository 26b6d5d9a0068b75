// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-unit boundaries.
//!
//! Each function reads the date's wall-clock fields in `tz`, moves to the
//! start of the enclosing day, week, or month, and maps local midnight back
//! onto the timeline.  Where midnight was skipped by a DST transition the
//! first existing local time of that day is returned.
//!
//! The invalid sentinel snaps to itself.

use crate::instant::Instant;
use crate::zone::resolve_local_instant;
use chrono::{Datelike, Duration, NaiveDate, TimeZone, Weekday};

/// Which weekday a calendar week begins on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WeekOptions {
    pub week_starts_on: Weekday,
}

impl WeekOptions {
    /// Weeks starting on Monday, as in ISO 8601.
    pub const ISO: Self = Self::new(Weekday::Mon);

    pub const fn new(week_starts_on: Weekday) -> Self {
        Self { week_starts_on }
    }
}

impl Default for WeekOptions {
    /// Weeks start on Sunday.
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}

impl From<Weekday> for WeekOptions {
    #[inline]
    fn from(week_starts_on: Weekday) -> Self {
        Self::new(week_starts_on)
    }
}

/// Snap `date` to local midnight of the day returned by `boundary`.
fn snap<Tz, F>(date: Instant, tz: &Tz, boundary: F) -> Instant
where
    Tz: TimeZone,
    F: FnOnce(NaiveDate) -> Option<NaiveDate>,
{
    let midnight = date
        .to_datetime(tz)
        .and_then(|local| boundary(local.date_naive()))
        .and_then(|day| day.and_hms_opt(0, 0, 0));
    resolve_local_instant(tz, midnight)
}

/// The most recent `week_starts_on` day on or before `day`.
pub(crate) fn week_start(day: NaiveDate, week_starts_on: Weekday) -> Option<NaiveDate> {
    let back = (7 + day.weekday().num_days_from_sunday() - week_starts_on.num_days_from_sunday()) % 7;
    day.checked_sub_signed(Duration::days(back.into()))
}

/// Start of the local day containing `date`.
pub fn start_of_day<Tz: TimeZone>(date: impl Into<Instant>, tz: &Tz) -> Instant {
    snap(date.into(), tz, Some)
}

/// Start of the local week containing `date`.
///
/// ```
/// use caldiff::{start_of_week, Instant, WeekOptions};
/// use chrono::{TimeZone, Utc, Weekday};
///
/// // Tuesday 2 September 2014
/// let date = Utc.with_ymd_and_hms(2014, 9, 2, 11, 55, 0).unwrap();
/// let sunday = Utc.with_ymd_and_hms(2014, 8, 31, 0, 0, 0).unwrap();
/// let monday = Utc.with_ymd_and_hms(2014, 9, 1, 0, 0, 0).unwrap();
///
/// assert_eq!(start_of_week(date, &Utc, WeekOptions::default()), Instant::from(sunday));
/// assert_eq!(start_of_week(date, &Utc, Weekday::Mon.into()), Instant::from(monday));
/// ```
pub fn start_of_week<Tz: TimeZone>(date: impl Into<Instant>, tz: &Tz, options: WeekOptions) -> Instant {
    snap(date.into(), tz, |day| week_start(day, options.week_starts_on))
}

/// Start of the local ISO week (Monday) containing `date`.
pub fn start_of_iso_week<Tz: TimeZone>(date: impl Into<Instant>, tz: &Tz) -> Instant {
    start_of_week(date, tz, WeekOptions::ISO)
}

/// Start of the local month containing `date`.
pub fn start_of_month<Tz: TimeZone>(date: impl Into<Instant>, tz: &Tz) -> Instant {
    snap(date.into(), tz, |day| day.with_day(1))
}

/// Whether `date` falls on the last day of its local month.
///
/// Invalid dates are never the last day of a month.
pub fn is_last_day_of_month<Tz: TimeZone>(date: impl Into<Instant>, tz: &Tz) -> bool {
    date.into()
        .to_datetime(tz)
        .and_then(|local| local.date_naive().succ_opt())
        .is_some_and(|next| next.day() == 1)
}
