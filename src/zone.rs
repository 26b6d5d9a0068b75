// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-zone helpers.
//!
//! Calendar arithmetic reads and writes *wall-clock* fields in a caller
//! supplied zone.  Two conversions are needed for that:
//!
//! - instant → wall clock, whose gap to the instant is the zone offset
//!   ([`timezone_offset_in_milliseconds`]);
//! - wall clock → instant, which must cope with local times that a DST
//!   transition skipped or repeated ([`resolve_local`]).

use crate::instant::Instant;
use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone};

/// Offset of `tz` at `date`, in milliseconds, measured as
/// `instant − wall clock`.
///
/// The sign convention is positive west of Greenwich: New York in summer
/// (UTC−4) gives `14_400_000`.  Invalid dates give `NaN`.
///
/// ```
/// use caldiff::timezone_offset_in_milliseconds;
/// use chrono::{FixedOffset, TimeZone};
///
/// let tz = FixedOffset::east_opt(2 * 3600).unwrap();
/// let date = tz.with_ymd_and_hms(2014, 7, 2, 0, 0, 0).unwrap();
/// assert_eq!(timezone_offset_in_milliseconds(date, &tz), -7_200_000.0);
/// ```
pub fn timezone_offset_in_milliseconds<Tz: TimeZone>(date: impl Into<Instant>, tz: &Tz) -> f64 {
    let instant = date.into();
    match instant.to_datetime(tz) {
        Some(local) => instant.value() - wall_clock_millis(&local),
        None => f64::NAN,
    }
}

/// The local calendar fields of `datetime` read as if they were UTC.
#[inline]
pub(crate) fn wall_clock_millis<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    datetime.naive_local().and_utc().timestamp_millis() as f64
}

/// Map a wall-clock time in `tz` back onto the timeline.
///
/// An ambiguous time (clocks turned back) resolves to the earlier instant.
/// A skipped time (clocks turned forward) is read with the offset in force
/// before the transition, which lands the same distance past the gap.
pub(crate) fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    if let Some(datetime) = tz.from_local_datetime(&naive).earliest() {
        return Some(datetime);
    }

    let before = naive.checked_sub_signed(Duration::days(1))?;
    let offset = tz.offset_from_local_datetime(&before).earliest()?.fix();
    let utc = naive.checked_sub_signed(Duration::seconds(offset.local_minus_utc().into()))?;

    #[cfg(feature = "log")]
    log::trace!("local time {naive} skipped by a zone transition, using offset {offset}");

    Some(tz.from_utc_datetime(&utc))
}

/// [`resolve_local`] as an [`Instant`], invalid when unresolvable.
#[inline]
pub(crate) fn resolve_local_instant<Tz: TimeZone>(tz: &Tz, naive: Option<NaiveDateTime>) -> Instant {
    naive.and_then(|naive| resolve_local(tz, naive)).into()
}
