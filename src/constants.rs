// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Unit lengths shared by the difference functions.
//!
//! Millisecond lengths are plain `f64` so that sentinel `NaN` values flow
//! through divisions unchanged.  Calendar deltas (which are rounded to the
//! nearest whole unit) are expressed as [`Days`] quantities instead.
//!
//! [`MILLISECONDS_IN_DAY`] and [`MILLISECONDS_IN_WEEK`] are exported for
//! callers only.  The calendar differences count through [`DAYS_IN_DAY`] and
//! [`DAYS_IN_WEEK`], which give the same whole-unit results.

use qtty::Days;

/// Milliseconds in one second.
pub const MILLISECONDS_IN_SECOND: f64 = 1_000.0;

/// Milliseconds in one minute.
pub const MILLISECONDS_IN_MINUTE: f64 = 60_000.0;

/// Milliseconds in one hour.
pub const MILLISECONDS_IN_HOUR: f64 = 3_600_000.0;

/// Milliseconds in a nominal 24-hour day.
pub const MILLISECONDS_IN_DAY: f64 = 86_400_000.0;

/// Milliseconds in a nominal week of seven 24-hour days.
pub const MILLISECONDS_IN_WEEK: f64 = 604_800_000.0;

/// Largest magnitude of a valid time value: ±100 000 000 days around the epoch.
pub const MAX_TIME_VALUE: f64 = 8.64e15;

/// One calendar day.
pub const DAYS_IN_DAY: Days = Days::new(1.0);

/// One calendar week.
pub const DAYS_IN_WEEK: Days = Days::new(7.0);
