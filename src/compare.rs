// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tri-state date comparators.
//!
//! [`compare_asc`] and [`compare_desc`] return `-1.0`, `0.0`, `1.0`, or the
//! `NaN` sentinel when either side is invalid.  [`ordering_asc`] and
//! [`ordering_desc`] give total orders for `sort_by`, placing invalid dates
//! last.

use crate::instant::Instant;
use std::cmp::Ordering;

/// Reduce a millisecond difference to its sign, keeping `NaN`.
#[inline]
fn sign_of(diff: f64) -> f64 {
    if diff < 0.0 {
        -1.0
    } else if diff > 0.0 {
        1.0
    } else if diff == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

/// `1.0` if `left` is after `right`, `-1.0` if before, `0.0` if equal.
pub fn compare_asc(left: impl Into<Instant>, right: impl Into<Instant>) -> f64 {
    sign_of(left.into() - right.into())
}

/// `1.0` if `left` is before `right`, `-1.0` if after, `0.0` if equal.
///
/// ```
/// use caldiff::compare_desc;
/// use chrono::{TimeZone, Utc};
///
/// let earlier = Utc.with_ymd_and_hms(1987, 2, 11, 0, 0, 0).unwrap();
/// let later = Utc.with_ymd_and_hms(1989, 7, 10, 0, 0, 0).unwrap();
/// assert_eq!(compare_desc(earlier, later), 1.0);
/// assert!(compare_desc(earlier, None::<f64>).is_nan());
/// ```
pub fn compare_desc(left: impl Into<Instant>, right: impl Into<Instant>) -> f64 {
    sign_of(right.into() - left.into())
}

/// Chronological order; invalid dates sort after valid ones.
pub fn ordering_asc(left: impl Into<Instant>, right: impl Into<Instant>) -> Ordering {
    let (left, right) = (left.into(), right.into());
    match (left.is_valid(), right.is_valid()) {
        (true, true) => left.value().total_cmp(&right.value()),
        (valid_left, valid_right) => valid_right.cmp(&valid_left),
    }
}

/// Reverse chronological order; invalid dates sort after valid ones.
///
/// ```
/// use caldiff::ordering_desc;
/// use chrono::{TimeZone, Utc};
///
/// let mut dates = vec![
///     Utc.with_ymd_and_hms(1995, 7, 2, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(1987, 2, 11, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(1989, 7, 10, 0, 0, 0).unwrap(),
/// ];
/// dates.sort_by(|a, b| ordering_desc(a, b));
/// assert_eq!(dates[0], Utc.with_ymd_and_hms(1995, 7, 2, 0, 0, 0).unwrap());
/// assert_eq!(dates[2], Utc.with_ymd_and_hms(1987, 2, 11, 0, 0, 0).unwrap());
/// ```
pub fn ordering_desc(left: impl Into<Instant>, right: impl Into<Instant>) -> Ordering {
    let (left, right) = (left.into(), right.into());
    match (left.is_valid(), right.is_valid()) {
        (true, true) => right.value().total_cmp(&left.value()),
        (valid_left, valid_right) => valid_right.cmp(&valid_left),
    }
}
