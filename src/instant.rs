// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Canonical epoch-millisecond instant.
//!
//! [`Instant`] is the single representation every operation in this crate
//! works on.  It stores a whole number of milliseconds since
//! 1970-01-01T00:00:00Z as an `f64`, so that an invalid date is simply
//! [`f64::NAN`]: any sum, difference, quotient or rounding involving it is
//! `NaN` as well, without special casing at each step.
//!
//! Date-like arguments are accepted through `impl Into<Instant>`; the
//! `From` impls below are the only place where input shapes are told apart:
//!
//! | Input | Instant |
//! |-------|---------|
//! | `f64`, `i64` | time-clipped pass-through |
//! | `DateTime<Tz>`, `&DateTime<Tz>` | `timestamp_millis()` |
//! | `Option<T>` | `None` → [`Instant::INVALID`] |
//! | `Instant`, `&Instant` | itself |

use crate::constants::MAX_TIME_VALUE;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt;
use std::ops::Sub;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// Instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point on the UTC timeline with millisecond precision, or the invalid
/// sentinel.
///
/// Equality follows IEEE semantics: an invalid instant is not equal to
/// anything, itself included.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Instant {
    millis: f64,
}

impl Instant {
    /// The invalid-date sentinel.
    pub const INVALID: Self = Self { millis: f64::NAN };

    /// 1970-01-01T00:00:00Z.
    pub const EPOCH: Self = Self { millis: 0.0 };

    // ── constructors ──────────────────────────────────────────────────

    /// Create from milliseconds since the Unix epoch.
    ///
    /// Non-finite values and values beyond ±8.64e15 ms are invalid.  Finite
    /// values are truncated toward zero to whole milliseconds.
    #[inline]
    pub fn new(millis: f64) -> Self {
        if !millis.is_finite() || millis.abs() > MAX_TIME_VALUE {
            return Self::INVALID;
        }
        // `+ 0.0` turns a truncated `-0.0` into `+0.0`.
        Self {
            millis: millis.trunc() + 0.0,
        }
    }

    /// Create from a `chrono` date-time in any zone.
    #[inline]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::new(datetime.timestamp_millis() as f64)
    }

    /// The current system time.
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Milliseconds since the Unix epoch, `NaN` when invalid.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.millis
    }

    /// Whether this instant represents an actual point in time.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.millis.is_nan()
    }

    /// Convert to a `chrono` date-time in `tz`.
    ///
    /// Returns `None` for the sentinel and for instants outside chrono's
    /// representable range.
    pub fn to_datetime<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        if !self.is_valid() {
            return None;
        }
        DateTime::<Utc>::from_timestamp_millis(self.millis as i64).map(|utc| utc.with_timezone(tz))
    }
}

/// Whether `date` normalizes to a valid instant.
///
/// ```
/// use caldiff::{is_valid, Instant};
/// use chrono::{TimeZone, Utc};
///
/// assert!(is_valid(Utc.with_ymd_and_hms(2014, 2, 11, 0, 0, 0).unwrap()));
/// assert!(!is_valid(Utc.with_ymd_and_hms(2014, 2, 31, 0, 0, 0).single()));
/// assert!(!is_valid(Instant::INVALID));
/// ```
#[inline]
pub fn is_valid(date: impl Into<Instant>) -> bool {
    date.into().is_valid()
}

// ═══════════════════════════════════════════════════════════════════════════
// Normalization
// ═══════════════════════════════════════════════════════════════════════════

impl From<f64> for Instant {
    #[inline]
    fn from(millis: f64) -> Self {
        Self::new(millis)
    }
}

impl From<i64> for Instant {
    #[inline]
    fn from(millis: i64) -> Self {
        Self::new(millis as f64)
    }
}

impl From<&Instant> for Instant {
    #[inline]
    fn from(instant: &Instant) -> Self {
        *instant
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    #[inline]
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_datetime(&datetime)
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for Instant {
    #[inline]
    fn from(datetime: &DateTime<Tz>) -> Self {
        Self::from_datetime(datetime)
    }
}

impl<T: Into<Instant>> From<Option<T>> for Instant {
    #[inline]
    fn from(date: Option<T>) -> Self {
        date.map_or(Self::INVALID, Into::into)
    }
}

impl From<Instant> for f64 {
    #[inline]
    fn from(instant: Instant) -> Self {
        instant.millis
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Sub for Instant {
    /// Signed difference in milliseconds.
    type Output = f64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.millis - rhs.millis
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime(&Utc) {
            Some(datetime) => write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            None if self.is_valid() => write!(f, "{} ms", self.millis),
            None => f.write_str("Invalid Date"),
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.millis)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = f64::deserialize(deserializer)?;
        Ok(Self::new(millis))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
