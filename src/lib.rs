// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date Arithmetic
//!
//! Pure functions computing differences, comparisons and calendar-unit
//! boundaries between dates.
//!
//! # Core types
//!
//! - [`Instant`] - epoch milliseconds, with `NaN` as the invalid-date sentinel.
//! - [`RoundingMethod`] / [`RoundingOptions`] - how fractional unit counts
//!   become whole ones (truncation by default).
//! - [`WeekOptions`] - the weekday a calendar week starts on.
//!
//! # Date-like arguments
//!
//! Every function accepts `impl Into<Instant>`: a `chrono::DateTime` in any
//! zone (owned or borrowed), an `f64`/`i64` millisecond timestamp, an
//! [`Instant`], or an `Option` of any of these where `None` stands for an
//! invalid date.  Dates and their timestamps give identical results.
//!
//! # Zones
//!
//! Calendar operations read wall-clock fields in an explicit `tz:
//! &impl chrono::TimeZone`.  Pass `&chrono::Local` for the process-local
//! zone.
//!
//! # Invalid dates
//!
//! Nothing in this crate returns an error for an invalid date.  Instead the
//! numeric result is `NaN`, which every subsequent arithmetic step keeps.
//!
//! | Function | Unit | Zone | Rounding |
//! |----------|------|------|----------|
//! | [`difference_in_milliseconds`] | ms | - | - |
//! | [`difference_in_seconds`], [`difference_in_minutes`], [`difference_in_hours`] | s, min, h | - | [`RoundingOptions`] |
//! | [`difference_in_calendar_days`], [`difference_in_calendar_weeks`], [`difference_in_calendar_iso_weeks`] | boundaries | yes | nearest |
//! | [`difference_in_calendar_months`] | boundaries | yes | - |
//! | [`difference_in_days`], [`difference_in_months`] | full units | yes | - |
//! | [`difference_in_weeks`], [`difference_in_quarters`] | full units | yes | [`RoundingOptions`] |

mod boundaries;
mod compare;
pub mod constants;
mod difference;
pub(crate) mod instant;
mod rounding;
mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use boundaries::{
    is_last_day_of_month, start_of_day, start_of_iso_week, start_of_month, start_of_week,
    WeekOptions,
};
pub use compare::{compare_asc, compare_desc, ordering_asc, ordering_desc};
pub use difference::{
    difference_in_calendar_days, difference_in_calendar_iso_weeks, difference_in_calendar_months,
    difference_in_calendar_weeks, difference_in_days, difference_in_hours,
    difference_in_milliseconds, difference_in_minutes, difference_in_months,
    difference_in_quarters, difference_in_seconds, difference_in_weeks,
};
pub use instant::{is_valid, Instant};
pub use rounding::{get_rounding_method, ParseRoundingMethodError, RoundingMethod, RoundingOptions};
pub use zone::timezone_offset_in_milliseconds;
