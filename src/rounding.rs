// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Rounding policies applied to fractional unit counts.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// How a fractional unit count is turned into a whole one.
///
/// Every policy propagates `NaN` and never returns `-0.0`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RoundingMethod {
    /// Toward zero.
    #[default]
    Trunc,
    /// To the nearest integer, halves away from zero.
    Round,
    /// Toward positive infinity.
    Ceil,
    /// Toward negative infinity.
    Floor,
}

impl RoundingMethod {
    /// Every policy, in declaration order.
    pub const ALL: [Self; 4] = [Self::Trunc, Self::Round, Self::Ceil, Self::Floor];

    /// The option name (`"trunc"`, `"round"`, `"ceil"`, `"floor"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trunc => "trunc",
            Self::Round => "round",
            Self::Ceil => "ceil",
            Self::Floor => "floor",
        }
    }

    /// Lenient lookup: an absent or unrecognized name selects [`Self::Trunc`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            None => Self::Trunc,
            Some(name) => name.parse().unwrap_or_else(|_err| {
                #[cfg(feature = "log")]
                log::trace!("unrecognized rounding method {name:?}, truncating");
                Self::Trunc
            }),
        }
    }

    /// The rounding function implementing this policy.
    pub fn function(self) -> fn(f64) -> f64 {
        match self {
            Self::Trunc => trunc,
            Self::Round => round,
            Self::Ceil => ceil,
            Self::Floor => floor,
        }
    }

    /// Apply this policy to `value`.
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        (self.function())(value)
    }
}

/// Select a rounding function by option name, defaulting to truncation.
///
/// ```
/// use caldiff::get_rounding_method;
///
/// assert_eq!(get_rounding_method(Some("ceil"))(1.2), 2.0);
/// assert_eq!(get_rounding_method(Some("nearest"))(1.8), 1.0);
/// assert_eq!(get_rounding_method(None)(-1.8), -1.0);
/// ```
pub fn get_rounding_method(name: Option<&str>) -> fn(f64) -> f64 {
    RoundingMethod::from_name(name).function()
}

// `+ 0.0` maps -0.0 to +0.0 and leaves every other value, NaN included, as is.

fn trunc(value: f64) -> f64 {
    value.trunc() + 0.0
}

fn round(value: f64) -> f64 {
    value.round() + 0.0
}

fn ceil(value: f64) -> f64 {
    value.ceil() + 0.0
}

fn floor(value: f64) -> f64 {
    value.floor() + 0.0
}

// ── Parsing / Display ─────────────────────────────────────────────────────

/// A rounding method name that is not one of the four known policies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rounding method `{name}`, expected one of trunc, round, ceil, floor")]
pub struct ParseRoundingMethodError {
    name: String,
}

impl ParseRoundingMethodError {
    /// The rejected name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RoundingMethod {
    type Err = ParseRoundingMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trunc" => Ok(Self::Trunc),
            "round" => Ok(Self::Round),
            "ceil" => Ok(Self::Ceil),
            "floor" => Ok(Self::Floor),
            _ => Err(ParseRoundingMethodError { name: s.to_owned() }),
        }
    }
}

impl fmt::Display for RoundingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for RoundingMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for RoundingMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NameVisitor;

        impl de::Visitor<'_> for NameVisitor {
            type Value = RoundingMethod;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a rounding method name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(RoundingMethod::from_name(Some(v)))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(RoundingMethod::Trunc)
            }

            // Any non-string value is an unknown name.
            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
                Ok(RoundingMethod::Trunc)
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
                Ok(RoundingMethod::Trunc)
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
                Ok(RoundingMethod::Trunc)
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
                Ok(RoundingMethod::Trunc)
            }
        }

        deserializer.deserialize_any(NameVisitor)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RoundingOptions
// ═══════════════════════════════════════════════════════════════════════════

/// Options accepted by the difference functions that round their result.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RoundingOptions {
    pub rounding_method: RoundingMethod,
}

impl RoundingOptions {
    /// Options selecting `rounding_method`.
    pub const fn new(rounding_method: RoundingMethod) -> Self {
        Self { rounding_method }
    }
}

impl From<RoundingMethod> for RoundingOptions {
    #[inline]
    fn from(rounding_method: RoundingMethod) -> Self {
        Self::new(rounding_method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_trunc() {
        assert_eq!(RoundingMethod::default(), RoundingMethod::Trunc);
        assert_eq!(
            RoundingOptions::default().rounding_method,
            RoundingMethod::Trunc
        );
    }

    #[test]
    fn test_policies() {
        let cases = [
            (RoundingMethod::Trunc, 1.5, 1.0, -1.5, -1.0),
            (RoundingMethod::Round, 1.5, 2.0, -1.5, -2.0),
            (RoundingMethod::Ceil, 1.5, 2.0, -1.5, -1.0),
            (RoundingMethod::Floor, 1.5, 1.0, -1.5, -2.0),
        ];
        for (method, pos, pos_expected, neg, neg_expected) in cases {
            assert_eq!(method.apply(pos), pos_expected, "{method} of {pos}");
            assert_eq!(method.apply(neg), neg_expected, "{method} of {neg}");
        }
    }

    #[test]
    fn test_round_is_nearest() {
        assert_eq!(RoundingMethod::Round.apply(2.49), 2.0);
        assert_eq!(RoundingMethod::Round.apply(2.51), 3.0);
        assert_eq!(RoundingMethod::Round.apply(-2.51), -3.0);
    }

    #[test]
    fn test_never_negative_zero() {
        for method in RoundingMethod::ALL {
            for value in [-0.4, -0.0, 0.3] {
                let rounded = method.apply(value);
                if rounded == 0.0 {
                    assert!(rounded.is_sign_positive(), "{method} of {value} gave -0");
                }
            }
        }
    }

    #[test]
    fn test_nan_propagates() {
        for method in RoundingMethod::ALL {
            assert!(method.apply(f64::NAN).is_nan());
        }
    }

    #[test]
    fn test_from_name_falls_back_to_trunc() {
        assert_eq!(RoundingMethod::from_name(None), RoundingMethod::Trunc);
        assert_eq!(RoundingMethod::from_name(Some("ceil")), RoundingMethod::Ceil);
        assert_eq!(RoundingMethod::from_name(Some("CEIL")), RoundingMethod::Trunc);
        assert_eq!(RoundingMethod::from_name(Some("")), RoundingMethod::Trunc);
    }

    #[test]
    fn test_get_rounding_method() {
        assert_eq!(get_rounding_method(Some("floor"))(-0.5), -1.0);
        assert_eq!(get_rounding_method(Some("round"))(0.5), 1.0);
        assert_eq!(get_rounding_method(Some("bogus"))(0.9), 0.0);
        assert_eq!(get_rounding_method(None)(7.9), 7.0);
    }

    #[test]
    fn test_parse_and_display_roundtrip() {
        for method in RoundingMethod::ALL {
            assert_eq!(method.to_string().parse::<RoundingMethod>(), Ok(method));
        }
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let err = "halfEven".parse::<RoundingMethod>().unwrap_err();
        assert_eq!(err.name(), "halfEven");
        assert!(err.to_string().contains("halfEven"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_options() {
        let options: RoundingOptions =
            serde_json::from_str(r#"{"roundingMethod":"ceil"}"#).unwrap();
        assert_eq!(options.rounding_method, RoundingMethod::Ceil);

        let options: RoundingOptions =
            serde_json::from_str(r#"{"roundingMethod":"bogus"}"#).unwrap();
        assert_eq!(options.rounding_method, RoundingMethod::Trunc);

        let options: RoundingOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, RoundingOptions::default());

        for json in [
            r#"{"roundingMethod":3}"#,
            r#"{"roundingMethod":-1}"#,
            r#"{"roundingMethod":0.5}"#,
            r#"{"roundingMethod":true}"#,
            r#"{"roundingMethod":null}"#,
        ] {
            let options: RoundingOptions = serde_json::from_str(json).unwrap();
            assert_eq!(options.rounding_method, RoundingMethod::Trunc, "{json}");
        }

        let json = serde_json::to_string(&RoundingOptions::new(RoundingMethod::Floor)).unwrap();
        assert_eq!(json, r#"{"roundingMethod":"floor"}"#);
    }
}
