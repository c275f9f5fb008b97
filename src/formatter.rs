// Copyright (c) 2025-2026 the commafy contributors
// SPDX-License-Identifier: Apache-2.0

//! Grouped number formatting for integers, floats and big integers.
//!
//! The three entry points ([`format_int`], [`format_float`],
//! [`format_big_int`]) only differ in how they obtain a plain decimal
//! string; the grouping itself is [`group_decimal`].
//!
//! The [`Commafy`] trait extends the same behavior to every primitive
//! numeric type plus [`BigInt`] and [`BigUint`].

use crate::grouping::{group_decimal, group_digits};
use num_bigint::{BigInt, BigUint, Sign};
use std::fmt::Display;

/// Format a 64-bit signed integer with thousands separators.
///
/// ```
/// assert_eq!(commafy::format_int(-10_000_000), "-10,000,000");
/// ```
pub fn format_int(value: i64) -> String {
    signed(value < 0, value.unsigned_abs())
}

/// Format a 64-bit float with thousands separators.
///
/// The digits are Rust's shortest round-trip rendering in positional
/// notation, so extreme magnitudes expand fully instead of switching to an
/// exponent. The fractional part is never grouped. Negative zero prints as
/// `0`; `inf`, `-inf` and `NaN` pass through ungrouped.
///
/// ```
/// assert_eq!(commafy::format_float(1234.5), "1,234.5");
/// assert_eq!(commafy::format_float(-100.11), "-100.11");
/// ```
pub fn format_float(value: f64) -> String {
    float(value, value.is_finite(), value == 0.0)
}

/// Format an arbitrary-precision integer with thousands separators.
///
/// ```
/// use num_bigint::BigInt;
///
/// let n: BigInt = "-1234567890123456789012".parse().unwrap();
/// assert_eq!(commafy::format_big_int(&n), "-1,234,567,890,123,456,789,012");
/// ```
pub fn format_big_int(value: &BigInt) -> String {
    signed(value.sign() == Sign::Minus, value.magnitude())
}

/// Thousands-separated rendering of a numeric value.
pub trait Commafy {
    /// Render `self` in base 10 with a `,` between every group of three
    /// integer digits.
    fn commafy(&self) -> String;
}

fn signed(negative: bool, magnitude: impl Display) -> String {
    let grouped = group_digits(&magnitude.to_string());
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn float(value: impl Display, finite: bool, zero: bool) -> String {
    if !finite {
        return value.to_string();
    }
    if zero {
        return "0".to_string();
    }
    group_decimal(&value.to_string())
}

macro_rules! impl_commafy_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl Commafy for $t {
                fn commafy(&self) -> String {
                    signed(*self < 0, self.unsigned_abs())
                }
            }
        )*
    };
}

macro_rules! impl_commafy_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl Commafy for $t {
                fn commafy(&self) -> String {
                    group_digits(&self.to_string())
                }
            }
        )*
    };
}

impl_commafy_signed!(i8, i16, i32, i128, isize);
impl_commafy_unsigned!(u8, u16, u32, u64, u128, usize);

impl Commafy for i64 {
    fn commafy(&self) -> String {
        format_int(*self)
    }
}

impl Commafy for f64 {
    fn commafy(&self) -> String {
        format_float(*self)
    }
}

// Rendered through f32's own Display so 0.1f32 stays "0.1" rather than
// picking up the widened f64 digits.
impl Commafy for f32 {
    fn commafy(&self) -> String {
        float(self, self.is_finite(), *self == 0.0)
    }
}

impl Commafy for BigInt {
    fn commafy(&self) -> String {
        format_big_int(self)
    }
}

impl Commafy for BigUint {
    fn commafy(&self) -> String {
        group_digits(&self.to_string())
    }
}

impl<T: Commafy + ?Sized> Commafy for &T {
    fn commafy(&self) -> String {
        (**self).commafy()
    }
}
