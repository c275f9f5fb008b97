// Copyright (c) 2025-2026 the commafy contributors
// SPDX-License-Identifier: Apache-2.0

//! Thousands-separator insertion over plain decimal strings.
//!
//! Every formatter in this crate renders its value to a decimal string first
//! and then hands it to [`group_decimal`], so the grouping rule lives in one
//! place:
//!
//! - a `,` goes before every third digit counted from the right end of the
//!   integer part, never before the first digit;
//! - a single leading `-` is split off before grouping and put back after;
//! - everything from the first `.` onwards is copied verbatim.
//!
//! ```
//! use commafy::grouping::{group_decimal, group_digits};
//!
//! assert_eq!(group_digits("1234567"), "1,234,567");
//! assert_eq!(group_decimal("-1234.5678"), "-1,234.5678");
//! ```

/// Separator inserted between digit groups.
pub const SEPARATOR: char = ',';

/// Number of digits per group.
pub const GROUP_SIZE: usize = 3;

/// Insert a separator before every third digit of a plain digit string.
///
/// `digits` must be unsigned and contain no decimal point; use
/// [`group_decimal`] for anything else. The output is
/// `N + (N - 1) / 3` characters long for an input of `N` digits.
pub fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(grouped_len(len));

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % GROUP_SIZE == 0 {
            result.push(SEPARATOR);
        }
        result.push(c);
    }

    result
}

/// Group the integer part of a decimal string, keeping sign and fraction.
///
/// Accepts the shape produced by Rust's `Display` for integers and finite
/// floats: an optional `-`, digits, and an optional `.` followed by digits.
pub fn group_decimal(decimal: &str) -> String {
    let (negative, unsigned) = match decimal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, decimal),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut result = String::with_capacity(
        usize::from(negative) + grouped_len(integer.len()) + fraction.map_or(0, |f| f.len() + 1),
    );
    if negative {
        result.push('-');
    }
    result.push_str(&group_digits(integer));
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }

    result
}

/// Length of a grouped digit run of `len` digits.
const fn grouped_len(len: usize) -> usize {
    match len {
        0 => 0,
        n => n + (n - 1) / GROUP_SIZE,
    }
}
