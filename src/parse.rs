// Copyright (c) 2025-2026 the commafy contributors
// SPDX-License-Identifier: Apache-2.0

//! Parsing textual input into a [`Number`] that the formatter can group.
//!
//! The [`Mode`] decides which representation a token is read as. In
//! [`Mode::Auto`] the narrowest fitting representation wins: `i64`, then an
//! arbitrary-precision integer for longer integer literals, then `f64`.

use crate::formatter::{format_big_int, format_float, format_int};
use crate::utils::error::CommafyError;
use clap::ValueEnum;
use num_bigint::BigInt;
use std::fmt;

/// How a textual value is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Mode {
    /// Pick the narrowest representation that holds the value.
    #[default]
    Auto,
    /// 64-bit signed integer.
    Int,
    /// 64-bit float.
    Float,
    /// Arbitrary-precision integer.
    Big,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::Int => "int",
            Mode::Float => "float",
            Mode::Big => "big",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = CommafyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Mode::Auto),
            "int" => Ok(Mode::Int),
            "float" => Ok(Mode::Float),
            "big" => Ok(Mode::Big),
            other => Err(CommafyError::invalid_mode(other)),
        }
    }
}

/// A parsed value in one of the three formattable representations.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
    Big(BigInt),
}

impl Number {
    /// Parse `text` according to `mode`. Surrounding whitespace is ignored.
    pub fn parse(text: &str, mode: Mode) -> Result<Self, CommafyError> {
        let text = text.trim();
        let invalid = || CommafyError::invalid_number(text, mode);

        if text.is_empty() {
            return Err(invalid());
        }

        match mode {
            Mode::Int => text.parse().map(Number::Int).map_err(|_| invalid()),
            Mode::Float => text.parse().map(Number::Float).map_err(|_| invalid()),
            Mode::Big => parse_big(text).map(Number::Big).ok_or_else(invalid),
            Mode::Auto => {
                if let Ok(n) = text.parse::<i64>() {
                    return Ok(Number::Int(n));
                }
                if let Some(n) = parse_big(text) {
                    return Ok(Number::Big(n));
                }
                text.parse().map(Number::Float).map_err(|_| invalid())
            }
        }
    }

    /// Render the value with thousands separators.
    pub fn format(&self) -> String {
        match self {
            Number::Int(n) => format_int(*n),
            Number::Float(n) => format_float(*n),
            Number::Big(n) => format_big_int(n),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Whether `text` is a plain integer literal: optional sign, then at least
/// one digit.
pub(crate) fn is_integer_literal(text: &str) -> bool {
    let digits = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_big(text: &str) -> Option<BigInt> {
    if !is_integer_literal(text) {
        return None;
    }
    text.parse().ok()
}
