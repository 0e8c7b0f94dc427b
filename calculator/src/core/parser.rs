//! Operand parsing
//!
//! Turns the raw text of an operand input into its canonical numeric value.
//! Accepted shapes, in order:
//! - empty text, meaning the default `0`
//! - a decimal number, optionally signed, optionally with an exponent
//!   (surrounding ASCII whitespace is ignored)
//! - a simple fraction `<digits>/<digits>` with a non-zero denominator
//!
//! Anything else is [`ParsedValue::Invalid`]. Parsing never fails loudly.

use std::sync::LazyLock;
use regex::Regex;

static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)/([0-9]+)$").unwrap());

/// Numeric interpretation of an operand input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedValue {
    /// A finite value
    Number(f64),
    Invalid,
}

impl ParsedValue {
    pub fn is_invalid(&self) -> bool {
        matches!(self, ParsedValue::Invalid)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParsedValue::Number(n) => Some(*n),
            ParsedValue::Invalid => None,
        }
    }
}

/// Parse operand text into a [`ParsedValue`]
pub fn parse_operand(text: &str) -> ParsedValue {
    if text.is_empty() {
        return ParsedValue::Number(0.0);
    }

    if let Some(value) = parse_decimal(text) {
        return finite(value);
    }

    match parse_fraction(text) {
        Some(value) => finite(value),
        None => ParsedValue::Invalid,
    }
}

fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace());
    // f64::from_str also takes "inf" and "NaN"; those fall out in `finite`
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

fn parse_fraction(text: &str) -> Option<f64> {
    let captures = FRACTION.captures(text)?;
    let numerator: f64 = captures[1].parse().ok()?;
    let denominator: f64 = captures[2].parse().ok()?;

    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

fn finite(value: f64) -> ParsedValue {
    if value.is_finite() {
        ParsedValue::Number(value)
    } else {
        ParsedValue::Invalid
    }
}
