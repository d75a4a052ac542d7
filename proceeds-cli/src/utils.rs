use std::sync::LazyLock;

use proceeds_core::calculations::common::round_half_up;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("static pattern is valid"));

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*(\.\d*)?").expect("static pattern is valid"));

/// Field text that is not a plain amount.
#[derive(Debug, Error)]
#[error("'{text}' is not an amount: {source}")]
pub struct ParseDecimalError {
    text: String,
    #[source]
    source: rust_decimal::Error,
}

/// Strict amount parser.
///
/// Allows a leading `$`, a trailing `%` and comma grouping around an
/// otherwise well-formed decimal. Blank text is zero.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let bare: String = s
        .trim()
        .trim_start_matches('$')
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let bare = bare.trim();
    if bare.is_empty() {
        return Ok(Decimal::ZERO);
    }
    bare.parse().map_err(|source| ParseDecimalError {
        text: s.to_string(),
        source,
    })
}

/// Coerces free-form field text into a non-negative amount.
///
/// Well-formed amounts go through [`parse_decimal`]. Anything else keeps only
/// digits and `.`, so `"-12"` and `"12 sq ft"` read as 12, and the longest
/// leading number is used. Unreadable text becomes 0, and so does an amount
/// too large for [`Decimal`] (about 7.9e28).
pub fn coerce_input(s: &str) -> Decimal {
    if let Ok(value) = parse_decimal(s) {
        if !value.is_sign_negative() {
            return value;
        }
    }

    let digits = NON_NUMERIC.replace_all(s, "");
    let number = LEADING_NUMBER
        .find(&digits)
        .map(|m| m.as_str().trim_end_matches('.'))
        .unwrap_or_default();

    if number.is_empty() || number == "." {
        tracing::warn!(input = %s, "no number in input, using 0");
        return Decimal::ZERO;
    }

    number.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %s, "unreadable number, using 0: {}", e);
        Decimal::ZERO
    })
}

/// Formats `value` with `dp` decimal places (half-up) and comma thousands
/// separators, e.g. `-1,234.50`.
pub fn format_grouped(
    value: Decimal,
    dp: u32,
) -> String {
    let rounded = round_half_up(value, dp);
    let text = format!("{:.*}", dp as usize, rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Formats a currency amount, e.g. `$196,350` or `-$43,500`.
pub fn format_currency(
    value: Decimal,
    dp: u32,
) -> String {
    let grouped = format_grouped(value, dp);
    match grouped.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${grouped}"),
    }
}

/// Formats a ratio with one decimal, e.g. `37.4%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_grouped(value, 1))
}

/// Formats an entered rate as typed, without trailing zeros, e.g. `2.5%`.
pub fn format_rate(value: Decimal) -> String {
    format!("{}%", value.normalize())
}
