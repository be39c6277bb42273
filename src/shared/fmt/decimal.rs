//! Decimal parsing and fixed-point formatting for user-typed amounts.
//!
//! Amount buffers accept digits with at most one separator, either `.` or `,`,
//! but only `.` is a decimal point: a buffer holding `,` is kept as typed and
//! never parses. All math uses `rust_decimal::Decimal`.

use rust_decimal::prelude::*;

/// Returns `true` if `raw` matches `^[0-9]*[.,]?[0-9]*$`.
///
/// The empty string matches.
pub fn is_amount_lexeme(raw: &str) -> bool {
    let mut seen_separator = false;
    for ch in raw.chars() {
        match ch {
            '0'..='9' => {}
            '.' | ',' if !seen_separator => seen_separator = true,
            _ => return false,
        }
    }
    true
}

/// Parse an amount buffer into a non-negative `Decimal`.
///
/// Returns `None` when the buffer is not a lexeme, contains `,`, holds no
/// digits (`""`, `"."`), or does not fit a `Decimal`.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    if !is_amount_lexeme(raw) || raw.contains(',') {
        return None;
    }

    let (integer, fraction) = match raw.find('.') {
        Some(idx) => (&raw[..idx], &raw[idx + 1..]),
        None => (raw, ""),
    };

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let integer = if integer.is_empty() { "0" } else { integer };
    let normalized = if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    };

    Decimal::from_str(&normalized).ok()
}

/// Format `value` with exactly `dp` fractional digits.
///
/// Rounds half away from zero and pads with trailing zeros. Padding is done
/// on the string, since a `Decimal` cannot carry `dp` digits of scale once the
/// integer part is large.
pub fn to_fixed(value: &Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let mut out = rounded.to_string();
    if dp == 0 {
        return out;
    }

    let have = out.find('.').map(|idx| out.len() - idx - 1);
    match have {
        Some(digits) => out.extend(std::iter::repeat('0').take(dp as usize - digits)),
        None => {
            out.push('.');
            out.extend(std::iter::repeat('0').take(dp as usize));
        }
    }
    out
}
