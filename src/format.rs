//! Display helpers for the stats dashboard (en-US conventions, USD).
//!
//! Rounding happens on decimal values (half away from zero), so `1_005.0` compacts to
//! `1.01K` rather than whatever the nearest binary fraction of `1.005` rounds to.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const COMPACT_UNITS: [(i64, &str); 4] = [
    (1_000_000_000_000, "T"),
    (1_000_000_000, "B"),
    (1_000_000, "M"),
    (1_000, "K"),
];

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Up to two fraction digits, trailing zeros dropped, no grouping.
fn trimmed(value: Decimal) -> String {
    round2(value).normalize().to_string()
}

fn group_thousands(int_part: &str) -> String {
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `digits` is a non-negative decimal like `1234.5`; groups the integer part.
fn grouped(digits: &str) -> String {
    match digits.split_once('.') {
        Some((int_part, frac)) => format!("{}.{frac}", group_thousands(int_part)),
        None => group_thousands(digits),
    }
}

/// `45.38K`, `1.8B`, `999`; magnitude only, no sign.
fn compact_abs(abs: Decimal) -> String {
    for (idx, (scale, suffix)) in COMPACT_UNITS.iter().enumerate() {
        let scale = Decimal::from(*scale);
        if abs >= scale {
            let scaled = round2(abs / scale);
            // 999_999 rounds up to the next unit rather than printing "1000K".
            if scaled >= Decimal::ONE_THOUSAND && idx > 0 {
                let (next_scale, next_suffix) = COMPACT_UNITS[idx - 1];
                return format!("{}{next_suffix}", trimmed(abs / Decimal::from(next_scale)));
            }
            return format!("{}{suffix}", trimmed(scaled));
        }
    }
    let small = trimmed(abs);
    if small == "1000" { "1K".to_string() } else { small }
}

/// Sign prefix and magnitude, or `None` for values a `Decimal` cannot hold (NaN, infinities).
fn split(value: f64) -> Option<(&'static str, Decimal)> {
    let abs = Decimal::from_f64(value.abs())?;
    let sign = if value < 0.0 && !round2(abs).is_zero() { "-" } else { "" };
    Some((sign, abs))
}

/// Compact USD notation: `$1.8B`, `$45.38K`, `$150`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    match split(value) {
        Some((sign, abs)) => format!("{sign}${}", compact_abs(abs)),
        None => format!("${value}"),
    }
}

/// Standard USD notation with grouping and two decimals: `$1,234.57`.
#[must_use]
pub fn format_currency_standard(value: f64) -> String {
    let Some((sign, abs)) = split(value) else {
        return format!("${value}");
    };
    let mut cents = round2(abs);
    cents.rescale(2);
    format!("{sign}${}", grouped(&cents.to_string()))
}

/// Grouped number with up to two decimals: `45,378`, `1,234.5`.
#[must_use]
pub fn format_number(value: f64) -> String {
    match split(value) {
        Some((sign, abs)) => format!("{sign}{}", grouped(&trimmed(abs))),
        None => value.to_string(),
    }
}

/// Compact number: `45.38K`, `1.8B`.
#[must_use]
pub fn format_number_compact(value: f64) -> String {
    match split(value) {
        Some((sign, abs)) => format!("{sign}{}", compact_abs(abs)),
        None => value.to_string(),
    }
}

/// Short en-US date: `Nov 14, 2023`.
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Cuts `text` to `max_chars` characters and appends `...` when it was longer.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
