//! Locale-aware cell coercion.
//!
//! Number formats in exported reports follow the account locale. The rules
//! here accept the Central-European convention ("1.234,56") while staying
//! compatible with plain integers. A cell that still fails to parse after
//! stripping resolves to zero; rows are only ever dropped for a column-count
//! mismatch, never for an unparseable number.

use adscope_model::{CellValue, ValueRole};

/// Placeholder used by report exports for absent values.
const PLACEHOLDER: &str = "--";

/// Coerce one raw cell according to its column role.
pub fn parse_cell(raw: &str, role: ValueRole) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == PLACEHOLDER {
        return CellValue::Missing;
    }
    match role {
        ValueRole::Currency => CellValue::Currency(parse_currency(trimmed)),
        ValueRole::Percentage => CellValue::Percent(parse_percentage(trimmed)),
        ValueRole::Count => CellValue::Count(parse_count(trimmed)),
        ValueRole::Text => CellValue::Text(trimmed.to_string()),
    }
}

/// Currency: strip everything but digits, comma, period, minus; periods are
/// thousands separators, the comma is the decimal separator.
fn parse_currency(raw: &str) -> f64 {
    let kept: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, ',' | '.' | '-'))
        .collect();
    let normalized = kept.replace('.', "").replace(',', ".");
    normalized.parse().unwrap_or(0.0)
}

/// Percentage: drop the percent sign, decimal comma becomes a period. The
/// value stays in percent units.
fn parse_percentage(raw: &str) -> f64 {
    let normalized = raw.replace('%', "").trim().replace(',', ".");
    normalized.parse().unwrap_or(0.0)
}

/// Count: decimal comma becomes a period, then strip everything but digits,
/// period, minus. Fractional counts are valid (attributed conversions).
fn parse_count(raw: &str) -> f64 {
    let kept: String = raw
        .replace(',', ".")
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '-'))
        .collect();
    kept.parse().unwrap_or(0.0)
}
