use crate::error::SemaforoError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a count field from form input.
///
/// Absent markers and anything that does not parse as a number are
/// treated as "not measured" — the preview runs on every keystroke and
/// must never fail on a half-typed value. Handles:
/// - "150" -> Some(150)
/// - "0,5" -> Some(0.5) (decimal comma)
/// - "", "-", "N/A", "n.a." -> None
/// - "12x" -> None
pub fn parse_count(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty()
        || s == "-"
        || s.eq_ignore_ascii_case("n/a")
        || s.eq_ignore_ascii_case("n.a.")
    {
        return None;
    }
    let normalized = s.replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Parse an analysis date in YYYY-MM-DD form.
///
/// A record's date is mandatory, so unlike counts a malformed date is an
/// error rather than an absent value.
pub fn parse_date(s: &str) -> Result<NaiveDate, SemaforoError> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| SemaforoError::InvalidDate(trimmed.to_string()))
}
