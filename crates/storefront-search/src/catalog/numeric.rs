//! Lenient decoding of numeric catalogue fields.
//!
//! Prices and counters arrive as JSON numbers from the current service and
//! as display strings (`"25,990"`, `"฿1,200"`, `"15%"`) from the legacy one.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Parse a display amount such as `"฿25,990"` or `"15%"` into a whole number.
///
/// Fractional values are rounded half away from zero. Returns `None` for
/// blank or non-numeric input.
pub fn parse_amount(raw: &str) -> Option<i64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '\u{0e3f}' | '%' | ' ' | '\u{a0}'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<i64>().ok().or_else(|| {
        cleaned
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
            .map(|f| f.round() as i64)
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

fn decode<'de, D: Deserializer<'de>>(deserializer: D, blank_is_zero: bool) -> Result<i64, D::Error> {
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Int(n) => Ok(n),
        RawNumber::Float(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Ok(f.round() as i64),
        RawNumber::Float(f) => Err(D::Error::custom(format!("number out of range: {f}"))),
        RawNumber::Text(s) if blank_is_zero && s.trim().is_empty() => Ok(0),
        RawNumber::Text(s) => {
            parse_amount(&s).ok_or_else(|| D::Error::custom(format!("not a number: {s:?}")))
        }
    }
}

/// Required whole number; a blank string is an error.
pub(crate) fn whole<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    decode(deserializer, false)
}

/// Optional counter; a blank string counts as zero.
pub(crate) fn whole_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    decode(deserializer, true)
}

/// Non-negative counter such as a view count.
pub(crate) fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let n = decode(deserializer, true)?;
    u64::try_from(n).map_err(|_| D::Error::custom(format!("negative count: {n}")))
}
