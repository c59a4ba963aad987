use serde::{Deserialize, Serialize};

/// nightly price as it arrives in a hotel record. upstream exports are not
/// consistent here: most rows carry a JSON number but some carry the number
/// as a string, e.g. `"750"`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    /// resolves this raw value into the canonical numeric price.
    ///
    /// text values are read with leading-integer parsing, so `"799.99"` becomes
    /// 799 and `"120 USD"` becomes 120. text without a leading integer, such as
    /// `"call for rate"`, has no price and returns None, as do non-finite numbers.
    pub fn normalize(&self) -> Option<f64> {
        match self {
            RawPrice::Number(n) if n.is_finite() => Some(*n),
            RawPrice::Number(_) => None,
            RawPrice::Text(s) => parse_leading_integer(s),
        }
    }
}

impl From<f64> for RawPrice {
    fn from(value: f64) -> Self {
        RawPrice::Number(value)
    }
}

impl From<&str> for RawPrice {
    fn from(value: &str) -> Self {
        RawPrice::Text(value.to_string())
    }
}

impl std::fmt::Display for RawPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawPrice::Number(n) => write!(f, "{n}"),
            RawPrice::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

/// reads the integer at the start of a string: leading whitespace is skipped,
/// one optional sign is accepted, then digits are consumed until the first
/// non-digit character. anything after that is ignored.
pub fn parse_leading_integer(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digit_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digit_len == 0 {
        return None;
    }
    let magnitude = rest[..digit_len].parse::<f64>().ok()?;
    if negative {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}
