//! Permissive numeric field decoder.
//!
//! Navigation files are produced by a wide range of tools and
//! numeric fields come in many flavors: FORTRAN `D` exponents,
//! compact exponents without exponent letter (`1234-5`), or fields
//! that run into their neighbor. One malformed field must not
//! discard the whole ephemeris, so decoding always yields a value:
//! when nothing can be recovered, the field decodes as `0.0`
//! ([NumericField::Defaulted]).
use regex::Regex;

lazy_static! {
    /// Compact exponent notation: mantissa immediately followed by
    /// a signed exponent, without exponent letter.
    static ref COMPACT_EXPONENT: Regex =
        Regex::new(r"^(?P<mantissa>[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+))(?P<exponent>[+-][0-9]+)$")
            .unwrap();
}

/// Result of decoding one numeric field
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NumericField {
    /// Empty (or whitespace only) field, decodes as 0.0
    Blank,
    /// Field decoded as is (after exponent normalization)
    Value(f64),
    /// Field decoded after truncation of a malformed exponent
    Salvaged(f64),
    /// Field could not be interpreted, decodes as 0.0
    Defaulted,
}

impl NumericField {
    /// Decodes given field content. Never fails.
    pub fn decode(content: &str) -> Self {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Self::Blank;
        }

        let mut normalized = trimmed.replace('D', "E").replace('d', "e");

        if COMPACT_EXPONENT.is_match(&normalized) {
            normalized = COMPACT_EXPONENT
                .replace(&normalized, "${mantissa}E${exponent}")
                .to_string();
        }

        if let Ok(value) = normalized.parse::<f64>() {
            return Self::Value(value);
        }

        match salvage(&normalized) {
            Some(value) => Self::Salvaged(value),
            None => Self::Defaulted,
        }
    }

    /// Returns the decoded value, 0.0 for [Self::Blank] and [Self::Defaulted]
    pub fn value(&self) -> f64 {
        match self {
            Self::Value(value) | Self::Salvaged(value) => *value,
            Self::Blank | Self::Defaulted => 0.0,
        }
    }

    /// Returns true if this field had to be substituted by 0.0
    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted)
    }
}

/// Tries to recover a value whose exponent is followed by garbage:
/// only the first sign+digits run of the exponent is retained.
fn salvage(content: &str) -> Option<f64> {
    let (base, exponent) = content.split_once(['E', 'e'])?;

    let mut chars = exponent.chars();
    let sign = chars.next().filter(|c| *c == '+' || *c == '-')?;

    let digits: String = chars.take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    format!("{}E{}{}", base, sign, digits).parse::<f64>().ok()
}

/// Decodes a RINEX numeric field, substituting 0.0 to anything
/// that cannot be interpreted. See [NumericField].
pub fn parse_rinex_float(content: &str) -> f64 {
    NumericField::decode(content).value()
}
