use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CarError, CarResult};

/// A model year, given either as a number or as text.
///
/// Text is interpreted by its leading integer, so `"1990abc"` is 1990 and
/// `" -12"` is -12.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Numeric(i64),
    Textual(String),
}

impl Year {
    /// Returns the year as an integer.
    pub fn resolve(&self) -> CarResult<i64> {
        match self {
            Self::Numeric(year) => Ok(*year),
            Self::Textual(text) => parse_leading_int(text),
        }
    }
}

/// Parses the integer prefix of `text`: optional leading whitespace, an
/// optional sign, then decimal digits up to the first non-digit.
fn parse_leading_int(text: &str) -> CarResult<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(CarError::InvalidYearFormat(text.to_string()));
    }

    let out_of_range = || CarError::YearOutOfRange(text.to_string());
    rest.as_bytes()[..digits_len]
        .iter()
        .try_fold(0i64, |acc, &digit| {
            let digit = i64::from(digit - b'0');
            let shifted = acc.checked_mul(10)?;
            if negative {
                shifted.checked_sub(digit)
            } else {
                shifted.checked_add(digit)
            }
        })
        .ok_or_else(out_of_range)
}

impl From<i64> for Year {
    fn from(year: i64) -> Self {
        Self::Numeric(year)
    }
}

impl From<i32> for Year {
    fn from(year: i32) -> Self {
        Self::Numeric(i64::from(year))
    }
}

impl From<u16> for Year {
    fn from(year: u16) -> Self {
        Self::Numeric(i64::from(year))
    }
}

impl From<&str> for Year {
    fn from(year: &str) -> Self {
        Self::Textual(year.to_string())
    }
}

impl From<String> for Year {
    fn from(year: String) -> Self {
        Self::Textual(year)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(year) => write!(f, "{year}"),
            Self::Textual(text) => f.write_str(text),
        }
    }
}
