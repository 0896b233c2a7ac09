use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Exact monetary value held as integer cents.
///
/// Receipts carry prices as fixed-point decimal strings (`"6.49"`). Parsing
/// converts them to cents so every rule evaluation stays in integer
/// arithmetic; no floating point is involved anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(u64);

impl Price {
    /// Zero cents. The substitute value for unparseable prices.
    pub const ZERO: Self = Self(0);

    /// Create a price from a cent count.
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Parse a decimal price string.
    ///
    /// Accepts `DIGITS`, `DIGITS.D`, or `DIGITS.DD`. Anything else — an
    /// empty string, a sign, an exponent, more than two fraction digits,
    /// or a value that overflows — is malformed.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let malformed = || TypeError::MalformedPrice(s.to_string());
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let dollars: u64 = whole.parse().map_err(|_| malformed())?;
        let cents = match fraction {
            None => 0,
            Some(f) if (1..=2).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit()) => {
                let minor: u64 = f.parse().map_err(|_| malformed())?;
                if f.len() == 1 {
                    minor * 10
                } else {
                    minor
                }
            }
            Some(_) => return Err(malformed()),
        };
        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Self)
            .ok_or_else(malformed)
    }

    /// The value in cents.
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Whether the value has no fractional part. Zero qualifies.
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Whether the value is an exact multiple of 25 cents. Zero qualifies.
    pub const fn is_quarter_multiple(&self) -> bool {
        self.0 % 25 == 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl std::str::FromStr for Price {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
