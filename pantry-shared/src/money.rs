use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of minor units in one major unit.
pub const MINOR_PER_MAJOR: i64 = 100;

/// An amount in integer minor units (cents, paisa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("Price has no digits: {0:?}")]
    NoDigits(String),

    #[error("Price out of range: {0:?}")]
    Overflow(String),
}

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    pub fn minor(&self) -> i64 {
        self.0
    }

    /// Parse a display price such as `"Rs. 250.00"`.
    ///
    /// Every non-digit character is dropped and the remaining digits are read
    /// as minor units, so `"Rs. 250.00"` is 25000 minor units. A price written
    /// without its two decimal places (`"Rs.250"`) therefore reads as 2.50.
    pub fn parse_price(text: &str) -> Result<Self, PriceError> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(PriceError::NoDigits(text.to_string()));
        }

        digits
            .parse::<i64>()
            .map(Money)
            .map_err(|_| PriceError::Overflow(text.to_string()))
    }

    pub fn times(&self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(quantity)).map(Money)
    }

    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = MINOR_PER_MAJOR as u64;
        write!(f, "{}{}.{:02}", sign, abs / per, abs % per)
    }
}
