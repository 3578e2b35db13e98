//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored as [`Decimal`] so cart totals add up exactly
//! (`93.89 + 93.89 == 187.78`), and are written to JSON as plain numbers so
//! persisted carts look like `{"price": 93.89}`.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A non-negative price in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// Returns `None` for negative amounts.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            None
        } else {
            Some(Self(amount))
        }
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Create a price from a whole number of dollars.
    #[must_use]
    pub fn from_dollars(dollars: u32) -> Self {
        Self(Decimal::from(dollars))
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The amount rounded to whole cents, halves away from zero.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.rounded())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(amount).ok_or_else(|| de::Error::custom(format!("negative price: {amount}")))
    }
}

/// Deserialize a price, mapping anything unusable to [`Price::ZERO`].
///
/// Persisted entries with a missing, `null`, negative or non-numeric price
/// still load; they just count as free. Use with
/// `#[serde(default, deserialize_with = "gallery_core::types::price::deserialize_lenient")]`.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce any value at all.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Price, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value::<Price>(value).unwrap_or(Price::ZERO))
}
