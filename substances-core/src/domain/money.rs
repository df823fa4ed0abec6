//! Money domain model

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// A non-negative amount of in-game currency
///
/// Money is never stored here. Balances always come from the external
/// provider and amounts are always sent back to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Create an amount, rejecting negative values
    pub fn new(amount: Decimal) -> Result<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(Error::validation(format!(
                "amount must not be negative, got {}",
                amount
            )));
        }
        Ok(Self(amount))
    }

    /// Build an amount from a value reported by a provider
    ///
    /// Providers are trusted, but a negative balance is reported as zero.
    pub fn from_provider(amount: Decimal) -> Self {
        Self(amount.max(Decimal::ZERO))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whole units, truncated toward zero, for back ends with integer APIs
    ///
    /// None when the amount does not fit in an `i64`.
    pub fn whole_units(&self) -> Option<i64> {
        self.0.trunc().to_i64()
    }

    /// Render with exactly two decimal places, no digit grouping
    pub fn to_fixed(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }

    /// Render with a currency symbol prefix, e.g. `$5.00`
    pub fn format_with(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.to_fixed())
    }
}

impl From<u32> for Money {
    fn from(units: u32) -> Self {
        Money(Decimal::from(units))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Money::new(amount).map_err(serde::de::Error::custom)
    }
}
