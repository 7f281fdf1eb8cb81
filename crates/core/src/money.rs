//! Currency amounts.

use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Non-negative currency amount in the smallest currency unit (e.g. cents).
///
/// Storefront prices are single-currency; the currency itself is a display
/// concern and is not tracked here.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub const fn minor(self) -> u64 {
        self.0
    }

    /// Convert a decimal major-unit amount (`19.99`) into minor units.
    pub fn from_major(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("amount must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("amount cannot be negative"));
        }
        let minor = (amount * 100.0).round();
        if minor >= u64::MAX as f64 {
            return Err(DomainError::validation(format!("amount {amount} is too large")));
        }
        Ok(Self(minor as u64))
    }

    /// Parse user input, treating blank or malformed text as "no amount".
    pub fn parse_lenient(input: &str) -> Option<Self> {
        input.parse().ok()
    }

    /// Multiply by a quantity (saturating).
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// `percent`% of this amount, rounded half up to the nearest minor unit.
    pub fn percent(self, percent: u32) -> Self {
        let scaled = u128::from(self.0) * u128::from(percent) + 50;
        Self(u64::try_from(scaled / 100).unwrap_or(u64::MAX))
    }

    pub fn saturating_sub(self, other: Money) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    pub fn checked_add(self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("amount is empty"));
        }
        let amount: f64 = trimmed
            .parse()
            .map_err(|_| DomainError::validation(format!("not a number: {trimmed}")))?;
        Self::from_major(amount)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
