//! Fixed-point amounts with two fractional digits
//!
//! Prices, order totals, ingredient stock and recipe quantities are all stored
//! as `INTEGER` hundredths and exchanged over the wire as decimal strings
//! (`"45.50"`). Arithmetic on persisted values happens inside SQL, so this
//! type mostly converts between the two representations.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Number of fractional digits carried by every amount
pub const SCALE: u32 = 2;

/// Largest menu price or recipe quantity (9999.99)
pub const MAX_UNIT_AMOUNT: Hundredths = Hundredths(999_999);

/// Largest ingredient level, alert threshold or order total (999999.99)
pub const MAX_LEDGER_AMOUNT: Hundredths = Hundredths(99_999_999);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("at most {SCALE} decimal places are allowed, got {0}")]
    TooPrecise(Decimal),
    #[error("amount out of range: {0}")]
    OutOfRange(Decimal),
}

/// An amount stored as an integer count of hundredths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "db", derive(sqlx::Type), sqlx(transparent))]
pub struct Hundredths(i64);

impl Hundredths {
    pub const ZERO: Hundredths = Hundredths(0);

    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// `0 <= self <= max`
    pub fn within(self, max: Hundredths) -> bool {
        (0..=max.0).contains(&self.0)
    }

    /// Convert a decimal, rejecting anything finer than a hundredth.
    ///
    /// Trailing zeros are ignored, so `1.500` is accepted as `1.50`.
    pub fn from_decimal(value: Decimal) -> Result<Self, AmountError> {
        let normalized = value.normalize();
        if normalized.scale() > SCALE {
            return Err(AmountError::TooPrecise(value));
        }
        (normalized * Decimal::ONE_HUNDRED)
            .to_i64()
            .map(Self)
            .ok_or(AmountError::OutOfRange(value))
    }

    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, SCALE)
    }
}

impl fmt::Display for Hundredths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl TryFrom<Decimal> for Hundredths {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Hundredths> for Decimal {
    fn from(value: Hundredths) -> Self {
        value.to_decimal()
    }
}

impl Serialize for Hundredths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.to_decimal(), serializer)
    }
}

impl<'de> Deserialize<'de> for Hundredths {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::from_decimal(value).map_err(serde::de::Error::custom)
    }
}
