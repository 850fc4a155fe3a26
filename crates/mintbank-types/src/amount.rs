use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::error::{BankError, Result};

/// Fixed-point monetary amount stored as integer minor units
/// Two decimal places; signed, so debits are negative entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

const SCALE: i64 = 100;

impl Amount {
    /// Zero amount
    pub const ZERO: Amount = Amount(0);

    /// Create from minor units (e.g. kobo, cents)
    pub const fn from_minor(minor: i64) -> Self {
        Amount(minor)
    }

    /// Get the raw minor-unit value
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Create from whole currency units
    pub const fn from_major(major: i64) -> Self {
        Amount(major * SCALE)
    }

    /// Create from f64 (JSON boundary), rounding to the nearest minor unit
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(BankError::InvalidAmount(format!(
                "non-finite value: {}",
                value
            )));
        }
        let scaled = (value * SCALE as f64).round();
        if scaled.abs() >= i64::MAX as f64 {
            return Err(BankError::InvalidAmount(format!("overflow: {}", value)));
        }
        Ok(Amount(scaled as i64))
    }

    /// Convert to f64 (JSON boundary)
    pub fn to_f64(&self) -> f64 {
        (self.0 as f64) / (SCALE as f64)
    }

    /// Check if amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Check if amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Absolute value
    pub const fn abs(&self) -> Self {
        Amount(self.0.abs())
    }

    /// Checked addition
    pub fn checked_add(&self, other: Self) -> Result<Self> {
        self.0
            .checked_add(other.0)
            .map(Amount)
            .ok_or_else(|| BankError::InvalidAmount("overflow in addition".to_string()))
    }

    /// Checked subtraction
    pub fn checked_sub(&self, other: Self) -> Result<Self> {
        self.0
            .checked_sub(other.0)
            .map(Amount)
            .ok_or_else(|| BankError::InvalidAmount("overflow in subtraction".to_string()))
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

impl Neg for Amount {
    type Output = Self;
    fn neg(self) -> Self {
        Amount(-self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_f64())
    }
}

// Amounts cross the wire as plain JSON numbers
impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Amount::from_f64(value).map_err(de::Error::custom)
    }
}
