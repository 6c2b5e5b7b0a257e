//! Asset descriptors with precision-aware rounding
//!
//! An asset names the thing being held (a coin, a security) and fixes the
//! number of decimal places every monetary and quantity calculation for
//! that holding is rounded to.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum supported rounding precision (decimal places)
pub const MAX_PRECISION: u32 = 8;

/// Errors that can occur when constructing an asset descriptor
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("Asset name must not be empty")]
    EmptyName,

    #[error("Precision {0} exceeds maximum of {MAX_PRECISION}")]
    PrecisionOutOfRange(u32),
}

/// An immutable asset descriptor
///
/// Rounding uses banker's rounding (round half to even) at the asset's
/// precision. The descriptor is the single source of truth for rounding;
/// the display currency never participates in calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    name: String,
    precision: u32,
}

impl Asset {
    /// Creates a new asset descriptor
    ///
    /// # Arguments
    ///
    /// * `name` - Asset name, e.g. "BTC"
    /// * `precision` - Decimal places for all rounding (0..=8)
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty or the precision exceeds
    /// [`MAX_PRECISION`]
    pub fn new(name: impl Into<String>, precision: u32) -> Result<Self, AssetError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AssetError::EmptyName);
        }
        if precision > MAX_PRECISION {
            return Err(AssetError::PrecisionOutOfRange(precision));
        }
        Ok(Self { name, precision })
    }

    /// Returns the asset name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rounding precision in decimal places
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounds a value to the asset's precision using banker's rounding
    pub fn round(&self, value: Decimal) -> Decimal {
        round_half_even(value, self.precision)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}dp)", self.name, self.precision)
    }
}

/// Rounds a value to `dp` decimal places using banker's rounding (round half to even)
pub fn round_half_even(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rounding_is_idempotent(
            mantissa in -1_000_000_000_000i64..1_000_000_000_000i64,
            scale in 0u32..12u32,
            dp in 0u32..=MAX_PRECISION
        ) {
            let value = Decimal::new(mantissa, scale);
            let once = round_half_even(value, dp);
            prop_assert_eq!(once, round_half_even(once, dp));
        }

        #[test]
        fn rounding_moves_value_at_most_half_a_step(
            mantissa in -1_000_000_000_000i64..1_000_000_000_000i64,
            scale in 0u32..12u32,
            dp in 0u32..=MAX_PRECISION
        ) {
            let value = Decimal::new(mantissa, scale);
            let rounded = round_half_even(value, dp);
            let step = Decimal::new(1, dp);
            prop_assert!((rounded - value).abs() * Decimal::TWO <= step);
        }
    }
}
