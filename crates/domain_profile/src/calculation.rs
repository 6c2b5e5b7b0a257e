//! Calculation methods and the shared recalculation contract
//!
//! A profile carries exactly one active calculation method. Both methods
//! implement the same contract: given the entire chronologically ordered
//! line sequence, produce one totals snapshot per line. Strategies are
//! side-effect-free; the aggregate applies the returned snapshots.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use core_kernel::{Asset, CoreError, LineId};

use crate::fifo::FifoStrategy;
use crate::line::{Line, LineTotals};
use crate::weighted_average::WeightedAverageStrategy;

/// Errors surfaced while recomputing a line sequence
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// A sell consumes more than the holding available before it.
    ///
    /// The engine rejects this outright rather than driving totals
    /// negative (weighted average) or silently truncating the sell (FIFO).
    #[error("Line {line_id} sells {requested} but only {available} is held")]
    Oversell {
        line_id: LineId,
        requested: Decimal,
        available: Decimal,
    },
}

/// The accounting method active on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationMethod {
    /// All holdings share one blended average cost
    WeightedAverage,
    /// Sells consume the oldest remaining purchase lots first
    Fifo,
}

impl CalculationMethod {
    /// Recalculates totals for the full ordered line sequence under this
    /// method
    ///
    /// # Arguments
    ///
    /// * `lines` - The complete history, ascending by `(date, display_order)`
    /// * `asset` - Descriptor supplying the rounding precision
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::Oversell`] if any sell exceeds the
    /// holding accumulated before it.
    pub fn recalculate(
        &self,
        lines: &[Line],
        asset: &Asset,
    ) -> Result<Vec<LineTotals>, CalculationError> {
        match self {
            CalculationMethod::WeightedAverage => WeightedAverageStrategy.recalculate(lines, asset),
            CalculationMethod::Fifo => FifoStrategy.recalculate(lines, asset),
        }
    }

    /// Returns the method name
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationMethod::WeightedAverage => "WeightedAverage",
            CalculationMethod::Fifo => "Fifo",
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CalculationMethod {
    type Err = CoreError;

    /// Parses a stored method name
    ///
    /// An unrecognized name is an unrecoverable configuration defect: no
    /// profile can operate without a known calculation method.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WeightedAverage" => Ok(CalculationMethod::WeightedAverage),
            "Fifo" => Ok(CalculationMethod::Fifo),
            other => Err(CoreError::configuration(format!(
                "unknown calculation method: {other}"
            ))),
        }
    }
}

/// The recalculation contract both strategies implement
///
/// Implementations must be pure: they read the ordered history and return
/// snapshots without touching the aggregate, so each strategy is
/// independently unit-testable.
pub trait CalculationStrategy {
    /// Maps the ordered line sequence to one totals snapshot per line
    fn recalculate(
        &self,
        lines: &[Line],
        asset: &Asset,
    ) -> Result<Vec<LineTotals>, CalculationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse_roundtrip() {
        for method in [CalculationMethod::WeightedAverage, CalculationMethod::Fifo] {
            let parsed: CalculationMethod = method.as_str().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn test_unknown_method_is_configuration_error() {
        let result = "Lifo".parse::<CalculationMethod>();
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }
}
