//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use domain_profile::{Line, LineTotals};
use rust_decimal::Decimal;

/// Asserts that a totals snapshot matches the expected triple
///
/// # Panics
///
/// Panics with a field-by-field message if any component differs
pub fn assert_totals(
    actual: &LineTotals,
    average_cost: Decimal,
    total_cost: Decimal,
    quantity: Decimal,
) {
    assert_eq!(
        actual.average_cost, average_cost,
        "average cost mismatch: got {}, expected {}",
        actual.average_cost, average_cost
    );
    assert_eq!(
        actual.total_cost, total_cost,
        "total cost mismatch: got {}, expected {}",
        actual.total_cost, total_cost
    );
    assert_eq!(
        actual.quantity, quantity,
        "quantity mismatch: got {}, expected {}",
        actual.quantity, quantity
    );
}

/// Asserts that a line's computed totals match the expected triple
pub fn assert_line_totals(
    line: &Line,
    average_cost: Decimal,
    total_cost: Decimal,
    quantity: Decimal,
) {
    assert_totals(line.totals(), average_cost, total_cost, quantity);
}

/// Asserts that a totals snapshot is the zero sentinel
pub fn assert_totals_zero(actual: &LineTotals) {
    assert!(
        actual.is_zero(),
        "expected zero totals, got avg={} total={} qty={}",
        actual.average_cost,
        actual.total_cost,
        actual.quantity
    );
}
