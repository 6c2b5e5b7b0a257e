//! FIFO cost-basis calculation
//!
//! Tracks every purchase as a discrete cost lot in an ordered queue,
//! oldest at the front. Sells consume lots front-to-back, splitting the
//! last touched lot when a partial amount remains. Totals reflect only the
//! unconsumed lots, which is what distinguishes FIFO's cost basis from the
//! uniformly blended weighted-average result.

use std::collections::VecDeque;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Asset;

use crate::calculation::{CalculationError, CalculationStrategy};
use crate::line::{Line, LineTotals, LineType};

/// A discrete purchase record tracked for FIFO accounting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLot {
    /// Remaining quantity in this lot
    pub quantity: Decimal,
    /// Acquisition price per unit
    pub unit_price: Decimal,
}

impl CostLot {
    /// Creates a new lot
    pub fn new(quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            quantity,
            unit_price,
        }
    }

    /// Cost of the remaining quantity, rounded to asset precision
    pub fn cost(&self, asset: &Asset) -> Decimal {
        asset.round(self.quantity * self.unit_price)
    }
}

/// The FIFO lot-tracking strategy
///
/// Stateless: the lot queue is rebuilt on every recalculation from the
/// full ordered history.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoStrategy;

impl CalculationStrategy for FifoStrategy {
    fn recalculate(
        &self,
        lines: &[Line],
        asset: &Asset,
    ) -> Result<Vec<LineTotals>, CalculationError> {
        let mut lots: VecDeque<CostLot> = VecDeque::new();
        let mut snapshots = Vec::with_capacity(lines.len());

        for line in lines {
            match line.line_type() {
                LineType::Buy => {
                    lots.push_back(CostLot::new(line.quantity(), line.unit_price()));
                }
                LineType::Sell => {
                    consume(&mut lots, line)?;
                }
                LineType::Setup => {
                    lots.clear();
                    lots.push_back(CostLot::new(line.quantity(), line.unit_price()));
                }
            }

            snapshots.push(summarize(&lots, asset));
        }

        Ok(snapshots)
    }
}

/// Consumes sold quantity from the front of the queue
///
/// A lot larger than the remaining sale is split: the unsold part keeps its
/// price and returns to the front, preserving lot order.
fn consume(lots: &mut VecDeque<CostLot>, line: &Line) -> Result<(), CalculationError> {
    let available: Decimal = lots.iter().map(|lot| lot.quantity).sum();
    if line.quantity() > available {
        return Err(CalculationError::Oversell {
            line_id: line.id(),
            requested: line.quantity(),
            available,
        });
    }

    let mut remaining = line.quantity();
    while remaining > Decimal::ZERO {
        // The oversell check above guarantees a front lot exists
        let Some(lot) = lots.pop_front() else {
            break;
        };

        if lot.quantity <= remaining {
            remaining -= lot.quantity;
        } else {
            lots.push_front(CostLot::new(lot.quantity - remaining, lot.unit_price));
            remaining = Decimal::ZERO;
        }
    }

    Ok(())
}

/// Totals over the remaining lots only
fn summarize(lots: &VecDeque<CostLot>, asset: &Asset) -> LineTotals {
    let total_cost: Decimal = lots.iter().map(|lot| lot.cost(asset)).sum();
    let quantity: Decimal = lots.iter().map(|lot| lot.quantity).sum();
    let average_cost = if quantity > Decimal::ZERO {
        asset.round(total_cost / quantity)
    } else {
        Decimal::ZERO
    };

    LineTotals::new(average_cost, total_cost, quantity)
}
