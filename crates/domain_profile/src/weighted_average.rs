//! Weighted-average cost-basis calculation
//!
//! Maintains a running `{total_cost, quantity, average}` where every held
//! unit shares one blended average cost. A sell removes a proportional
//! slice of the cost basis; a setup line resets the running state outright.

use rust_decimal::Decimal;

use core_kernel::Asset;

use crate::calculation::{CalculationError, CalculationStrategy};
use crate::line::{Line, LineTotals, LineType};

/// The weighted-average strategy
///
/// Stateless: all running state lives in the fold over the line sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedAverageStrategy;

impl CalculationStrategy for WeightedAverageStrategy {
    fn recalculate(
        &self,
        lines: &[Line],
        asset: &Asset,
    ) -> Result<Vec<LineTotals>, CalculationError> {
        let mut total_cost = Decimal::ZERO;
        let mut quantity = Decimal::ZERO;
        let mut average = Decimal::ZERO;
        let mut snapshots = Vec::with_capacity(lines.len());

        for line in lines {
            match line.line_type() {
                LineType::Buy => {
                    total_cost += asset.round(line.quantity() * line.unit_price());
                    quantity += line.quantity();
                    average = blended_average(total_cost, quantity, asset);
                }
                LineType::Sell => {
                    if line.quantity() > quantity {
                        return Err(CalculationError::Oversell {
                            line_id: line.id(),
                            requested: line.quantity(),
                            available: quantity,
                        });
                    }
                    // quantity > 0 is guaranteed here: a sell of a positive
                    // quantity against an empty holding is an oversell
                    let proportion = line.quantity() / quantity;
                    total_cost -= asset.round(total_cost * proportion);
                    quantity -= line.quantity();
                    average = blended_average(total_cost, quantity, asset);
                }
                LineType::Setup => {
                    quantity = line.quantity();
                    average = line.unit_price();
                    total_cost = asset.round(quantity * average);
                }
            }

            snapshots.push(LineTotals::new(average, total_cost, quantity));
        }

        Ok(snapshots)
    }
}

/// Average cost over the current holding, zero when nothing is held
fn blended_average(total_cost: Decimal, quantity: Decimal, asset: &Asset) -> Decimal {
    if quantity > Decimal::ZERO {
        asset.round(total_cost / quantity)
    } else {
        Decimal::ZERO
    }
}
