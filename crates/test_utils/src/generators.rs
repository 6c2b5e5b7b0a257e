//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants, in particular ledgers whose sells never exceed the
//! running holding.

use domain_profile::{CalculationMethod, LineType};
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// A generated ledger entry, ready to feed into `Profile::add_line`
#[derive(Debug, Clone, Copy)]
pub struct LedgerEntry {
    pub line_type: LineType,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

/// Strategy for generating a calculation method
pub fn method_strategy() -> impl Strategy<Value = CalculationMethod> {
    prop_oneof![
        Just(CalculationMethod::WeightedAverage),
        Just(CalculationMethod::Fifo),
    ]
}

/// Strategy for positive trade quantities (scale 4, up to 10,000)
pub fn quantity_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|m| Decimal::new(m, 4))
}

/// Strategy for positive unit prices (scale 2, up to 10,000,000)
pub fn price_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|m| Decimal::new(m, 2))
}

/// Strategy for buy-only ledgers of 1 to `max_len` entries
pub fn buys_strategy(max_len: usize) -> impl Strategy<Value = Vec<LedgerEntry>> {
    prop::collection::vec((quantity_strategy(), price_strategy()), 1..=max_len).prop_map(
        |entries| {
            entries
                .into_iter()
                .map(|(quantity, unit_price)| LedgerEntry {
                    line_type: LineType::Buy,
                    quantity,
                    unit_price,
                })
                .collect()
        },
    )
}

/// Strategy for mixed ledgers whose sells never exceed the running holding
///
/// Generated as raw `(kind, quantity, price, fraction)` tuples folded into
/// entries: sells take `fraction/10000` of the holding accumulated so far
/// (truncated to 8 decimal places), and are dropped when nothing is held.
pub fn ledger_strategy(max_len: usize) -> impl Strategy<Value = Vec<LedgerEntry>> {
    prop::collection::vec(
        (
            0u8..=2u8,
            quantity_strategy(),
            price_strategy(),
            1u16..=10_000u16,
        ),
        1..=max_len,
    )
    .prop_map(|raw| {
        let mut running = Decimal::ZERO;
        let mut entries = Vec::with_capacity(raw.len());

        for (kind, quantity, unit_price, fraction) in raw {
            match kind {
                0 => {
                    running += quantity;
                    entries.push(LedgerEntry {
                        line_type: LineType::Buy,
                        quantity,
                        unit_price,
                    });
                }
                1 => {
                    let sell_quantity = (running * Decimal::from(fraction)
                        / Decimal::from(10_000u16))
                    .round_dp_with_strategy(8, RoundingStrategy::ToZero);
                    if sell_quantity > Decimal::ZERO {
                        running -= sell_quantity;
                        entries.push(LedgerEntry {
                            line_type: LineType::Sell,
                            quantity: sell_quantity,
                            unit_price,
                        });
                    }
                }
                _ => {
                    running = quantity;
                    entries.push(LedgerEntry {
                        line_type: LineType::Setup,
                        quantity,
                        unit_price,
                    });
                }
            }
        }

        // Never return an empty ledger; shrinking towards sells-only input
        // can drop every entry
        if entries.is_empty() {
            entries.push(LedgerEntry {
                line_type: LineType::Buy,
                quantity: Decimal::ONE,
                unit_price: Decimal::ONE,
            });
        }

        entries
    })
}
