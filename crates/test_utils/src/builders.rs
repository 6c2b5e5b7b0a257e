//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and ledger entries.

use chrono::NaiveDate;
use core_kernel::Asset;
use domain_profile::{CalculationMethod, LineType, Profile, ProfileBuilder};
use rust_decimal::Decimal;

use crate::fixtures::AssetFixtures;

/// One pending ledger entry for [`TestProfileBuilder`]
#[derive(Debug, Clone, Copy)]
struct PendingLine {
    date: NaiveDate,
    line_type: LineType,
    quantity: Decimal,
    unit_price: Decimal,
}

/// Builder for profiles pre-populated with a ledger
///
/// Display order is assigned in entry order, so same-date entries process
/// in the order they were given to the builder.
pub struct TestProfileBuilder {
    name: String,
    asset: Asset,
    method: CalculationMethod,
    pending: Vec<PendingLine>,
}

impl Default for TestProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProfileBuilder {
    /// Creates a builder for a weighted-average BTC profile
    pub fn new() -> Self {
        Self {
            name: "Test Profile".to_string(),
            asset: AssetFixtures::btc(),
            method: CalculationMethod::WeightedAverage,
            pending: Vec::new(),
        }
    }

    /// Sets the profile name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the asset descriptor
    pub fn with_asset(mut self, asset: Asset) -> Self {
        self.asset = asset;
        self
    }

    /// Sets the calculation method
    pub fn with_method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self
    }

    /// Queues a buy entry
    pub fn buy(self, date: NaiveDate, quantity: Decimal, unit_price: Decimal) -> Self {
        self.entry(date, LineType::Buy, quantity, unit_price)
    }

    /// Queues a sell entry
    pub fn sell(self, date: NaiveDate, quantity: Decimal, unit_price: Decimal) -> Self {
        self.entry(date, LineType::Sell, quantity, unit_price)
    }

    /// Queues a setup entry
    pub fn setup(self, date: NaiveDate, quantity: Decimal, unit_price: Decimal) -> Self {
        self.entry(date, LineType::Setup, quantity, unit_price)
    }

    fn entry(
        mut self,
        date: NaiveDate,
        line_type: LineType,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        self.pending.push(PendingLine {
            date,
            line_type,
            quantity,
            unit_price,
        });
        self
    }

    /// Builds the profile and applies all queued entries
    ///
    /// # Panics
    ///
    /// Panics if construction fails or any entry is rejected; test data is
    /// expected to be well-formed.
    pub fn build(self) -> Profile {
        let mut profile = ProfileBuilder::new()
            .name(self.name)
            .asset(self.asset)
            .calculation_method(self.method)
            .build()
            .expect("test profile should build");

        for (order, entry) in self.pending.into_iter().enumerate() {
            profile
                .add_line(
                    entry.date,
                    order as u32,
                    entry.line_type,
                    entry.quantity,
                    entry.unit_price,
                    "",
                )
                .expect("test ledger entry should be accepted");
        }

        profile
    }
}
