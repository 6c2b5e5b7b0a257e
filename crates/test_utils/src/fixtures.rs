//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities across the cost-basis
//! system. Fixtures are consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::Asset;
use domain_profile::{CalculationMethod, Profile, ProfileBuilder};

/// Fixture for asset descriptors
pub struct AssetFixtures;

impl AssetFixtures {
    /// A crypto asset at full 8-decimal precision
    pub fn btc() -> Asset {
        Asset::new("BTC", 8).expect("valid asset")
    }

    /// A security rounded like a fiat amount
    pub fn share() -> Asset {
        Asset::new("ACME", 2).expect("valid asset")
    }

    /// A whole-unit asset with no decimal places
    pub fn collectible() -> Asset {
        Asset::new("CARD", 0).expect("valid asset")
    }
}

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// A fixed trade date used as the default ledger start
    pub fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
    }

    /// A date a given number of days after [`DateFixtures::start`]
    pub fn day(offset: u64) -> NaiveDate {
        Self::start() + chrono::Duration::days(offset as i64)
    }
}

/// Fixture for profiles
pub struct ProfileFixtures;

impl ProfileFixtures {
    /// An empty weighted-average BTC profile
    pub fn weighted_average() -> Profile {
        ProfileBuilder::new()
            .name("BTC Stack")
            .asset(AssetFixtures::btc())
            .build()
            .expect("valid profile")
    }

    /// An empty FIFO BTC profile
    pub fn fifo() -> Profile {
        ProfileBuilder::new()
            .name("BTC Lots")
            .asset(AssetFixtures::btc())
            .calculation_method(CalculationMethod::Fifo)
            .build()
            .expect("valid profile")
    }
}
