//! Profile Aggregate Tests
//!
//! Covers profile creation via `ProfileBuilder`, line mutation with
//! rollback on rejected histories, chronological re-sorting, metadata
//! operations, and the read surface.

use domain_profile::{CalculationMethod, LineType, Profile, ProfileBuilder, ProfileError};
use core_kernel::{Currency, LineId};
use rust_decimal_macros::dec;
use test_utils::{assert_line_totals, AssetFixtures, DateFixtures, TestProfileBuilder};

fn create_test_profile() -> Profile {
    ProfileBuilder::new()
        .name("BTC Stack")
        .asset(AssetFixtures::btc())
        .build()
        .expect("test profile creation should succeed")
}

mod profile_creation {
    use super::*;

    #[test]
    fn test_builder_sets_all_fields() {
        let profile = ProfileBuilder::new()
            .name("Mining Income")
            .asset(AssetFixtures::btc())
            .currency(Currency::EUR)
            .icon("pickaxe")
            .visible(false)
            .calculation_method(CalculationMethod::Fifo)
            .build()
            .unwrap();

        assert_eq!(profile.name(), "Mining Income");
        assert_eq!(profile.currency(), Currency::EUR);
        assert_eq!(profile.icon(), "pickaxe");
        assert!(!profile.is_visible());
        assert_eq!(profile.calculation_method(), CalculationMethod::Fifo);
        assert_eq!(profile.asset().name(), "BTC");
        assert_eq!(profile.version(), 1);
    }

    #[test]
    fn test_new_profile_has_no_lines_and_zero_totals() {
        let profile = create_test_profile();
        assert!(profile.lines().is_empty());
        assert!(profile.current_totals().is_zero());
        assert_eq!(profile.holding_quantity(), dec!(0));
    }

    #[test]
    fn test_name_boundaries() {
        let ok_short = ProfileBuilder::new()
            .name("B")
            .asset(AssetFixtures::btc())
            .build();
        assert!(ok_short.is_ok());

        let ok_long = ProfileBuilder::new()
            .name("x".repeat(30))
            .asset(AssetFixtures::btc())
            .build();
        assert!(ok_long.is_ok());

        let too_long = ProfileBuilder::new()
            .name("x".repeat(31))
            .asset(AssetFixtures::btc())
            .build();
        assert!(matches!(too_long, Err(ProfileError::Validation(_))));

        let empty = ProfileBuilder::new()
            .name("")
            .asset(AssetFixtures::btc())
            .build();
        assert!(matches!(empty, Err(ProfileError::Validation(_))));
    }
}

mod line_mutation {
    use super::*;

    #[test]
    fn test_add_line_returns_id_and_computes_totals() {
        let mut profile = create_test_profile();
        let line_id = profile
            .add_line(
                DateFixtures::start(),
                0,
                LineType::Buy,
                dec!(1.0),
                dec!(10000),
                "first buy",
            )
            .unwrap();

        let line = profile.line(line_id).expect("line should exist");
        assert_eq!(line.comment(), "first buy");
        assert_line_totals(line, dec!(10000), dec!(10000), dec!(1.0));
    }

    #[test]
    fn test_remove_line_recomputes_downstream() {
        let mut profile = TestProfileBuilder::new()
            .buy(DateFixtures::day(0), dec!(1.0), dec!(10000))
            .buy(DateFixtures::day(1), dec!(1.0), dec!(20000))
            .build();

        let first_id = profile.lines()[0].id();
        profile.remove_line(first_id).unwrap();

        assert_eq!(profile.lines().len(), 1);
        assert_line_totals(&profile.lines()[0], dec!(20000), dec!(20000), dec!(1.0));
    }

    #[test]
    fn test_remove_unknown_line_fails() {
        let mut profile = create_test_profile();
        let result = profile.remove_line(LineId::new());
        assert!(matches!(result, Err(ProfileError::LineNotFound(_))));
    }

    #[test]
    fn test_inserting_historical_line_restates_later_snapshots() {
        let mut profile = TestProfileBuilder::new()
            .buy(DateFixtures::day(5), dec!(1.0), dec!(30000))
            .build();

        // A cheaper buy inserted before the existing one changes the
        // blended average of everything after it
        profile
            .add_line(
                DateFixtures::day(0),
                0,
                LineType::Buy,
                dec!(1.0),
                dec!(10000),
                "",
            )
            .unwrap();

        let last = profile.lines().last().unwrap();
        assert_eq!(last.date(), DateFixtures::day(5));
        assert_line_totals(last, dec!(20000), dec!(40000), dec!(2.0));
    }

    #[test]
    fn test_lines_kept_sorted_by_date_then_display_order() {
        let mut profile = create_test_profile();
        profile
            .add_line(DateFixtures::day(2), 0, LineType::Buy, dec!(1), dec!(3), "")
            .unwrap();
        profile
            .add_line(DateFixtures::day(0), 1, LineType::Buy, dec!(1), dec!(2), "")
            .unwrap();
        profile
            .add_line(DateFixtures::day(0), 0, LineType::Setup, dec!(1), dec!(1), "")
            .unwrap();

        let keys: Vec<_> = profile.lines().iter().map(|l| l.sort_key()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(profile.lines()[0].line_type(), LineType::Setup);
    }

    #[test]
    fn test_oversell_add_is_rejected_and_rolled_back() {
        let mut profile = TestProfileBuilder::new()
            .buy(DateFixtures::day(0), dec!(1.0), dec!(10000))
            .build();
        let before: Vec<_> = profile.lines().to_vec();
        profile.take_events();

        let result = profile.add_line(
            DateFixtures::day(1),
            0,
            LineType::Sell,
            dec!(5.0),
            dec!(9000),
            "",
        );

        assert!(matches!(result, Err(ProfileError::Calculation(_))));
        assert_eq!(profile.lines().len(), before.len());
        assert_line_totals(&profile.lines()[0], dec!(10000), dec!(10000), dec!(1.0));
        assert!(profile.take_events().is_empty());
    }

    #[test]
    fn test_removing_buy_stranding_a_sell_is_rejected() {
        let mut profile = TestProfileBuilder::new()
            .buy(DateFixtures::day(0), dec!(1.0), dec!(10000))
            .buy(DateFixtures::day(1), dec!(1.0), dec!(20000))
            .sell(DateFixtures::day(2), dec!(1.5), dec!(25000))
            .build();

        let first_buy = profile.lines()[0].id();
        let result = profile.remove_line(first_buy);

        assert!(matches!(result, Err(ProfileError::Calculation(_))));
        assert_eq!(profile.lines().len(), 3, "rollback must restore the line");
        assert_eq!(profile.holding_quantity(), dec!(0.5));
    }

    #[test]
    fn test_version_bumps_on_each_successful_mutation() {
        let mut profile = create_test_profile();
        let v0 = profile.version();

        profile
            .add_line(DateFixtures::day(0), 0, LineType::Buy, dec!(1), dec!(1), "")
            .unwrap();
        assert_eq!(profile.version(), v0 + 1);

        let line_id = profile.lines()[0].id();
        profile.remove_line(line_id).unwrap();
        assert_eq!(profile.version(), v0 + 2);
    }
}

mod method_switching {
    use super::*;

    #[test]
    fn test_switch_alone_keeps_existing_totals() {
        let mut profile = TestProfileBuilder::new()
            .buy(DateFixtures::day(0), dec!(1.0), dec!(10000))
            .buy(DateFixtures::day(1), dec!(1.0), dec!(20000))
            .sell(DateFixtures::day(2), dec!(1.0), dec!(25000))
            .build();

        let weighted = profile.current_totals();
        profile.change_calculation_method(CalculationMethod::Fifo);
        assert_eq!(profile.current_totals(), weighted);
    }

    #[test]
    fn test_next_structural_mutation_uses_new_method() {
        let mut profile = TestProfileBuilder::new()
            .buy(DateFixtures::day(0), dec!(1.0), dec!(10000))
            .buy(DateFixtures::day(1), dec!(1.0), dec!(20000))
            .build();

        profile.change_calculation_method(CalculationMethod::Fifo);
        profile
            .add_line(
                DateFixtures::day(2),
                0,
                LineType::Sell,
                dec!(1.0),
                dec!(25000),
                "",
            )
            .unwrap();

        // FIFO consumed the 10000 lot; weighted average would report 15000
        assert_eq!(profile.current_totals().average_cost, dec!(20000));
    }

    #[test]
    fn test_explicit_recalculate_restates_history() {
        let mut profile = TestProfileBuilder::new()
            .buy(DateFixtures::day(0), dec!(1.0), dec!(10000))
            .buy(DateFixtures::day(1), dec!(1.0), dec!(20000))
            .sell(DateFixtures::day(2), dec!(1.0), dec!(25000))
            .build();

        profile.change_calculation_method(CalculationMethod::Fifo);
        profile.recalculate().unwrap();

        assert_eq!(profile.current_totals().average_cost, dec!(20000));
        assert_eq!(profile.current_totals().total_cost, dec!(20000));
    }

    #[test]
    fn test_switching_to_same_method_is_a_no_op() {
        let mut profile = create_test_profile();
        profile.take_events();
        profile.change_calculation_method(CalculationMethod::WeightedAverage);
        assert!(profile.take_events().is_empty());
    }
}

mod metadata_operations {
    use super::*;

    #[test]
    fn test_rename_validates_length() {
        let mut profile = create_test_profile();
        assert!(profile.rename("Cold Wallet").is_ok());
        assert_eq!(profile.name(), "Cold Wallet");

        let result = profile.rename("y".repeat(40));
        assert!(matches!(result, Err(ProfileError::Validation(_))));
        assert_eq!(profile.name(), "Cold Wallet");
    }

    #[test]
    fn test_visibility_icon_currency() {
        let mut profile = create_test_profile();

        profile.set_visibility(false);
        assert!(!profile.is_visible());

        profile.set_icon("vault");
        assert_eq!(profile.icon(), "vault");

        profile.set_currency(Currency::CHF);
        assert_eq!(profile.currency(), Currency::CHF);
    }

    #[test]
    fn test_metadata_changes_never_touch_totals() {
        let mut profile = TestProfileBuilder::new()
            .buy(DateFixtures::day(0), dec!(2.0), dec!(150))
            .build();
        let before = profile.current_totals();

        profile.rename("Renamed").unwrap();
        profile.set_currency(Currency::GBP);
        profile.set_visibility(false);

        assert_eq!(profile.current_totals(), before);
    }
}
