//! Core error tests

use core_kernel::{Asset, AssetError, CoreError};

#[test]
fn test_asset_error_converts_into_core_error() {
    let err = Asset::new("", 2).unwrap_err();
    let core: CoreError = err.into();
    assert!(matches!(core, CoreError::Asset(AssetError::EmptyName)));
}

#[test]
fn test_helper_constructors() {
    assert!(matches!(
        CoreError::validation("bad input"),
        CoreError::Validation(_)
    ));
    assert!(matches!(
        CoreError::not_found("profile"),
        CoreError::NotFound(_)
    ));
    assert!(matches!(
        CoreError::configuration("unknown method"),
        CoreError::Configuration(_)
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        CoreError::validation("name too long").to_string(),
        "Validation error: name too long"
    );
    assert_eq!(
        CoreError::configuration("unknown method").to_string(),
        "Configuration error: unknown method"
    );
}
