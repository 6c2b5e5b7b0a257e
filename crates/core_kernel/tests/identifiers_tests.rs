//! Identifier tests
//!
//! Verifies the strongly-typed UUID newtypes: display prefixes, parsing
//! with and without prefix, and conversions.

use core_kernel::{LineId, ProfileId};
use uuid::Uuid;

#[test]
fn test_display_prefixes() {
    assert!(ProfileId::new().to_string().starts_with("PRF-"));
    assert!(LineId::new().to_string().starts_with("LNE-"));
}

#[test]
fn test_parse_with_prefix() {
    let id = ProfileId::new();
    let parsed: ProfileId = id.to_string().parse().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn test_parse_bare_uuid() {
    let uuid = Uuid::new_v4();
    let parsed: LineId = uuid.to_string().parse().unwrap();
    assert_eq!(parsed, LineId::from(uuid));
}

#[test]
fn test_parse_garbage_fails() {
    assert!("not-a-uuid".parse::<ProfileId>().is_err());
}

#[test]
fn test_v7_ids_are_time_ordered() {
    // v7 ids embed a millisecond timestamp; ids created in sequence must
    // never compare as equal
    let a = LineId::new_v7();
    let b = LineId::new_v7();
    assert_ne!(a, b);
}

#[test]
fn test_serde_is_transparent() {
    let id = ProfileId::new();
    let json = serde_json::to_string(&id).unwrap();
    // Serialized form is the bare UUID, not the prefixed display form
    assert!(!json.contains("PRF-"));
    let back: ProfileId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, back);
}
