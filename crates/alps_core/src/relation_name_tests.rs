//! Tests for relation name validation.

use super::*;

/// Verify common relation names are accepted.
#[test]
fn test_valid_relation_names() {
    assert!(RelationName::try_new("orders").is_ok());
    assert!(RelationName::try_new("line-items").is_ok());
    assert!(RelationName::try_new("line_items").is_ok());
    assert!(RelationName::try_new("v2.orders").is_ok());
    assert!(RelationName::try_new("Customers").is_ok());
    assert!(RelationName::try_new("o").is_ok());

    let max_length = "a".repeat(MAX_RELATION_NAME_LENGTH);
    assert!(RelationName::try_new(max_length).is_ok());
}

#[test]
fn test_invalid_empty_name() {
    let err = RelationName::try_new("").unwrap_err();
    assert!(matches!(err, AlpsError::InvalidRelationName { .. }));
}

#[test]
fn test_invalid_too_long() {
    let too_long = "a".repeat(MAX_RELATION_NAME_LENGTH + 1);
    let err = RelationName::try_new(too_long).unwrap_err();
    assert!(matches!(err, AlpsError::InvalidRelationName { .. }));
}

/// Characters that would need escaping in a path segment are rejected.
#[test]
fn test_invalid_characters() {
    assert!(RelationName::try_new("orders/items").is_err());
    assert!(RelationName::try_new("order items").is_err());
    assert!(RelationName::try_new("orders?page=1").is_err());
    assert!(RelationName::try_new("ordérs").is_err());
    assert!(RelationName::try_new("%2F").is_err());
}

#[test]
fn test_invalid_leading_character() {
    assert!(RelationName::try_new(".orders").is_err());
    assert!(RelationName::try_new("-orders").is_err());
    assert!(RelationName::try_new("..").is_err());
}

#[test]
fn test_string_conversions() {
    let rel = RelationName::try_new("orders").unwrap();

    assert_eq!(rel.as_str(), "orders");
    assert_eq!(rel.to_string(), "orders");
    assert_eq!(&*rel, "orders");
    assert_eq!(String::from(rel.clone()), "orders");
    assert_eq!(rel.into_string(), "orders");
}

#[test]
fn test_serde_round_trip_validates() {
    let rel: RelationName = serde_json::from_str("\"customers\"").unwrap();
    assert_eq!(rel.as_str(), "customers");
    assert_eq!(serde_json::to_string(&rel).unwrap(), "\"customers\"");

    let invalid: Result<RelationName, _> = serde_json::from_str("\"bad/rel\"");
    assert!(invalid.is_err());
}

#[test]
fn test_with_suffix_appends_when_it_fits() {
    let rel = RelationName::try_new("orders").unwrap();

    assert_eq!(rel.with_suffix("-item").as_str(), "orders-item");
}

/// Long names are trimmed so the derived name stays valid and distinct.
#[test]
fn test_with_suffix_trims_long_names() {
    for length in [96, 99, MAX_RELATION_NAME_LENGTH] {
        let rel = RelationName::try_new("a".repeat(length)).unwrap();

        let derived = rel.with_suffix("-item");

        assert_ne!(derived, rel);
        assert!(derived.ends_with("-item"));
        assert!(RelationName::try_new(derived.as_str()).is_ok());
    }

    // A full-length name that already ends in the suffix
    let rel = RelationName::try_new(format!("{}-item", "a".repeat(95))).unwrap();
    assert_ne!(rel.with_suffix("-item"), rel);
}
