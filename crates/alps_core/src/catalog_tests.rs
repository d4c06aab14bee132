//! Tests for catalog loading

use super::*;
use crate::mapping::ResourceMappings;
use crate::registry::RepositoryRegistry;
use std::io::Write;

const ORDERS_CATALOG: &str = r#"
[[repository]]
domain_type = "Order"
rel = "orders"
item_rel = "order"
description = "Orders placed by customers"
item_description = "An order"

[[repository.property]]
name = "total"
description = "Order total in cents"

[[repository.property]]
name = "placedAt"

[[repository]]
domain_type = "Customer"
rel = "customers"

[[repository]]
domain_type = "AuditEntry"
rel = "audit"
exported = false
"#;

#[test]
fn test_parse_catalog_preserves_file_order() {
    let catalog = Catalog::from_toml_str(ORDERS_CATALOG).unwrap();

    let names: Vec<String> = catalog
        .registry()
        .domain_types()
        .into_iter()
        .map(String::from)
        .collect();

    assert_eq!(names, vec!["Order", "Customer", "AuditEntry"]);
    assert_eq!(catalog.mappings().len(), 3);
}

#[test]
fn test_parse_catalog_metadata() {
    let catalog = Catalog::from_toml_str(ORDERS_CATALOG).unwrap();

    let order = catalog.mappings().metadata_for_rel("orders").unwrap();
    assert_eq!(order.item_rel.as_str(), "order");
    assert_eq!(
        order.description,
        Some(ResourceDescription::text("Orders placed by customers"))
    );
    assert_eq!(
        order.item_resource_description,
        Some(ResourceDescription::text("An order"))
    );
    assert_eq!(order.properties.len(), 2);
    assert_eq!(
        order.properties[0].description,
        Some(ResourceDescription::text("Order total in cents"))
    );
    assert!(order.properties[1].description.is_none());
    assert!(order.exported);

    let audit = catalog.mappings().metadata_for_rel("audit").unwrap();
    assert!(!audit.exported);
}

#[test]
fn test_doc_format_applies_to_descriptions() {
    let catalog = Catalog::from_toml_str(
        r#"
[[repository]]
domain_type = "Order"
rel = "orders"
item_description = "<b>An order</b>"
doc_format = "HTML"
"#,
    )
    .unwrap();

    let order = catalog.mappings().metadata_for_rel("orders").unwrap();
    assert_eq!(
        order.item_resource_description.unwrap().format,
        DocFormat::Html
    );
}

#[test]
fn test_empty_catalog() {
    let catalog = Catalog::from_toml_str("").unwrap();

    assert!(catalog.registry().is_empty());
    assert!(catalog.mappings().is_empty());
}

#[test]
fn test_invalid_rel_rejected() {
    let err = Catalog::from_toml_str(
        r#"
[[repository]]
domain_type = "Order"
rel = "orders/all"
"#,
    )
    .unwrap_err();

    assert!(matches!(err, AlpsError::CatalogParseError { .. }));
}

#[test]
fn test_unknown_key_rejected() {
    let err = Catalog::from_toml_str(
        r#"
[[repository]]
domain_type = "Order"
rel = "orders"
path = "/orders"
"#,
    )
    .unwrap_err();

    assert!(matches!(err, AlpsError::CatalogParseError { .. }));
}

#[test]
fn test_duplicate_rel_rejected() {
    let err = Catalog::from_toml_str(
        r#"
[[repository]]
domain_type = "Order"
rel = "orders"

[[repository]]
domain_type = "LegacyOrder"
rel = "orders"
"#,
    )
    .unwrap_err();

    assert_eq!(
        err,
        AlpsError::DuplicateCatalogEntry {
            kind: "relation name".to_string(),
            value: "orders".to_string(),
        }
    );
}

#[test]
fn test_item_rel_equal_to_rel_rejected() {
    let err = Catalog::from_toml_str(
        r#"
[[repository]]
domain_type = "Order"
rel = "orders"
item_rel = "orders"
"#,
    )
    .unwrap_err();

    assert!(matches!(err, AlpsError::InvalidRelationName { .. }));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ORDERS_CATALOG.as_bytes()).unwrap();

    let catalog = Catalog::load(file.path()).unwrap();
    let (registry, mappings) = catalog.into_parts();

    assert_eq!(registry.len(), 3);
    assert!(mappings.metadata_for_rel("customers").is_some());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("catalog.toml");

    let err = Catalog::load(&missing).unwrap_err();

    assert!(matches!(err, AlpsError::CatalogAccessError { .. }));
}
