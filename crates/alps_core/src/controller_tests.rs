//! Tests for ALPS aggregation

use super::*;
use crate::converter::AlpsDescriptorConverter;
use crate::descriptor::{Descriptor, DescriptorBuilder, DescriptorType, Doc};
use crate::mapping::{InMemoryResourceMappings, ResourceDescription, ResourceMetadata};
use crate::registry::{DomainType, InMemoryRepositoryRegistry};
use crate::relation_name::RelationName;
use crate::resolver::ResourceResolver;
use tracing_test::traced_test;

fn domain_type(name: &str) -> DomainType {
    DomainType::try_new(name).unwrap()
}

fn metadata(name: &str, rel: &str) -> ResourceMetadata {
    ResourceMetadata::new(domain_type(name), RelationName::try_new(rel).unwrap())
}

fn mappings(entries: Vec<ResourceMetadata>) -> Arc<InMemoryResourceMappings> {
    let mut mappings = InMemoryResourceMappings::new();
    for entry in entries {
        mappings.register(entry).unwrap();
    }
    Arc::new(mappings)
}

fn controller(registry: &[&str], entries: Vec<ResourceMetadata>) -> AlpsController {
    let registry =
        InMemoryRepositoryRegistry::new(registry.iter().map(|name| domain_type(name)));

    AlpsController::new(
        Arc::new(registry),
        Arc::new(AlpsDescriptorConverter::new()),
        mappings(entries),
    )
}

fn base_uri() -> BaseUri {
    BaseUri::parse("http://host/alps").unwrap()
}

fn hrefs(alps: &Alps) -> Vec<&str> {
    alps.descriptors().iter().filter_map(|d| d.href()).collect()
}

#[test]
fn test_order_and_customer_scenario() {
    let controller = controller(
        &["Order", "Customer"],
        vec![metadata("Order", "orders"), metadata("Customer", "customers")],
    );

    let alps = controller.alps(&base_uri()).unwrap();

    assert_eq!(alps.descriptors().len(), 2);
    assert_eq!(
        hrefs(&alps),
        vec!["http://host/alps/orders", "http://host/alps/customers"]
    );
}

#[test]
fn test_empty_registry_produces_empty_document() {
    let controller = controller(&[], vec![metadata("Order", "orders")]);

    let alps = controller.alps(&base_uri()).unwrap();

    assert!(alps.descriptors().is_empty());
    assert_eq!(alps.version(), "1.0");
}

/// Descriptor order follows the registry, not the mapping index or names.
#[test]
fn test_registry_order_preserved() {
    let entries = vec![
        metadata("Address", "addresses"),
        metadata("Customer", "customers"),
        metadata("Order", "orders"),
    ];
    let controller = controller(&["Order", "Address", "Customer"], entries);

    let alps = controller.alps(&base_uri()).unwrap();

    let names: Vec<_> = alps.descriptors().iter().filter_map(|d| d.name()).collect();
    assert_eq!(names, vec!["orders", "addresses", "customers"]);
}

#[test]
fn test_descriptors_are_safe_with_item_description() {
    let controller = controller(
        &["Order"],
        vec![metadata("Order", "orders")
            .with_description(ResourceDescription::text("All orders"))
            .with_item_resource_description(ResourceDescription::text("An order"))],
    );

    let alps = controller.alps(&base_uri()).unwrap();
    let descriptor = &alps.descriptors()[0];

    assert_eq!(descriptor.id(), Some("get-orders"));
    assert_eq!(descriptor.descriptor_type(), Some(DescriptorType::Safe));
    assert_eq!(descriptor.doc(), Some(&Doc::text("An order")));
}

#[test]
fn test_repeated_aggregation_is_identical() {
    let controller = controller(
        &["Order", "Customer"],
        vec![metadata("Order", "orders"), metadata("Customer", "customers")],
    );

    let first = controller.alps(&base_uri()).unwrap();
    let second = controller.alps(&base_uri()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_href_uses_request_host() {
    let controller = controller(&["Order"], vec![metadata("Order", "orders")]);
    let base = BaseUri::parse("https://api.example.com:8443/alps/").unwrap();

    let alps = controller.alps(&base).unwrap();

    assert_eq!(hrefs(&alps), vec!["https://api.example.com:8443/alps/orders"]);
}

#[traced_test]
#[test]
fn test_unmapped_domain_type_fails_whole_request() {
    let controller = controller(&["Order", "Invoice"], vec![metadata("Order", "orders")]);

    let err = controller.alps(&base_uri()).unwrap_err();

    assert_eq!(
        err,
        AlpsError::UnmappedDomainType {
            domain_type: "Invoice".to_string()
        }
    );
    assert!(logs_contain("Registered domain type has no resource mapping"));
}

#[test]
fn test_descriptor_passes_information_through() {
    let entries = mappings(vec![metadata("Order", "orders")]);
    let converter = Arc::new(AlpsDescriptorConverter::new());
    let resolver = ResourceResolver::new(entries.clone(), converter.clone());
    let controller = AlpsController::new(
        Arc::new(InMemoryRepositoryRegistry::new([domain_type("Order")])),
        converter,
        entries,
    );

    let information = resolver.resolve("orders").unwrap();

    assert_eq!(controller.descriptor(information.clone()), information);
}

/// Converter that tags every descriptor, to show the controller delegates
/// descriptor construction instead of building its own.
struct TaggingConverter;

impl DescriptorConverter for TaggingConverter {
    fn safe_descriptor_builder(
        &self,
        rel: &RelationName,
        _description: Option<&ResourceDescription>,
    ) -> DescriptorBuilder {
        Descriptor::builder().id(format!("tagged-{}", rel))
    }

    fn convert(&self, _metadata: &ResourceMetadata) -> Alps {
        Alps::builder().build()
    }
}

#[test]
fn test_controller_delegates_to_converter() {
    let controller = AlpsController::new(
        Arc::new(InMemoryRepositoryRegistry::new([domain_type("Order")])),
        Arc::new(TaggingConverter),
        mappings(vec![metadata("Order", "orders")]),
    );

    let alps = controller.alps(&base_uri()).unwrap();
    let descriptor = &alps.descriptors()[0];

    assert_eq!(descriptor.id(), Some("tagged-orders"));
    assert_eq!(descriptor.href(), Some("http://host/alps/orders"));
}
