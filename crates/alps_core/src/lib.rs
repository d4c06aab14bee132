//! # ALPS Core
//!
//! Domain logic for publishing Application-Level Profile Semantics (ALPS)
//! descriptions of exposed data repositories.
//!
//! ## Overview
//!
//! - [`AlpsController`] builds the top-level document: one descriptor per
//!   registered domain type, each linking to that resource's own document
//! - [`ResourceResolver`] turns a repository relation name into its
//!   [`RootResourceInformation`], the per-resource document
//!
//! Both work against collaborator traits so the HTTP layer and tests can
//! supply their own implementations:
//!
//! - [`RepositoryRegistry`] enumerates exposed domain types
//! - [`ResourceMappings`] maps domain types to relation names and descriptions
//! - [`DescriptorConverter`] owns descriptor naming and document layout
//!
//! [`Catalog`] loads in-memory implementations of the registry and mapping
//! index from a TOML file.
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use alps_core::{AlpsController, AlpsDescriptorConverter, BaseUri, Catalog};
//!
//! let catalog = Catalog::from_toml_str(r#"
//! [[repository]]
//! domain_type = "Order"
//! rel = "orders"
//! "#)?;
//! let (registry, mappings) = catalog.into_parts();
//!
//! let controller = AlpsController::new(
//!     Arc::new(registry),
//!     Arc::new(AlpsDescriptorConverter::new()),
//!     Arc::new(mappings),
//! );
//!
//! let alps = controller.alps(&BaseUri::parse("http://localhost:8080/alps")?)?;
//! assert_eq!(
//!     alps.descriptors()[0].href(),
//!     Some("http://localhost:8080/alps/orders")
//! );
//! # Ok::<(), alps_core::AlpsError>(())
//! ```

pub mod catalog;
pub mod controller;
pub mod converter;
pub mod descriptor;
pub mod document;
pub mod errors;
pub mod mapping;
pub mod registry;
pub mod relation_name;
pub mod resolver;
pub mod uri;

pub use catalog::Catalog;
pub use controller::AlpsController;
pub use converter::{AlpsDescriptorConverter, DescriptorConverter};
pub use descriptor::{Descriptor, DescriptorBuilder, DescriptorType, Doc, DocFormat};
pub use document::{Alps, AlpsBuilder, ALPS_JSON_MEDIA_TYPE, ALPS_VERSION};
pub use errors::{AlpsError, AlpsResult};
pub use mapping::{
    InMemoryResourceMappings, PropertyMetadata, ResourceDescription, ResourceMappings,
    ResourceMetadata,
};
pub use registry::{DomainType, InMemoryRepositoryRegistry, RepositoryRegistry};
pub use relation_name::RelationName;
pub use resolver::{ResourceResolver, RootResourceInformation};
pub use uri::BaseUri;
