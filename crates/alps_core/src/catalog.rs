//! Repository catalog loading.
//!
//! The catalog is a TOML file that declares the exposed repositories. It is
//! the source for both the [`InMemoryRepositoryRegistry`] (in file order)
//! and the [`InMemoryResourceMappings`].
//!
//! # Example Catalog
//!
//! ```toml
//! [[repository]]
//! domain_type = "Order"
//! rel = "orders"
//! item_rel = "order"
//! description = "Orders placed by customers"
//! item_description = "An order"
//!
//! [[repository.property]]
//! name = "total"
//! description = "Order total in cents"
//!
//! [[repository]]
//! domain_type = "AuditEntry"
//! rel = "audit"
//! exported = false
//! ```

use crate::descriptor::DocFormat;
use crate::mapping::{
    InMemoryResourceMappings, PropertyMetadata, ResourceDescription, ResourceMetadata,
};
use crate::registry::{DomainType, InMemoryRepositoryRegistry};
use crate::relation_name::RelationName;
use crate::{AlpsError, AlpsResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default, rename = "repository")]
    repositories: Vec<RepositoryEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RepositoryEntry {
    domain_type: DomainType,
    rel: RelationName,
    item_rel: Option<RelationName>,
    description: Option<String>,
    item_description: Option<String>,
    #[serde(default)]
    doc_format: DocFormat,
    #[serde(default = "default_exported")]
    exported: bool,
    #[serde(default, rename = "property")]
    properties: Vec<PropertyEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PropertyEntry {
    name: String,
    description: Option<String>,
}

fn default_exported() -> bool {
    true
}

impl RepositoryEntry {
    fn into_metadata(self) -> ResourceMetadata {
        let format = self.doc_format;
        let describe = |message: String| ResourceDescription { message, format };

        let mut metadata =
            ResourceMetadata::new(self.domain_type, self.rel).with_exported(self.exported);

        if let Some(item_rel) = self.item_rel {
            metadata = metadata.with_item_rel(item_rel);
        }
        if let Some(description) = self.description {
            metadata = metadata.with_description(describe(description));
        }
        if let Some(description) = self.item_description {
            metadata = metadata.with_item_resource_description(describe(description));
        }

        for property in self.properties {
            let mut property_metadata = PropertyMetadata::new(property.name);
            if let Some(description) = property.description {
                property_metadata = property_metadata.with_description(describe(description));
            }
            metadata = metadata.with_property(property_metadata);
        }

        metadata
    }
}

/// The registry and mapping index declared by a catalog file.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    registry: InMemoryRepositoryRegistry,
    mappings: InMemoryResourceMappings,
}

impl Catalog {
    /// Parse a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// - `AlpsError::CatalogParseError` for malformed TOML, unknown keys or
    ///   invalid domain type / relation names
    /// - `AlpsError::DuplicateCatalogEntry` when two repositories share a
    ///   domain type or a relation name
    pub fn from_toml_str(content: &str) -> AlpsResult<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| AlpsError::CatalogParseError {
                reason: e.to_string(),
            })?;

        let mut domain_types = Vec::with_capacity(file.repositories.len());
        let mut mappings = InMemoryResourceMappings::new();

        for entry in file.repositories {
            let metadata = entry.into_metadata();
            debug!(
                domain_type = %metadata.domain_type,
                rel = %metadata.rel,
                exported = metadata.exported,
                "Registering repository"
            );
            domain_types.push(metadata.domain_type.clone());
            mappings.register(metadata)?;
        }

        Ok(Self {
            registry: InMemoryRepositoryRegistry::new(domain_types),
            mappings,
        })
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `AlpsError::CatalogAccessError` if the file cannot be read,
    /// otherwise the errors of [`Catalog::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> AlpsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| AlpsError::CatalogAccessError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let catalog = Self::from_toml_str(&content)?;

        info!(
            path = %path.display(),
            repositories = catalog.registry.len(),
            "Loaded repository catalog"
        );

        Ok(catalog)
    }

    pub fn registry(&self) -> &InMemoryRepositoryRegistry {
        &self.registry
    }

    pub fn mappings(&self) -> &InMemoryResourceMappings {
        &self.mappings
    }

    /// Split into the registry and mapping index.
    pub fn into_parts(self) -> (InMemoryRepositoryRegistry, InMemoryResourceMappings) {
        (self.registry, self.mappings)
    }
}
