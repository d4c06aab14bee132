//! Resource mapping index.
//!
//! Maps each domain type to the metadata that describes how it is exposed:
//! its relation name, the relation name of a single item, human-readable
//! descriptions, and the properties of its representation.

use crate::descriptor::{Doc, DocFormat};
use crate::registry::DomainType;
use crate::relation_name::RelationName;
use crate::{AlpsError, AlpsResult};
use std::collections::HashMap;

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;

/// A human-readable description of a resource or property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescription {
    /// Description text
    pub message: String,

    /// Rendering format of `message`
    pub format: DocFormat,
}

impl ResourceDescription {
    /// Create a plain-text description.
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            format: DocFormat::Text,
        }
    }

    /// Render as an ALPS doc. Blank messages produce no doc.
    pub fn to_doc(&self) -> Option<Doc> {
        if self.message.trim().is_empty() {
            None
        } else {
            Some(Doc::new(self.message.clone(), self.format))
        }
    }
}

/// Metadata for one property of a resource representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMetadata {
    pub name: String,
    pub description: Option<ResourceDescription>,
}

impl PropertyMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: ResourceDescription) -> Self {
        self.description = Some(description);
        self
    }
}

/// Routing and naming metadata for one domain type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMetadata {
    /// The domain type this metadata describes
    pub domain_type: DomainType,

    /// Relation name of the collection resource, also its path segment
    pub rel: RelationName,

    /// Relation name of a single item
    pub item_rel: RelationName,

    /// Description of the collection resource
    pub description: Option<ResourceDescription>,

    /// Description of a single item
    pub item_resource_description: Option<ResourceDescription>,

    /// Whether the resource is exposed over HTTP
    pub exported: bool,

    /// Properties of the item representation, in declaration order
    pub properties: Vec<PropertyMetadata>,
}

impl ResourceMetadata {
    /// Create exported metadata with no descriptions or properties.
    ///
    /// The item relation name defaults to the uncapitalized simple name of
    /// the domain type (`com.example.Order` -> `order`). When that is not a
    /// valid relation name or equals `rel`, `<rel>-item` is used instead,
    /// with `rel` trimmed when needed to stay within the length limit.
    pub fn new(domain_type: DomainType, rel: RelationName) -> Self {
        Self {
            item_rel: default_item_rel(&domain_type, &rel),
            domain_type,
            rel,
            description: None,
            item_resource_description: None,
            exported: true,
            properties: Vec::new(),
        }
    }

    pub fn with_item_rel(mut self, item_rel: RelationName) -> Self {
        self.item_rel = item_rel;
        self
    }

    pub fn with_description(mut self, description: ResourceDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_item_resource_description(mut self, description: ResourceDescription) -> Self {
        self.item_resource_description = Some(description);
        self
    }

    pub fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    pub fn with_property(mut self, property: PropertyMetadata) -> Self {
        self.properties.push(property);
        self
    }
}

fn default_item_rel(domain_type: &DomainType, rel: &RelationName) -> RelationName {
    let simple_name = domain_type
        .as_str()
        .rsplit('.')
        .next()
        .unwrap_or_default();

    let mut chars = simple_name.chars();
    let uncapitalized = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect::<String>(),
        None => String::new(),
    };

    match RelationName::try_new(uncapitalized) {
        Ok(item_rel) if item_rel != *rel => item_rel,
        _ => rel.with_suffix("-item"),
    }
}

/// Lookup of resource metadata by domain type or relation name.
///
/// Implementations must be safe for concurrent reads.
pub trait ResourceMappings: Send + Sync {
    /// Metadata for `domain_type`, or `None` when the type is not mapped.
    fn mapping_for(&self, domain_type: &DomainType) -> Option<ResourceMetadata>;

    /// Metadata of the resource whose collection relation name is `rel`.
    fn metadata_for_rel(&self, rel: &str) -> Option<ResourceMetadata>;
}

/// Mapping index held in memory.
///
/// Registration rejects a second entry for the same domain type or the same
/// relation name, so relation names identify resources unambiguously.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceMappings {
    by_domain_type: HashMap<DomainType, ResourceMetadata>,
    by_rel: HashMap<RelationName, DomainType>,
}

impl InMemoryResourceMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metadata for its domain type.
    ///
    /// # Errors
    ///
    /// - `AlpsError::InvalidRelationName` if the item relation name equals the
    ///   collection relation name
    /// - `AlpsError::DuplicateCatalogEntry` if the domain type or the
    ///   relation name is already registered
    pub fn register(&mut self, metadata: ResourceMetadata) -> AlpsResult<()> {
        if metadata.item_rel == metadata.rel {
            return Err(AlpsError::InvalidRelationName {
                value: metadata.item_rel.to_string(),
                reason: format!(
                    "item relation name of {} must differ from its collection relation name",
                    metadata.domain_type
                ),
            });
        }

        if self.by_domain_type.contains_key(&metadata.domain_type) {
            return Err(AlpsError::DuplicateCatalogEntry {
                kind: "domain type".to_string(),
                value: metadata.domain_type.to_string(),
            });
        }

        if let Some(existing) = self.by_rel.get(&metadata.rel) {
            tracing::warn!(
                rel = %metadata.rel,
                existing = %existing,
                rejected = %metadata.domain_type,
                "Relation name already mapped"
            );
            return Err(AlpsError::DuplicateCatalogEntry {
                kind: "relation name".to_string(),
                value: metadata.rel.to_string(),
            });
        }

        self.by_rel
            .insert(metadata.rel.clone(), metadata.domain_type.clone());
        self.by_domain_type
            .insert(metadata.domain_type.clone(), metadata);

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.by_domain_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_domain_type.is_empty()
    }
}

impl ResourceMappings for InMemoryResourceMappings {
    fn mapping_for(&self, domain_type: &DomainType) -> Option<ResourceMetadata> {
        self.by_domain_type.get(domain_type).cloned()
    }

    fn metadata_for_rel(&self, rel: &str) -> Option<ResourceMetadata> {
        self.by_rel
            .get(rel)
            .and_then(|domain_type| self.by_domain_type.get(domain_type))
            .cloned()
    }
}
