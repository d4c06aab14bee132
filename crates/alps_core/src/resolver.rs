//! Resolution of a repository path segment to its resource information.

use crate::converter::DescriptorConverter;
use crate::document::Alps;
use crate::mapping::{ResourceMappings, ResourceMetadata};
use crate::{AlpsError, AlpsResult};
use serde::{Serialize, Serializer};
use std::sync::Arc;

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

/// Everything known about one exposed repository resource.
///
/// Produced by [`ResourceResolver::resolve`]. Serializes as its ALPS
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootResourceInformation {
    metadata: ResourceMetadata,
    document: Alps,
}

impl RootResourceInformation {
    pub fn new(metadata: ResourceMetadata, document: Alps) -> Self {
        Self { metadata, document }
    }

    pub fn metadata(&self) -> &ResourceMetadata {
        &self.metadata
    }

    pub fn document(&self) -> &Alps {
        &self.document
    }
}

impl Serialize for RootResourceInformation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.document.serialize(serializer)
    }
}

/// Resolves the `{repository}` path segment of a request.
///
/// Only exported resources resolve; anything else is reported as unknown so
/// that hidden repositories are indistinguishable from missing ones.
#[derive(Clone)]
pub struct ResourceResolver {
    mappings: Arc<dyn ResourceMappings>,
    converter: Arc<dyn DescriptorConverter>,
}

impl ResourceResolver {
    pub fn new(
        mappings: Arc<dyn ResourceMappings>,
        converter: Arc<dyn DescriptorConverter>,
    ) -> Self {
        Self {
            mappings,
            converter,
        }
    }

    /// Resolve a repository relation name.
    ///
    /// # Errors
    ///
    /// Returns `AlpsError::UnknownRepository` if no exported resource uses
    /// `repository` as its relation name.
    pub fn resolve(&self, repository: &str) -> AlpsResult<RootResourceInformation> {
        let metadata = self
            .mappings
            .metadata_for_rel(repository)
            .filter(|metadata| metadata.exported)
            .ok_or_else(|| AlpsError::UnknownRepository {
                name: repository.to_string(),
            })?;

        let document = self.converter.convert(&metadata);

        tracing::debug!(
            repository = %repository,
            domain_type = %metadata.domain_type,
            "Resolved repository resource"
        );

        Ok(RootResourceInformation::new(metadata, document))
    }
}
