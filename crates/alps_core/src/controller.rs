//! ALPS aggregation.
//!
//! [`AlpsController`] assembles the top-level ALPS document: one safe
//! descriptor per registered domain type, each linking to the per-resource
//! ALPS document of that type.

use crate::converter::DescriptorConverter;
use crate::document::Alps;
use crate::mapping::ResourceMappings;
use crate::registry::RepositoryRegistry;
use crate::resolver::RootResourceInformation;
use crate::uri::BaseUri;
use crate::{AlpsError, AlpsResult};
use std::sync::Arc;

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;

/// Publishes ALPS descriptions of the exposed repositories.
///
/// Holds read-only collaborators only; a single instance serves all
/// requests concurrently.
#[derive(Clone)]
pub struct AlpsController {
    repositories: Arc<dyn RepositoryRegistry>,
    converter: Arc<dyn DescriptorConverter>,
    mappings: Arc<dyn ResourceMappings>,
}

impl AlpsController {
    /// Create a controller from its three collaborators.
    pub fn new(
        repositories: Arc<dyn RepositoryRegistry>,
        converter: Arc<dyn DescriptorConverter>,
        mappings: Arc<dyn ResourceMappings>,
    ) -> Self {
        Self {
            repositories,
            converter,
            mappings,
        }
    }

    /// Build the document listing every registered resource.
    ///
    /// `current_request` is the URI of the request being served; each
    /// descriptor links to `<current_request>/<rel>`. Descriptors follow the
    /// registry's enumeration order.
    ///
    /// # Errors
    ///
    /// Returns `AlpsError::UnmappedDomainType` if the registry yields a
    /// domain type the mapping index does not know. No partial document is
    /// produced.
    pub fn alps(&self, current_request: &BaseUri) -> AlpsResult<Alps> {
        let mut descriptors = Vec::new();

        for domain_type in self.repositories.domain_types() {
            let mapping = self.mappings.mapping_for(&domain_type).ok_or_else(|| {
                tracing::error!(
                    domain_type = %domain_type,
                    "Registered domain type has no resource mapping"
                );
                AlpsError::UnmappedDomainType {
                    domain_type: domain_type.to_string(),
                }
            })?;

            let href = current_request
                .path_segment(mapping.rel.as_str())
                .to_uri_string();

            let descriptor = self
                .converter
                .safe_descriptor_builder(&mapping.rel, mapping.item_resource_description.as_ref())
                .href(href)
                .build();

            descriptors.push(descriptor);
        }

        tracing::debug!(
            base_uri = %current_request,
            descriptor_count = descriptors.len(),
            "Assembled ALPS document"
        );

        Ok(Alps::builder().descriptors(descriptors).build())
    }

    /// Return the information of an already resolved resource.
    ///
    /// Resolution, including rejection of unknown names, happens before
    /// this is called; the value is passed through unchanged.
    pub fn descriptor(&self, information: RootResourceInformation) -> RootResourceInformation {
        information
    }
}
