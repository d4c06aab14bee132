//! Conversion of resource metadata into ALPS descriptors.
//!
//! The converter owns the naming rules for descriptors: which id prefix a
//! transition gets, which representation it returns and how descriptions
//! become docs.

use crate::descriptor::{Descriptor, DescriptorBuilder, DescriptorType};
use crate::document::Alps;
use crate::mapping::{PropertyMetadata, ResourceDescription, ResourceMetadata};
use crate::relation_name::RelationName;

#[cfg(test)]
#[path = "converter_tests.rs"]
mod tests;

// Transition id prefixes
const GET_PREFIX: &str = "get-";
const CREATE_PREFIX: &str = "create-";
const UPDATE_PREFIX: &str = "update-";
const PATCH_PREFIX: &str = "patch-";
const DELETE_PREFIX: &str = "delete-";

/// Builds ALPS descriptors for exposed resources.
pub trait DescriptorConverter: Send + Sync {
    /// Builder for the safe (read) descriptor of the resource named `rel`.
    ///
    /// The caller attaches an href before calling `build`.
    fn safe_descriptor_builder(
        &self,
        rel: &RelationName,
        description: Option<&ResourceDescription>,
    ) -> DescriptorBuilder;

    /// Full ALPS document describing a single resource.
    fn convert(&self, metadata: &ResourceMetadata) -> Alps;
}

/// Default converter.
///
/// Per-resource documents contain a `<rel>-representation` semantic
/// descriptor listing the properties, followed by the collection transitions
/// (`get-<rel>`, `create-<rel>`) and the item transitions (`get-`,
/// `update-`, `patch-`, `delete-<item-rel>`), all returning the
/// representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlpsDescriptorConverter;

impl AlpsDescriptorConverter {
    pub fn new() -> Self {
        Self
    }

    fn representation_id(rel: &RelationName) -> String {
        format!("{}-representation", rel)
    }

    fn representation_descriptor(metadata: &ResourceMetadata) -> Descriptor {
        Descriptor::builder()
            .id(Self::representation_id(&metadata.rel))
            .descriptor_type(DescriptorType::Semantic)
            .doc(
                metadata
                    .item_resource_description
                    .as_ref()
                    .and_then(ResourceDescription::to_doc),
            )
            .descriptors(metadata.properties.iter().map(Self::property_descriptor))
            .build()
    }

    fn property_descriptor(property: &PropertyMetadata) -> Descriptor {
        Descriptor::builder()
            .id(property.name.clone())
            .name(property.name.clone())
            .descriptor_type(DescriptorType::Semantic)
            .doc(property.description.as_ref().and_then(ResourceDescription::to_doc))
            .build()
    }

    fn transition(
        id: String,
        rel: &RelationName,
        descriptor_type: DescriptorType,
        description: Option<&ResourceDescription>,
    ) -> Descriptor {
        Descriptor::builder()
            .id(id)
            .name(rel.as_str())
            .descriptor_type(descriptor_type)
            .doc(description.and_then(ResourceDescription::to_doc))
            .rt(format!("#{}", Self::representation_id(rel)))
            .build()
    }
}

impl DescriptorConverter for AlpsDescriptorConverter {
    fn safe_descriptor_builder(
        &self,
        rel: &RelationName,
        description: Option<&ResourceDescription>,
    ) -> DescriptorBuilder {
        Descriptor::builder()
            .id(format!("{}{}", GET_PREFIX, rel))
            .name(rel.as_str())
            .descriptor_type(DescriptorType::Safe)
            .doc(description.and_then(ResourceDescription::to_doc))
    }

    fn convert(&self, metadata: &ResourceMetadata) -> Alps {
        let rel = &metadata.rel;
        let item_rel = &metadata.item_rel;
        let collection_description = metadata.description.as_ref();
        let item_description = metadata.item_resource_description.as_ref();

        let mut descriptors = vec![Self::representation_descriptor(metadata)];

        // Collection resource
        descriptors.push(
            self.safe_descriptor_builder(rel, collection_description)
                .rt(format!("#{}", Self::representation_id(rel)))
                .build(),
        );
        descriptors.push(Self::transition(
            format!("{}{}", CREATE_PREFIX, rel),
            rel,
            DescriptorType::Unsafe,
            item_description,
        ));

        // Item resource
        descriptors.push(Self::transition(
            format!("{}{}", GET_PREFIX, item_rel),
            rel,
            DescriptorType::Safe,
            item_description,
        ));
        descriptors.push(Self::transition(
            format!("{}{}", UPDATE_PREFIX, item_rel),
            rel,
            DescriptorType::Idempotent,
            item_description,
        ));
        descriptors.push(Self::transition(
            format!("{}{}", PATCH_PREFIX, item_rel),
            rel,
            DescriptorType::Unsafe,
            item_description,
        ));
        descriptors.push(Self::transition(
            format!("{}{}", DELETE_PREFIX, item_rel),
            rel,
            DescriptorType::Idempotent,
            item_description,
        ));

        tracing::debug!(
            rel = %rel,
            descriptor_count = descriptors.len(),
            "Converted resource metadata to ALPS document"
        );

        Alps::builder()
            .doc(collection_description.and_then(ResourceDescription::to_doc))
            .descriptors(descriptors)
            .build()
    }
}
