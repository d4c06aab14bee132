//! ALPS descriptors.
//!
//! A [`Descriptor`] is one semantic unit of an ALPS document: a named
//! element, optionally documented, optionally linked, optionally carrying
//! nested descriptors. Descriptors are immutable once built; use
//! [`Descriptor::builder`] to stage the fields.
//!
//! # JSON Shape
//!
//! ```json
//! {
//!   "id": "get-orders",
//!   "name": "orders",
//!   "type": "safe",
//!   "doc": { "format": "TEXT", "value": "An order placed by a customer" },
//!   "href": "http://localhost:8080/alps/orders"
//! }
//! ```

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;

/// The ALPS descriptor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorType {
    /// A data element or a grouping of other descriptors
    Semantic,

    /// A transition that does not change server state (GET)
    Safe,

    /// A state-changing, non-repeatable transition (POST, PATCH)
    Unsafe,

    /// A state-changing transition that may be repeated (PUT, DELETE)
    Idempotent,
}

/// Format of a [`Doc`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocFormat {
    #[default]
    Text,
    Html,
}

/// Human-readable documentation attached to a descriptor or document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    /// How `value` should be rendered
    pub format: DocFormat,

    /// The documentation text
    pub value: String,
}

impl Doc {
    /// Create a plain-text doc.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            format: DocFormat::Text,
            value: value.into(),
        }
    }

    /// Create a doc with an explicit format.
    pub fn new(value: impl Into<String>, format: DocFormat) -> Self {
        Self {
            format,
            value: value.into(),
        }
    }
}

/// One semantic unit within an ALPS document.
///
/// Equality is structural; descriptors have no identity beyond their
/// contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    descriptor_type: Option<DescriptorType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    doc: Option<Doc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    rt: Option<String>,

    #[serde(default, rename = "descriptor", skip_serializing_if = "Vec::is_empty")]
    descriptors: Vec<Descriptor>,
}

impl Descriptor {
    /// Start building a new descriptor.
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn descriptor_type(&self) -> Option<DescriptorType> {
        self.descriptor_type
    }

    pub fn doc(&self) -> Option<&Doc> {
        self.doc.as_ref()
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Return type reference, usually a fragment pointing at a representation
    /// descriptor (e.g. `#orders-representation`).
    pub fn rt(&self) -> Option<&str> {
        self.rt.as_deref()
    }

    /// Nested descriptors in declaration order.
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }
}

/// Staging struct for a [`Descriptor`].
///
/// Each setter consumes and returns the builder. Dropping a builder without
/// calling [`DescriptorBuilder::build`] has no effect.
#[derive(Debug, Clone, Default)]
#[must_use = "a descriptor builder does nothing until `build` is called"]
pub struct DescriptorBuilder {
    id: Option<String>,
    name: Option<String>,
    descriptor_type: Option<DescriptorType>,
    doc: Option<Doc>,
    href: Option<String>,
    rt: Option<String>,
    descriptors: Vec<Descriptor>,
}

impl DescriptorBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn descriptor_type(mut self, descriptor_type: DescriptorType) -> Self {
        self.descriptor_type = Some(descriptor_type);
        self
    }

    /// Set the doc, or clear it when `None`.
    pub fn doc(mut self, doc: Option<Doc>) -> Self {
        self.doc = doc;
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn rt(mut self, rt: impl Into<String>) -> Self {
        self.rt = Some(rt.into());
        self
    }

    /// Append one nested descriptor.
    pub fn descriptor(mut self, descriptor: Descriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Append nested descriptors, keeping their order.
    pub fn descriptors(mut self, descriptors: impl IntoIterator<Item = Descriptor>) -> Self {
        self.descriptors.extend(descriptors);
        self
    }

    /// Finalize into an immutable [`Descriptor`].
    pub fn build(self) -> Descriptor {
        Descriptor {
            id: self.id,
            name: self.name,
            descriptor_type: self.descriptor_type,
            doc: self.doc,
            href: self.href,
            rt: self.rt,
            descriptors: self.descriptors,
        }
    }
}
