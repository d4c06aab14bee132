//! ALPS documents.
//!
//! An [`Alps`] document is an ordered sequence of [`Descriptor`]s with a
//! version marker and optional documentation. Documents are assembled fresh
//! for every request and never mutated afterwards.

use crate::descriptor::{Descriptor, Doc};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;

/// ALPS version emitted in every document.
pub const ALPS_VERSION: &str = "1.0";

/// Media type for ALPS documents rendered as JSON.
pub const ALPS_JSON_MEDIA_TYPE: &str = "application/alps+json";

/// A complete ALPS document.
///
/// Serializes with the `alps` root member:
///
/// ```json
/// { "alps": { "version": "1.0", "descriptor": [ ... ] } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alps {
    alps: AlpsBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AlpsBody {
    version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    doc: Option<Doc>,

    #[serde(default, rename = "descriptor")]
    descriptors: Vec<Descriptor>,
}

impl Alps {
    /// Start building a new document.
    pub fn builder() -> AlpsBuilder {
        AlpsBuilder::default()
    }

    pub fn version(&self) -> &str {
        &self.alps.version
    }

    pub fn doc(&self) -> Option<&Doc> {
        self.alps.doc.as_ref()
    }

    /// Top-level descriptors in document order.
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.alps.descriptors
    }
}

/// Staging struct for an [`Alps`] document.
#[derive(Debug, Clone, Default)]
#[must_use = "a document builder does nothing until `build` is called"]
pub struct AlpsBuilder {
    doc: Option<Doc>,
    descriptors: Vec<Descriptor>,
}

impl AlpsBuilder {
    pub fn doc(mut self, doc: Option<Doc>) -> Self {
        self.doc = doc;
        self
    }

    /// Append descriptors, keeping their order.
    pub fn descriptors(mut self, descriptors: impl IntoIterator<Item = Descriptor>) -> Self {
        self.descriptors.extend(descriptors);
        self
    }

    pub fn build(self) -> Alps {
        Alps {
            alps: AlpsBody {
                version: ALPS_VERSION.to_string(),
                doc: self.doc,
                descriptors: self.descriptors,
            },
        }
    }
}
