//! Absolute URI building.
//!
//! [`BaseUri`] captures the URI of the current request and derives child
//! URIs from it by appending path segments.

use crate::{AlpsError, AlpsResult};
use std::fmt;
use url::Url;

#[cfg(test)]
#[path = "uri_tests.rs"]
mod tests;

/// An absolute, hierarchical URI that path segments can be appended to.
///
/// Query strings and fragments are dropped on construction: children of the
/// current request URI never inherit them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUri(Url);

impl BaseUri {
    /// Parse an absolute URI string.
    ///
    /// # Errors
    ///
    /// Returns `AlpsError::InvalidBaseUri` when the value is not an absolute
    /// URI or cannot carry path segments (e.g. `mailto:`).
    pub fn parse(uri: &str) -> AlpsResult<Self> {
        let url = Url::parse(uri).map_err(|e| AlpsError::InvalidBaseUri {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_url(url)
    }

    /// Wrap an already parsed URL.
    pub fn from_url(mut url: Url) -> AlpsResult<Self> {
        if url.cannot_be_a_base() {
            return Err(AlpsError::InvalidBaseUri {
                uri: url.to_string(),
                reason: "URI cannot carry path segments".to_string(),
            });
        }

        url.set_query(None);
        url.set_fragment(None);

        Ok(Self(url))
    }

    /// Return a new URI with `segment` appended as the last path segment.
    ///
    /// A trailing slash on the base is collapsed, so `http://host/alps/` and
    /// `http://host/alps` both yield `http://host/alps/<segment>`.
    pub fn path_segment(&self, segment: &str) -> BaseUri {
        let mut url = self.0.clone();
        // cannot_be_a_base was rejected in from_url
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        BaseUri(url)
    }

    /// Render as an absolute URI string.
    pub fn to_uri_string(&self) -> String {
        self.0.as_str().to_string()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for BaseUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
