//! Upstream origin allowlist.

use std::collections::BTreeSet;

use url::Url;

use crate::sources::SourceRegistry;

/// Set of upstream origins requests may be forwarded to.
///
/// Matching is an exact string comparison against the serialized
/// origin (scheme + host + explicit non-default port). No wildcards,
/// no prefix matching.
#[derive(Debug, Clone)]
pub struct Allowlist {
    origins: BTreeSet<String>,
}

impl Allowlist {
    /// Build an allowlist from explicit origin strings.
    pub fn new(origins: impl IntoIterator<Item = String>) -> Self {
        Self {
            origins: origins.into_iter().collect(),
        }
    }

    /// Build the allowlist from every upstream origin in the registry.
    pub fn from_registry(registry: &SourceRegistry) -> Self {
        Self {
            origins: registry.origins(),
        }
    }

    /// Whether a target URL's origin is permitted.
    ///
    /// A URL that fails to parse is never permitted.
    pub fn allows(&self, target: &str) -> bool {
        match Url::parse(target) {
            Ok(url) => self.origins.contains(&url.origin().ascii_serialization()),
            Err(_) => false,
        }
    }

    /// Number of permitted origins.
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    /// Whether the allowlist permits nothing.
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}
