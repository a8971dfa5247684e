//! Comic source registry.
//!
//! # Data Flow
//! ```text
//! Registry construction (at startup):
//!     built-in source tables
//!     → SourceConfig per source (route table + extensible set)
//!     → Freeze as immutable SourceRegistry
//!     → shared via Arc with the relay handler
//! ```
//!
//! # Design Decisions
//! - Route tables are compiled-in literals mirroring the upstream API;
//!   there is no runtime mutation path and no configuration surface for them
//! - BTreeMap/BTreeSet keep iteration deterministic for diagnostics
//! - Every source pins exactly one upstream origin

use std::collections::{BTreeMap, BTreeSet};

/// Upstream origin shared by all built-in comic sources.
pub const DEFAULT_UPSTREAM_ORIGIN: &str = "https://www.sankavollerei.com";

/// Configuration for a single comic source.
///
/// Maps route names (`home`, `search`, ...) to absolute upstream paths.
/// Routes in the extensible set accept a free-form trailing tail
/// (slug, search term, page token) appended verbatim to the base path.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Origin (scheme + host) requests for this source are forwarded to.
    pub upstream_origin: String,

    /// Route name → upstream base path, rooted at `upstream_origin`.
    routes: BTreeMap<String, String>,

    /// Route names that accept extra trailing path segments.
    extensible: BTreeSet<String>,

    /// Literal example paths shown in rejection responses.
    /// Not every source ships these.
    pub examples: Option<Vec<String>>,
}

impl SourceConfig {
    /// Create a source from its route table.
    pub fn new(
        upstream_origin: impl Into<String>,
        routes: impl IntoIterator<Item = (String, String)>,
        extensible: impl IntoIterator<Item = String>,
        examples: Option<Vec<String>>,
    ) -> Self {
        Self {
            upstream_origin: upstream_origin.into(),
            routes: routes.into_iter().collect(),
            extensible: extensible.into_iter().collect(),
            examples,
        }
    }

    /// Upstream base path for a route name, if the route exists.
    pub fn base_path(&self, action: &str) -> Option<&str> {
        self.routes.get(action).map(String::as_str)
    }

    /// Whether a route accepts extra trailing segments.
    pub fn is_extensible(&self, action: &str) -> bool {
        self.extensible.contains(action)
    }

    /// Number of routes this source exposes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

/// Immutable registry of comic sources, keyed by source id.
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    sources: BTreeMap<String, SourceConfig>,
}

impl SourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry of the built-in comic sources.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.insert(
            "komikstation",
            SourceConfig::new(
                DEFAULT_UPSTREAM_ORIGIN,
                comic_routes(
                    "komikstation",
                    &[
                        "home",
                        "popular",
                        "recommendation",
                        "top-weekly",
                        "ongoing",
                        "search",
                        "manga",
                        "chapter",
                    ],
                ),
                route_names(&["search", "manga", "chapter", "ongoing", "popular"]),
                Some(vec![
                    "/proxy/komikstation/home".to_string(),
                    "/proxy/komikstation/popular?page=1".to_string(),
                    "/proxy/komikstation/manga/solo-leveling".to_string(),
                ]),
            ),
        );

        registry.insert(
            "kiryuu",
            SourceConfig::new(
                DEFAULT_UPSTREAM_ORIGIN,
                comic_routes(
                    "kiryuu",
                    &[
                        "home", "popular", "ongoing", "search", "manga", "chapter", "genre",
                    ],
                ),
                route_names(&["search", "manga", "chapter", "genre", "popular"]),
                Some(vec![
                    "/proxy/kiryuu/home".to_string(),
                    "/proxy/kiryuu/search/martial".to_string(),
                    "/proxy/kiryuu/manga/one-piece".to_string(),
                ]),
            ),
        );

        registry.insert(
            "komikindo",
            SourceConfig::new(
                DEFAULT_UPSTREAM_ORIGIN,
                comic_routes(
                    "komikindo",
                    &[
                        "home",
                        "popular",
                        "recommendation",
                        "ongoing",
                        "search",
                        "manga",
                        "chapter",
                    ],
                ),
                route_names(&["search", "manga", "chapter", "ongoing"]),
                None,
            ),
        );

        registry
    }

    /// Add a source to the registry.
    pub fn insert(&mut self, id: impl Into<String>, source: SourceConfig) {
        self.sources.insert(id.into(), source);
    }

    /// Look up a source by id.
    pub fn get(&self, id: &str) -> Option<&SourceConfig> {
        self.sources.get(id)
    }

    /// Distinct upstream origins across all sources.
    pub fn origins(&self) -> BTreeSet<String> {
        self.sources
            .values()
            .map(|source| source.upstream_origin.clone())
            .collect()
    }

    /// Example paths across all sources that ship them, for diagnostics
    /// when no source matched the request.
    pub fn usage_examples(&self) -> Vec<String> {
        self.sources
            .values()
            .filter_map(|source| source.examples.as_ref())
            .flatten()
            .cloned()
            .collect()
    }
}

/// Route table for a comic source: each name maps to `/comic/{source}/{name}`.
fn comic_routes(source: &str, names: &[&str]) -> Vec<(String, String)> {
    names
        .iter()
        .map(|name| (name.to_string(), format!("/comic/{}/{}", source, name)))
        .collect()
}

fn route_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sources_present() {
        let registry = SourceRegistry::builtin();
        assert!(registry.get("komikstation").is_some());
        assert!(registry.get("kiryuu").is_some());
        assert!(registry.get("komikindo").is_some());
        assert!(registry.get("mangadex").is_none());
    }

    #[test]
    fn test_komikstation_route_table() {
        let registry = SourceRegistry::builtin();
        let source = registry.get("komikstation").unwrap();

        assert_eq!(source.route_count(), 8);
        assert_eq!(
            source.base_path("home"),
            Some("/comic/komikstation/home")
        );
        assert_eq!(
            source.base_path("top-weekly"),
            Some("/comic/komikstation/top-weekly")
        );
        assert_eq!(source.base_path("latest"), None);

        assert!(source.is_extensible("manga"));
        assert!(source.is_extensible("search"));
        assert!(!source.is_extensible("home"));
        assert!(!source.is_extensible("top-weekly"));
    }

    #[test]
    fn test_examples_asymmetry() {
        let registry = SourceRegistry::builtin();
        assert!(registry.get("komikstation").unwrap().examples.is_some());
        assert!(registry.get("kiryuu").unwrap().examples.is_some());
        assert!(registry.get("komikindo").unwrap().examples.is_none());
    }

    #[test]
    fn test_single_builtin_origin() {
        let registry = SourceRegistry::builtin();
        let origins = registry.origins();
        assert_eq!(origins.len(), 1);
        assert!(origins.contains(DEFAULT_UPSTREAM_ORIGIN));
    }
}
