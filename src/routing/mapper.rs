//! Pure mapping from relay paths to upstream target URLs.

use crate::sources::SourceRegistry;

/// Outcome of a mapping attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapOutcome {
    /// Absolute upstream URL to forward to.
    Found(String),
    /// No source/route combination matched the path.
    NotFound,
}

/// Strip the literal mount prefix from a request path.
///
/// A path that does not carry the prefix passes through unchanged, so
/// `/komikstation/home` routes the same as `/proxy/komikstation/home`.
pub fn strip_mount_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    path.strip_prefix(prefix).unwrap_or(path)
}

/// Map a prefix-stripped request path to an upstream target URL.
///
/// The path is split on `/` with empty segments discarded, yielding
/// `[source, action, extra...]`. The query string never reaches this
/// function; extension segments come only from the path itself.
pub fn map_route(registry: &SourceRegistry, path: &str) -> MapOutcome {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());

    let (source_id, action) = match (segments.next(), segments.next()) {
        (Some(source_id), Some(action)) => (source_id, action),
        _ => return MapOutcome::NotFound,
    };

    let source = match registry.get(source_id) {
        Some(source) => source,
        None => return MapOutcome::NotFound,
    };

    let base_path = match source.base_path(action) {
        Some(base_path) => base_path,
        None => return MapOutcome::NotFound,
    };

    let extra: Vec<&str> = segments.collect();
    let target = if source.is_extensible(action) && !extra.is_empty() {
        format!(
            "{}{}/{}",
            source.upstream_origin,
            base_path,
            extra.join("/")
        )
    } else {
        // Non-extensible routes ignore any trailing segments.
        format!("{}{}", source.upstream_origin, base_path)
    };

    MapOutcome::Found(target)
}
