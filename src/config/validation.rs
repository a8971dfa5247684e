//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic ones. Returns all
//! violations, not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RelayConfig;

/// A single semantic violation in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Bind address does not parse as a socket address.
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    /// Mount prefix must be a non-root absolute path segment.
    #[error("invalid mount prefix '{0}': must start with '/' and not be '/'")]
    InvalidMountPrefix(String),

    /// Request timeout of zero would reject every request.
    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let prefix = &config.relay.mount_prefix;
    if !prefix.starts_with('/') || prefix.len() < 2 {
        errors.push(ValidationError::InvalidMountPrefix(prefix.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
