//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate, nothing else: the relay
//!   deliberately carries no metrics endpoint
//! - Level comes from config, with `RUST_LOG` taking precedence

pub mod logging;
