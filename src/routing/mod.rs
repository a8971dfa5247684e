//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → strip mount prefix
//!     → mapper.rs (split segments, consult source registry)
//!     → Return: Found(upstream URL) or NotFound
//! ```
//!
//! # Design Decisions
//! - Mapping is a pure function over the immutable source registry
//! - Explicit two-variant outcome rather than a nullable sentinel
//! - No normalization beyond segment splitting: extension tails are
//!   appended verbatim, exactly as the client supplied them

pub mod mapper;

pub use mapper::{map_route, strip_mount_prefix, MapOutcome};
