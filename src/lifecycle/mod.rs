//! Lifecycle management.
//!
//! # Design Decisions
//! - Shutdown fans out over a broadcast channel so the server task and
//!   any test harness observe the same signal
//! - Ctrl+C is translated into that broadcast rather than handled ad hoc

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
