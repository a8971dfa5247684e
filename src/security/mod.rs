//! Security subsystem.
//!
//! # Design Decisions
//! - The allowlist is an independent gate after route mapping: even
//!   though the mapper can only emit origins taken from the registry,
//!   the target is re-checked so future route-table edits cannot
//!   silently widen the forwarding surface

pub mod allowlist;

pub use allowlist::Allowlist;
