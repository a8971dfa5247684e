//! Comic source relay.
//!
//! Accepts browser requests at a fixed mount path, maps them onto a
//! fixed upstream comic API via compiled-in per-source route tables,
//! forwards the GET, and relays the upstream response back with
//! permissive CORS headers attached.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 COMIC RELAY                   │
//!                    │                                               │
//!  Client Request    │  ┌─────────┐   ┌─────────┐   ┌────────────┐  │
//!  ──────────────────┼─▶│  http   │──▶│ routing │──▶│  security  │  │
//!                    │  │ server  │   │ mapper  │   │ allowlist  │  │
//!                    │  └─────────┘   └─────────┘   └─────┬──────┘  │
//!                    │                                     │         │
//!  Client Response   │  ┌─────────┐                       ▼         │
//!  ◀─────────────────┼──│  relay  │◀──────────────── upstream GET ──┼──▶ Upstream
//!                    │  └─────────┘                                  │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │        Cross-Cutting Concerns           │ │
//!                    │  │  config │ sources │ observability │     │ │
//!                    │  │         lifecycle (startup/shutdown)    │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;
pub mod sources;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use sources::{SourceConfig, SourceRegistry};
