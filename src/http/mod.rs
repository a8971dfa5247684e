//! HTTP relay subsystem.
//!
//! # Data Flow
//! ```text
//! Client request
//!     → server.rs (Axum setup, middleware stack)
//!     → cors.rs (headers attached to every response)
//!     → relay.rs (preflight, strip prefix, map route, allowlist gate,
//!       forward, relay status/content-type/body)
//!     → response.rs (structured error payloads)
//!     → Send to client
//! ```

pub mod cors;
pub mod relay;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::HttpServer;
