//! Structured error payloads.
//!
//! Two shapes leave this module: a 400 rejection when a request cannot
//! be mapped to a permitted upstream target, and a 500 failure when the
//! upstream fetch itself dies. Upstream application errors (non-2xx
//! statuses) are never wrapped; they relay verbatim.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error label for requests with no permitted upstream mapping.
pub const UNROUTABLE_ERROR: &str = "Unknown endpoint or upstream not allowed.";

/// Error label for failed upstream fetches.
pub const UPSTREAM_FETCH_ERROR: &str = "Failed to fetch from upstream.";

/// Body of a 400 rejection.
#[derive(Debug, Serialize)]
pub struct RejectionBody {
    pub success: bool,
    pub error: String,
    pub hint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

/// Body of a 500 upstream-failure response.
#[derive(Debug, Serialize)]
pub struct UpstreamFailureBody {
    pub success: bool,
    pub error: String,
    pub details: String,
}

/// 400 response for an unroutable or disallowed request.
pub fn unroutable(hint: String, examples: Option<Vec<String>>) -> Response {
    let body = RejectionBody {
        success: false,
        error: UNROUTABLE_ERROR.to_string(),
        hint,
        examples,
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// 500 response for a failed upstream fetch.
///
/// The failure message is relayed as-is in `details`.
pub fn upstream_failure(details: String) -> Response {
    let body = UpstreamFailureBody {
        success: false,
        error: UPSTREAM_FETCH_ERROR.to_string(),
        details,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
