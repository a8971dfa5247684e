//! Relay handler.
//!
//! One pass per request, no retries, no state carried across requests:
//! answer preflight, strip the mount prefix, map the remainder to an
//! upstream target, gate on the allowlist, forward a bare GET, and
//! relay the upstream status/content-type/body verbatim.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::http::request::X_REQUEST_ID;
use crate::http::response as payload;
use crate::http::server::AppState;
use crate::routing::{map_route, strip_mount_prefix, MapOutcome};

const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Main relay handler, mounted on a catch-all route.
pub async fn relay_handler(State(state): State<AppState>, request: Request) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    // Preflight terminates immediately. The CORS layer attaches the
    // headers on the way out.
    if request.method() == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }

    let path = request.uri().path();
    let remainder = strip_mount_prefix(path, &state.mount_prefix);

    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        path = %path,
        "Relaying request"
    );

    let target = match map_route(&state.sources, remainder) {
        MapOutcome::Found(target) => target,
        MapOutcome::NotFound => {
            tracing::warn!(request_id = %request_id, path = %path, "No upstream mapping");
            return rejection(&state, remainder);
        }
    };

    if !state.allowlist.allows(&target) {
        tracing::warn!(
            request_id = %request_id,
            target = %target,
            "Target origin not in allowlist"
        );
        return rejection(&state, remainder);
    }

    // Always a bare GET: no inbound headers, no body. The inbound query
    // string is dropped, not forwarded; extension segments come only
    // from the path.
    let upstream = match state.client.get(&target).send().await {
        Ok(upstream) => upstream,
        Err(error) => {
            tracing::error!(
                request_id = %request_id,
                target = %target,
                error = %error,
                "Upstream fetch failed"
            );
            return payload::upstream_failure(error.to_string());
        }
    };

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| HeaderValue::from_str(value).ok())
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    // The whole body is buffered before anything is written back.
    match upstream.bytes().await {
        Ok(body) => {
            tracing::debug!(
                request_id = %request_id,
                status = %status,
                target = %target,
                "Upstream response relayed"
            );
            (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
        }
        Err(error) => {
            tracing::error!(
                request_id = %request_id,
                target = %target,
                error = %error,
                "Upstream body read failed"
            );
            payload::upstream_failure(error.to_string())
        }
    }
}

/// 400 rejection with usage guidance.
///
/// When the first path segment names a known source, that source's
/// example list is used; otherwise the registry-wide examples are.
fn rejection(state: &AppState, remainder: &str) -> Response {
    let source_id = remainder.split('/').find(|segment| !segment.is_empty());
    let examples = match source_id.and_then(|id| state.sources.get(id)) {
        Some(source) => source.examples.clone(),
        None => {
            let all = state.sources.usage_examples();
            if all.is_empty() {
                None
            } else {
                Some(all)
            }
        }
    };

    let hint = format!(
        "Use the format {}/{{source}}/{{endpoint}}",
        state.mount_prefix
    );
    payload::unroutable(hint, examples)
}
