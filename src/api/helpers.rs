//! Common helper functions for API handlers.
//!
//! This module provides response builders and the detached background
//! runner shared by the slash command and interaction handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::FutureExt;
use serde_json::json;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tokio::task::JoinHandle;
use tracing::{Instrument, Span, error};

// ============================================================================
// Response Builders
// ============================================================================

/// Returns a 200 OK response with an empty body.
#[must_use]
pub fn ok_empty() -> Response {
    StatusCode::OK.into_response()
}

/// Returns a 200 OK response with a plain-text body shown to the invoking user.
#[must_use]
pub fn ok_text(text: &str) -> Response {
    (StatusCode::OK, text.to_string()).into_response()
}

/// Returns a 200 OK response that closes the submitted modal.
#[must_use]
pub fn ok_modal_clear() -> Response {
    (StatusCode::OK, Json(json!({ "response_action": "clear" }))).into_response()
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

// ============================================================================
// Background Work
// ============================================================================

/// Spawn work that must not delay the Slack acknowledgment.
///
/// The task runs inside `span` and nothing it does, panics included, reaches
/// the already-sent response; failures end up in the logs only.
pub fn spawn_background<F>(span: Span, work: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(
        async move {
            if AssertUnwindSafe(work).catch_unwind().await.is_err() {
                error!("Background interaction work panicked");
            }
        }
        .instrument(span),
    )
}
