//! HTTP surface - thin router that delegates to specialized handlers.
//!
//! This module handles:
//! - Health check (`GET /`)
//! - Request validation (Slack signature, when a signing secret is configured)
//! - Slash commands (delegated to `slash_handler`)
//! - Interactive components (delegated to `interactive_handler`)

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::routing::{get, post};
use std::sync::Arc;
use tracing::error;

use super::{helpers, interactive_handler, signature, slash_handler};
use crate::core::config::AppConfig;
use crate::slack::SlackApi;

pub const COMMANDS_PATH: &str = "/slack/commands";
pub const INTERACTIONS_PATH: &str = "/slack/interactions";
pub const HEALTH_BODY: &str = "Server running.";

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub slack: Arc<dyn SlackApi>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, slack: Arc<dyn SlackApi>) -> Self {
        Self {
            config: Arc::new(config),
            slack,
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route(COMMANDS_PATH, post(slash_command))
        .route(INTERACTIONS_PATH, post(interactions))
        .with_state(state)
}

async fn health() -> &'static str {
    HEALTH_BODY
}

async fn slash_command(State(state): State<AppState>, headers: HeaderMap, body: String) -> Response {
    if let Err(response) = verify_signature(&body, &headers, &state.config) {
        return response;
    }
    slash_handler::handle_slash_command(&state.slack, &body).await
}

async fn interactions(State(state): State<AppState>, headers: HeaderMap, body: String) -> Response {
    if let Err(response) = verify_signature(&body, &headers, &state.config) {
        return response;
    }
    // The background handle is dropped: the work stays detached from the response.
    interactive_handler::handle_interactive(&state.slack, &body).response
}

// ============================================================================
// Request Validation Helpers
// ============================================================================

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[allow(clippy::result_large_err)]
fn verify_signature(body: &str, headers: &HeaderMap, config: &AppConfig) -> Result<(), Response> {
    let Some(secret) = config.slack_signing_secret.as_deref() else {
        return Ok(());
    };

    let Some(sig) = header_str(headers, "X-Slack-Signature") else {
        error!("Missing X-Slack-Signature header");
        return Err(helpers::err_response(
            StatusCode::UNAUTHORIZED,
            "Missing X-Slack-Signature header",
        ));
    };

    let Some(timestamp) = header_str(headers, "X-Slack-Request-Timestamp") else {
        error!("Missing X-Slack-Request-Timestamp header");
        return Err(helpers::err_response(
            StatusCode::UNAUTHORIZED,
            "Missing X-Slack-Request-Timestamp header",
        ));
    };

    if !signature::verify_slack_signature(body, timestamp, sig, secret) {
        return Err(helpers::err_response(
            StatusCode::UNAUTHORIZED,
            "Invalid Slack signature",
        ));
    }

    Ok(())
}
