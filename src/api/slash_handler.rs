//! Handler for the task slash command.
//!
//! The command only opens the task form; publishing happens when the form is
//! submitted through the interactions endpoint.

use axum::response::Response;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use super::helpers::{ok_empty, ok_text};
use super::parsing::parse_slash_command;
use crate::slack::SlackApi;
use crate::slack::modal_builder::build_task_modal;

/// Text shown to the invoking user when the form cannot be opened.
pub const OPEN_FORM_FAILED: &str = "Could not open the form.";

/// How long the command waits on `views.open` before acknowledging anyway.
/// Slack gives the whole request three seconds.
pub const OPEN_FORM_ACK_BUDGET_MS: u64 = 2000;

/// Handle a slash command body from Slack.
///
/// Opens the task form with the command's trigger handle. A failure that
/// comes back within the ack budget is reported to the user as plain text;
/// a slower call keeps running detached and the command is acknowledged.
pub async fn handle_slash_command(api: &Arc<dyn SlackApi>, body: &str) -> Response {
    let command = match parse_slash_command(body) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to parse slash command: {}", e);
            return ok_text(OPEN_FORM_FAILED);
        }
    };

    if command.trigger_id.is_empty() {
        error!(command = %command.command, user_id = %command.user_id, "Slash command without trigger_id");
        return ok_text(OPEN_FORM_FAILED);
    }

    info!(command = %command.command, user_id = %command.user_id, channel = %command.channel_id, "Opening task form");

    let api = Arc::clone(api);
    let trigger_id = command.trigger_id;
    let open = tokio::spawn(async move {
        let result = api.open_view(&trigger_id, &build_task_modal()).await;
        if let Err(e) = &result {
            error!(operation = "views.open", "Failed to open task form: {}", e);
        }
        result
    });

    match tokio::time::timeout(Duration::from_millis(OPEN_FORM_ACK_BUDGET_MS), open).await {
        Ok(Ok(Ok(()))) => ok_empty(),
        Ok(Ok(Err(_))) => ok_text(OPEN_FORM_FAILED),
        Ok(Err(join_err)) => {
            error!("views.open task failed: {}", join_err);
            ok_text(OPEN_FORM_FAILED)
        }
        Err(_) => {
            warn!(
                budget_ms = OPEN_FORM_ACK_BUDGET_MS,
                "views.open still pending, acknowledging command"
            );
            ok_empty()
        }
    }
}
