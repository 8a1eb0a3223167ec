//! Handler for Slack interactive components.
//!
//! One endpoint receives every interaction. Each request is acknowledged
//! without awaiting the outbound calls it triggers, which run on a detached
//! task:
//! - `view_submission` of the task form publishes the task
//! - `block_actions` on the claim button runs the claim fan-out
//! - `shortcut` / `message_action` for the task shortcut opens the form

use axum::response::Response;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, info_span, warn};
use uuid::Uuid;

use super::envelope::InteractionEnvelope;
use super::helpers::{ok_empty, ok_modal_clear, spawn_background};
use super::parsing::parse_interactive_payload;
use super::view_submission::build_task_from_view;
use crate::core::models::{Claimant, MessageRef, TaskSubmission};
use crate::features::claim::{ClaimEvent, handle_claim};
use crate::features::publish::publish_task;
use crate::slack::SlackApi;
use crate::slack::message_formatter::CLAIM_ACTION_ID;
use crate::slack::modal_builder::{NEW_TASK_SHORTCUT_ID, TASK_FORM_CALLBACK_ID, build_task_modal};

/// What an interaction asks the service to do.
#[derive(Debug, Clone)]
pub enum Route {
    Publish(TaskSubmission),
    Claim(ClaimEvent),
    OpenForm { trigger_id: String },
    Ignored(String),
}

impl Route {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Route::Publish(_) => "publish",
            Route::Claim(_) => "claim",
            Route::OpenForm { .. } => "open_form",
            Route::Ignored(_) => "ignored",
        }
    }
}

/// The synchronous acknowledgment plus the detached work it started, if any.
pub struct Dispatch {
    pub response: Response,
    pub background: Option<JoinHandle<()>>,
}

// ============================================================================
// Classification
// ============================================================================

fn classify_claim(envelope: InteractionEnvelope) -> Route {
    let InteractionEnvelope::BlockActions {
        user,
        actions,
        message,
        channel,
        container,
    } = envelope
    else {
        return Route::Ignored("not a block action".to_string());
    };

    let claimed = actions
        .first()
        .is_some_and(|a| a.action_id == CLAIM_ACTION_ID);
    if !claimed {
        let action_id = actions.first().map_or("", |a| a.action_id.as_str());
        return Route::Ignored(format!("unhandled action_id '{action_id}'"));
    }

    let Some(message) = message else {
        return Route::Ignored("claim without message".to_string());
    };

    let channel_id = channel
        .map(|c| c.id)
        .filter(|id| !id.is_empty())
        .or_else(|| container.and_then(|c| c.channel_id))
        .unwrap_or_default();

    if user.id.is_empty() || channel_id.is_empty() || message.ts.is_empty() {
        return Route::Ignored("claim missing user, channel or message ts".to_string());
    }

    let display_name = user.display_name().unwrap_or(&user.id).to_string();

    Route::Claim(ClaimEvent {
        claimant: Claimant {
            id: user.id,
            display_name,
        },
        message: MessageRef {
            channel_id,
            ts: message.ts,
        },
        blocks: message.blocks,
    })
}

fn classify_shortcut(callback_id: &str, trigger_id: String) -> Route {
    if callback_id != NEW_TASK_SHORTCUT_ID {
        return Route::Ignored(format!("unhandled shortcut '{callback_id}'"));
    }
    if trigger_id.is_empty() {
        return Route::Ignored("shortcut without trigger_id".to_string());
    }
    Route::OpenForm { trigger_id }
}

/// Decide what an interaction asks for. Pure: no I/O happens here.
#[must_use]
pub fn classify(envelope: InteractionEnvelope) -> Route {
    match envelope {
        InteractionEnvelope::ViewSubmission { user, view } => {
            if view.callback_id == TASK_FORM_CALLBACK_ID {
                Route::Publish(build_task_from_view(&user, &view))
            } else {
                Route::Ignored(format!("unhandled view '{}'", view.callback_id))
            }
        }
        envelope @ InteractionEnvelope::BlockActions { .. } => classify_claim(envelope),
        InteractionEnvelope::Shortcut {
            callback_id,
            trigger_id,
        }
        | InteractionEnvelope::MessageAction {
            callback_id,
            trigger_id,
        } => classify_shortcut(&callback_id, trigger_id),
        InteractionEnvelope::Other => Route::Ignored("unhandled interaction type".to_string()),
    }
}

// ============================================================================
// Background Phase
// ============================================================================

/// Perform the outbound calls for a route. Never fails; every error is logged.
pub async fn run_route(api: Arc<dyn SlackApi>, route: Route) {
    match route {
        Route::Publish(task) => {
            if let Err(e) = publish_task(api.as_ref(), &task).await {
                error!(operation = "publish", channel = %task.channel, submitter = %task.submitter, "Failed to publish task: {}", e);
            }
        }
        Route::Claim(event) => {
            handle_claim(api.as_ref(), &event).await;
        }
        Route::OpenForm { trigger_id } => {
            if let Err(e) = api.open_view(&trigger_id, &build_task_modal()).await {
                error!(operation = "views.open", "Failed to open task form: {}", e);
            }
        }
        Route::Ignored(_) => {}
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

/// Handle an interactive request body from Slack.
///
/// Parsing and classification happen inline. Outbound work is spawned onto a
/// detached task that the acknowledgment never awaits; on a multi-threaded
/// runtime that task may start before the response is written.
pub fn handle_interactive(api: &Arc<dyn SlackApi>, body: &str) -> Dispatch {
    let correlation_id = Uuid::new_v4().to_string();

    #[cfg(feature = "debug-logs")]
    tracing::debug!(correlation_id = %correlation_id, body = %body, "Interactive request body");

    let envelope = match parse_interactive_payload(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            error!(correlation_id = %correlation_id, "Malformed interactive payload: {}", e);
            return Dispatch {
                response: ok_empty(),
                background: None,
            };
        }
    };

    let envelope_kind = envelope.kind();
    let route = classify(envelope);
    info!(
        correlation_id = %correlation_id,
        envelope = envelope_kind,
        route = route.kind(),
        "Interaction received"
    );

    let response = match &route {
        Route::Publish(_) => ok_modal_clear(),
        Route::Ignored(reason) => {
            warn!(correlation_id = %correlation_id, reason = %reason, "Interaction ignored");
            return Dispatch {
                response: ok_empty(),
                background: None,
            };
        }
        _ => ok_empty(),
    };

    let span = info_span!("interaction", correlation_id = %correlation_id, route = route.kind());
    let background = spawn_background(span, run_route(Arc::clone(api), route));

    Dispatch {
        response,
        background: Some(background),
    }
}
