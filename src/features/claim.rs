//! Claim fan-out: notify the claimant and the submitter, then mark the task
//! message as assigned.

use tracing::{error, info, warn};

use super::identity::resolve_member_id;
use crate::core::models::{Claimant, MessageRef, UNKNOWN_SUBMITTER};
use crate::slack::SlackApi;
use crate::slack::blocks::MessageBlock;
use crate::slack::message_formatter::{
    ASSIGNED_FALLBACK, build_assigned_blocks, claimant_dm_text, extract_fields_text,
    extract_submitter, render_assignment_summary, submitter_dm_text,
};

/// One click of the claim button on a published task.
#[derive(Debug, Clone)]
pub struct ClaimEvent {
    pub claimant: Claimant,
    pub message: MessageRef,
    /// Blocks of the message as it was when clicked.
    pub blocks: Vec<MessageBlock>,
}

/// Outcome of one fan-out step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanOutReport {
    pub claimant_dm: Delivery,
    pub submitter_dm: Delivery,
    pub message_update: Delivery,
}

/// Handle a claim: re-read the task from the clicked message, resolve the
/// submitter and run the fan-out.
pub async fn handle_claim(api: &dyn SlackApi, event: &ClaimEvent) -> FanOutReport {
    let fields_text = extract_fields_text(&event.blocks);

    let submitter_id = match extract_submitter(&event.blocks) {
        Some(name) if name == UNKNOWN_SUBMITTER => {
            warn!(channel = %event.message.channel_id, ts = %event.message.ts, "Task was published without a submitter name");
            None
        }
        Some(name) => {
            let id = resolve_member_id(api, &name).await;
            if id.is_none() {
                warn!(submitter = %name, "Submitter not found in member directory");
            }
            id
        }
        None => {
            warn!(channel = %event.message.channel_id, ts = %event.message.ts, "Task message has no submitter footer");
            None
        }
    };

    notify(
        api,
        &event.claimant,
        &fields_text,
        submitter_id.as_deref(),
        &event.message,
    )
    .await
}

/// Run the three independent claim notifications concurrently.
///
/// A failure in one step never prevents the others from being attempted.
pub async fn notify(
    api: &dyn SlackApi,
    claimant: &Claimant,
    fields_text: &str,
    submitter_id: Option<&str>,
    message: &MessageRef,
) -> FanOutReport {
    let summary = render_assignment_summary(fields_text, &claimant.id);

    let claimant_dm = async {
        match api.send_dm(&claimant.id, &claimant_dm_text(&summary)).await {
            Ok(()) => Delivery::Sent,
            Err(e) => {
                error!(operation = "claimant_dm", user_id = %claimant.id, "Failed to notify claimant: {}", e);
                Delivery::Failed
            }
        }
    };

    let submitter_dm = async {
        let Some(submitter_id) = submitter_id.filter(|id| *id != claimant.id) else {
            return Delivery::Skipped;
        };
        match api
            .send_dm(submitter_id, &submitter_dm_text(&claimant.id, &summary))
            .await
        {
            Ok(()) => Delivery::Sent,
            Err(e) => {
                error!(operation = "submitter_dm", user_id = %submitter_id, claimant_id = %claimant.id, "Failed to notify submitter: {}", e);
                Delivery::Failed
            }
        }
    };

    let message_update = async {
        let blocks = build_assigned_blocks(&claimant.id);
        match api
            .update_message(&message.channel_id, &message.ts, ASSIGNED_FALLBACK, &blocks)
            .await
        {
            Ok(()) => Delivery::Sent,
            Err(e) => {
                error!(operation = "message_update", channel = %message.channel_id, ts = %message.ts, "Failed to mark task as assigned: {}", e);
                Delivery::Failed
            }
        }
    };

    let (claimant_dm, submitter_dm, message_update) =
        futures::join!(claimant_dm, submitter_dm, message_update);

    let report = FanOutReport {
        claimant_dm,
        submitter_dm,
        message_update,
    };
    info!(
        claimant_id = %claimant.id,
        claimant = %claimant.display_name,
        channel = %message.channel_id,
        ts = %message.ts,
        ?report,
        "Claim fan-out finished"
    );
    report
}
