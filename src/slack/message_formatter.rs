//! Rendering of published task messages and the claim notifications.
//!
//! The posted message is the only record of a task once it is published, so
//! the footer format written by [`render_footer`] must stay readable by
//! [`extract_submitter`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Value, json};

use super::blocks::MessageBlock;
use crate::core::models::TaskSubmission;

/// `action_id` of the claim button.
pub const CLAIM_ACTION_ID: &str = "assign_task";

/// First line of the summary section of an unclaimed task.
pub const NEW_TASK_HEADING: &str = "🆕 *New task available:*";

/// Fallback text for clients that cannot render blocks.
pub const NEW_TASK_FALLBACK: &str = "New task published";
pub const ASSIGNED_FALLBACK: &str = "Task assigned";

const FOOTER_PREFIX: &str = "Published by: ";

static FOOTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Published by: \*(.+)\*$").expect("static regex compile"));

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Render the task fields, one `*Label:* value` line each.
///
/// Issue and estimate lines are left out entirely when blank.
#[must_use]
pub fn render_task_fields(task: &TaskSubmission) -> String {
    let mut lines = vec![
        format!("*Client:* {}", task.client),
        format!("*Project:* {}", task.project),
    ];
    if let Some(issue) = present(task.issue.as_deref()) {
        lines.push(format!("*Issue:* {issue}"));
    }
    lines.push(format!("*Description:* {}", task.description));
    lines.push(format!("*Urgency:* {}", task.urgency));
    if let Some(estimate) = present(task.estimate.as_deref()) {
        lines.push(format!("*Estimate:* {estimate}"));
    }
    lines.join("\n")
}

#[must_use]
pub fn render_footer(submitter: &str) -> String {
    format!("{FOOTER_PREFIX}*{submitter}*")
}

/// Build the blocks of a freshly published task: summary, claim button, footer.
#[must_use]
pub fn build_task_blocks(task: &TaskSubmission) -> Value {
    json!([
        {
            "type": "section",
            "text": {
                "type": "mrkdwn",
                "text": format!("{NEW_TASK_HEADING}\n{}", render_task_fields(task))
            }
        },
        {
            "type": "actions",
            "elements": [
                {
                    "type": "button",
                    "text": { "type": "plain_text", "text": "Claim task" },
                    "style": "primary",
                    "action_id": CLAIM_ACTION_ID
                }
            ]
        },
        {
            "type": "context",
            "elements": [
                { "type": "mrkdwn", "text": render_footer(&task.submitter) }
            ]
        }
    ])
}

/// Recover the submitter's display name from a published task's footer.
///
/// Returns `None` when the message has no footer in the expected format.
#[must_use]
pub fn extract_submitter(blocks: &[MessageBlock]) -> Option<String> {
    blocks
        .iter()
        .filter(|b| b.is_context())
        .flat_map(|b| b.elements.iter())
        .filter_map(|e| e.text.as_ref())
        .find_map(|text| {
            FOOTER_RE
                .captures(text.as_str().trim())
                .map(|cap| cap[1].to_string())
        })
}

/// Recover the rendered field lines from a published task's summary section.
#[must_use]
pub fn extract_fields_text(blocks: &[MessageBlock]) -> String {
    blocks
        .iter()
        .filter(|b| b.is_section())
        .filter_map(|b| b.text.as_ref())
        .map(|t| {
            t.text
                .strip_prefix(NEW_TASK_HEADING)
                .map_or(t.text.as_str(), |rest| rest.trim_start_matches('\n'))
        })
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary shared by both claim notifications.
#[must_use]
pub fn render_assignment_summary(fields_text: &str, claimant_id: &str) -> String {
    format!("📌 *Assigned task summary:*\n{fields_text}\n👤 Assigned to: <@{claimant_id}>")
}

#[must_use]
pub fn claimant_dm_text(summary: &str) -> String {
    format!("✅ You claimed this task:\n{summary}")
}

#[must_use]
pub fn submitter_dm_text(claimant_id: &str, summary: &str) -> String {
    format!("👋 <@{claimant_id}> claimed a task you published:\n{summary}")
}

/// Replacement body for a claimed task. Carries no claim button.
#[must_use]
pub fn build_assigned_blocks(claimant_id: &str) -> Value {
    json!([
        {
            "type": "section",
            "text": {
                "type": "mrkdwn",
                "text": format!("✅ This task was assigned to <@{claimant_id}>.")
            }
        }
    ])
}
