use tracing::warn;

use super::envelope::{SlackUser, View};
pub use crate::core::models::UNKNOWN_SUBMITTER;
use crate::core::models::{TaskSubmission, Urgency};
use crate::slack::modal_builder::{
    BLOCK_CHANNEL, BLOCK_CLIENT, BLOCK_DESCRIPTION, BLOCK_ESTIMATE, BLOCK_ISSUE, BLOCK_PROJECT,
    BLOCK_URGENCY, INPUT_ACTION_ID,
};
use crate::utils::normalize_channel;

fn text_value(view: &View, block_id: &str) -> Option<String> {
    view.state
        .input(block_id, INPUT_ACTION_ID)
        .and_then(|input| input.value.as_deref())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Build a `TaskSubmission` from a task form submission.
///
/// Missing required fields become empty strings and a missing urgency
/// becomes `Medium`; blank optional fields become `None`.
#[must_use]
pub fn build_task_from_view(user: &SlackUser, view: &View) -> TaskSubmission {
    let urgency = match view
        .state
        .input(BLOCK_URGENCY, INPUT_ACTION_ID)
        .and_then(|input| input.selected_option.as_ref())
    {
        Some(opt) => Urgency::from_value(&opt.value).unwrap_or_else(|| {
            warn!(value = %opt.value, default = %Urgency::default(), "Unknown urgency option, using default");
            Urgency::default()
        }),
        None => Urgency::default(),
    };

    let channel = view
        .state
        .input(BLOCK_CHANNEL, INPUT_ACTION_ID)
        .and_then(|input| input.value.as_deref())
        .map(normalize_channel)
        .unwrap_or_default();

    TaskSubmission {
        client: text_value(view, BLOCK_CLIENT).unwrap_or_default(),
        project: text_value(view, BLOCK_PROJECT).unwrap_or_default(),
        issue: text_value(view, BLOCK_ISSUE),
        description: text_value(view, BLOCK_DESCRIPTION).unwrap_or_default(),
        urgency,
        estimate: text_value(view, BLOCK_ESTIMATE),
        channel,
        submitter: user
            .display_name()
            .unwrap_or(UNKNOWN_SUBMITTER)
            .to_string(),
    }
}
