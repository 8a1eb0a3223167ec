//! Typed interactive payloads.
//!
//! Slack posts every interaction to one endpoint with a JSON `payload`
//! discriminated by `type`. The payload is decoded into [`InteractionEnvelope`]
//! once at the boundary; the rest of the crate never touches raw JSON maps.

use serde::Deserialize;
use std::collections::HashMap;

use crate::slack::blocks::MessageBlock;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionEnvelope {
    ViewSubmission {
        #[serde(default)]
        user: SlackUser,
        view: View,
    },
    BlockActions {
        #[serde(default)]
        user: SlackUser,
        #[serde(default)]
        actions: Vec<Action>,
        #[serde(default)]
        message: Option<Message>,
        #[serde(default)]
        channel: Option<ChannelRef>,
        #[serde(default)]
        container: Option<Container>,
    },
    Shortcut {
        #[serde(default)]
        callback_id: String,
        #[serde(default)]
        trigger_id: String,
    },
    MessageAction {
        #[serde(default)]
        callback_id: String,
        #[serde(default)]
        trigger_id: String,
    },
    #[serde(other)]
    Other,
}

impl InteractionEnvelope {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            InteractionEnvelope::ViewSubmission { .. } => "view_submission",
            InteractionEnvelope::BlockActions { .. } => "block_actions",
            InteractionEnvelope::Shortcut { .. } => "shortcut",
            InteractionEnvelope::MessageAction { .. } => "message_action",
            InteractionEnvelope::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl SlackUser {
    /// The name recorded as a task's submitter: `username`, else `name`.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.username
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.name.as_deref().filter(|s| !s.is_empty()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct View {
    #[serde(default)]
    pub callback_id: String,
    #[serde(default)]
    pub state: ViewState,
}

/// `view.state.values[block_id][action_id]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub values: HashMap<String, HashMap<String, InputValue>>,
}

impl ViewState {
    #[must_use]
    pub fn input(&self, block_id: &str, action_id: &str) -> Option<&InputValue> {
        self.values.get(block_id)?.get(action_id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputValue {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub selected_option: Option<SelectedOption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectedOption {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Action {
    #[serde(default)]
    pub action_id: String,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub ts: String,
    #[serde(default)]
    pub blocks: Vec<MessageBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelRef {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub message_ts: Option<String>,
}
