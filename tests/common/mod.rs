//! Recording fake of the Slack API shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;
use taskboard::SlackError;
use taskboard::core::models::{Member, MembersPage};
use taskboard::slack::SlackApi;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    OpenView { trigger_id: String, view: Value },
    Post { channel: String, text: String, blocks: Value },
    Update { channel: String, ts: String, text: String, blocks: Value },
    Dm { user_id: String, text: String },
    ListMembers { cursor: Option<String> },
}

/// How long a hanging operation sleeps; far past any ack budget.
pub const HANG: Duration = Duration::from_secs(60);

/// Which operation an injected failure or hang applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fail {
    OpenView,
    Post,
    Update,
    /// DMs to this user ID fail.
    DmTo(String),
    ListMembers,
}

#[derive(Default)]
pub struct FakeSlack {
    calls: Mutex<Vec<Call>>,
    failures: HashSet<Fail>,
    hangs: HashSet<Fail>,
    /// Member directory, served `page_size` members per page.
    members: Vec<Member>,
    page_size: usize,
}

impl FakeSlack {
    pub fn new() -> Self {
        Self {
            page_size: 2,
            ..Self::default()
        }
    }

    pub fn with_members(mut self, members: &[(&str, &str)]) -> Self {
        self.members = members
            .iter()
            .map(|(id, name)| Member {
                id: (*id).to_string(),
                name: (*name).to_string(),
                deleted: false,
            })
            .collect();
        self
    }

    pub fn failing(mut self, fail: Fail) -> Self {
        self.failures.insert(fail);
        self
    }

    /// The operation records its call, then sleeps for [`HANG`] before answering.
    pub fn hanging(mut self, op: Fail) -> Self {
        self.hangs.insert(op);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn dms(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Dm { user_id, text } => Some((user_id, text)),
                _ => None,
            })
            .collect()
    }

    pub fn posts(&self) -> Vec<(String, Value)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Post { channel, blocks, .. } => Some((channel, blocks)),
                _ => None,
            })
            .collect()
    }

    pub fn updates(&self) -> Vec<(String, String, Value)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Update { channel, ts, blocks, .. } => Some((channel, ts, blocks)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }

    async fn outcome(&self, fail: &Fail) -> Result<(), SlackError> {
        if self.hangs.contains(fail) {
            tokio::time::sleep(HANG).await;
        }
        if self.failures.contains(fail) {
            Err(SlackError::ApiError(format!("injected failure: {fail:?}")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SlackApi for FakeSlack {
    async fn open_view(&self, trigger_id: &str, view: &Value) -> Result<(), SlackError> {
        self.record(Call::OpenView {
            trigger_id: trigger_id.to_string(),
            view: view.clone(),
        });
        self.outcome(&Fail::OpenView).await
    }

    async fn post_message_with_blocks(
        &self,
        channel_id: &str,
        text_fallback: &str,
        blocks: &Value,
    ) -> Result<(), SlackError> {
        self.record(Call::Post {
            channel: channel_id.to_string(),
            text: text_fallback.to_string(),
            blocks: blocks.clone(),
        });
        self.outcome(&Fail::Post).await
    }

    async fn update_message(
        &self,
        channel_id: &str,
        ts: &str,
        text: &str,
        blocks: &Value,
    ) -> Result<(), SlackError> {
        self.record(Call::Update {
            channel: channel_id.to_string(),
            ts: ts.to_string(),
            text: text.to_string(),
            blocks: blocks.clone(),
        });
        self.outcome(&Fail::Update).await
    }

    async fn send_dm(&self, user_id: &str, text: &str) -> Result<(), SlackError> {
        self.record(Call::Dm {
            user_id: user_id.to_string(),
            text: text.to_string(),
        });
        self.outcome(&Fail::DmTo(user_id.to_string())).await
    }

    async fn list_members(&self, cursor: Option<&str>) -> Result<MembersPage, SlackError> {
        self.record(Call::ListMembers {
            cursor: cursor.map(str::to_string),
        });
        self.outcome(&Fail::ListMembers).await?;

        let start: usize = cursor.and_then(|c| c.parse().ok()).unwrap_or(0);
        let end = (start + self.page_size).min(self.members.len());
        let next_cursor = (end < self.members.len()).then(|| end.to_string());

        Ok(MembersPage {
            members: self.members[start.min(end)..end].to_vec(),
            next_cursor,
        })
    }
}

/// Encode an interaction envelope the way Slack posts it: `payload=<urlencoded json>`.
pub fn interactive_body(payload: &Value) -> String {
    let json = payload.to_string();
    format!(
        "payload={}",
        percent_encoding::utf8_percent_encode(&json, percent_encoding::NON_ALPHANUMERIC)
    )
}

/// A `view_submission` of the task form with the given `(block_id, value)` inputs.
/// The `urgency` block is sent as a static select.
pub fn task_form_submission(username: &str, inputs: &[(&str, &str)]) -> Value {
    let mut values = serde_json::Map::new();
    for (block_id, value) in inputs {
        let input = if *block_id == "urgency" {
            serde_json::json!({ "input": { "type": "static_select", "selected_option": { "value": value } } })
        } else {
            serde_json::json!({ "input": { "type": "plain_text_input", "value": value } })
        };
        values.insert((*block_id).to_string(), input);
    }

    serde_json::json!({
        "type": "view_submission",
        "user": { "id": "U_SUBMITTER", "username": username, "name": username },
        "view": {
            "callback_id": "task_form",
            "state": { "values": values }
        }
    })
}

/// A `block_actions` click on the claim button of a message with `blocks`.
pub fn claim_click(user_id: &str, username: &str, blocks: Value) -> Value {
    serde_json::json!({
        "type": "block_actions",
        "user": { "id": user_id, "username": username },
        "actions": [ { "action_id": "assign_task", "block_id": "b1", "type": "button" } ],
        "channel": { "id": "C_TASKS" },
        "message": { "ts": "1700000000.000100", "blocks": blocks }
    })
}
