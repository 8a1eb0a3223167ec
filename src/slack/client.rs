//! Slack API client module
//!
//! Every outbound call the service makes goes through the [`SlackApi`] trait so
//! the dispatcher and the claim fan-out can run against a fake in tests.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::{SlackApiChatPostMessageRequest, SlackApiConversationsOpenRequest};
use slack_morphism::{
    SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackMessageContent, SlackUserId,
};
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::models::{Member, MembersPage};
use crate::errors::SlackError;

pub const SLACK_API_BASE_URL: &str = "https://slack.com/api";

/// Page size requested from `users.list`.
const MEMBERS_PAGE_LIMIT: u16 = 200;

// Used for DMs only. `None` when the TLS connector cannot be built; `send_dm`
// then fails with `ConnectorUnavailable`.
static SLACK_CLIENT: std::sync::LazyLock<Option<SlackHyperClient>> =
    std::sync::LazyLock::new(|| match SlackClientHyperConnector::new() {
        Ok(connector) => Some(SlackHyperClient::new(connector)),
        Err(e) => {
            warn!("Failed to create Slack HTTP connector: {}", e);
            None
        }
    });

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Outbound operations against the chat platform.
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// Open a modal using a single-use trigger handle (`views.open`).
    async fn open_view(&self, trigger_id: &str, view: &Value) -> Result<(), SlackError>;

    /// Post a message with blocks to a channel (`chat.postMessage`).
    async fn post_message_with_blocks(
        &self,
        channel_id: &str,
        text_fallback: &str,
        blocks: &Value,
    ) -> Result<(), SlackError>;

    /// Replace the content of an existing message (`chat.update`).
    async fn update_message(
        &self,
        channel_id: &str,
        ts: &str,
        text: &str,
        blocks: &Value,
    ) -> Result<(), SlackError>;

    /// Send a plain-text direct message to a user.
    async fn send_dm(&self, user_id: &str, text: &str) -> Result<(), SlackError>;

    /// Fetch one page of the workspace member directory (`users.list`).
    async fn list_members(&self, cursor: Option<&str>) -> Result<MembersPage, SlackError>;
}

#[derive(Debug, Deserialize)]
struct UsersListResponse {
    ok: bool,
    #[serde(default)]
    members: Vec<Member>,
    #[serde(default)]
    response_metadata: Option<ResponseMetadata>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMetadata {
    #[serde(default)]
    next_cursor: Option<String>,
}

/// Slack Web API client authenticated with the bot token.
pub struct SlackClient {
    token: SlackApiToken,
    base_url: String,
}

impl SlackClient {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, SLACK_API_BASE_URL)
    }

    /// Point the JSON API calls at a different host, e.g. a local mock server.
    #[must_use]
    pub fn with_base_url(token: String, base_url: &str) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.base_url)
    }

    /// POST a JSON payload to a Web API method and check Slack's `ok` flag.
    async fn post_json(&self, method: &str, payload: &Value) -> Result<Value, SlackError> {
        let resp = HTTP_CLIENT
            .post(self.method_url(method))
            .bearer_auth(&self.token.token_value.0)
            .json(payload)
            .send()
            .await
            .map_err(|e| SlackError::HttpError(format!("{method}: {e}")))?;

        if !resp.status().is_success() {
            return Err(SlackError::ApiError(format!(
                "{method} HTTP {}",
                resp.status()
            )));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| SlackError::ParseError(format!("{method} JSON parse error: {e}")))?;

        if !body.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            return Err(SlackError::ApiError(format!(
                "{method} error: {}",
                body.get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
            )));
        }

        Ok(body)
    }
}

#[async_trait]
impl SlackApi for SlackClient {
    async fn open_view(&self, trigger_id: &str, view: &Value) -> Result<(), SlackError> {
        let payload = json!({
            "trigger_id": trigger_id,
            "view": view
        });
        self.post_json("views.open", &payload).await.map(|_| ())
    }

    async fn post_message_with_blocks(
        &self,
        channel_id: &str,
        text_fallback: &str,
        blocks: &Value,
    ) -> Result<(), SlackError> {
        let payload = json!({
            "channel": channel_id,
            "text": text_fallback,
            "blocks": blocks,
        });
        self.post_json("chat.postMessage", &payload).await.map(|_| ())
    }

    async fn update_message(
        &self,
        channel_id: &str,
        ts: &str,
        text: &str,
        blocks: &Value,
    ) -> Result<(), SlackError> {
        let payload = json!({
            "channel": channel_id,
            "ts": ts,
            "text": text,
            "blocks": blocks,
        });
        self.post_json("chat.update", &payload).await.map(|_| ())
    }

    async fn send_dm(&self, user_id: &str, text: &str) -> Result<(), SlackError> {
        let session = SLACK_CLIENT
            .as_ref()
            .ok_or(SlackError::ConnectorUnavailable)?
            .open_session(&self.token);

        let open_req = SlackApiConversationsOpenRequest::new()
            .with_users(vec![SlackUserId(user_id.to_string())]);
        let im_channel = session.conversations_open(&open_req).await?.channel.id;

        let post_req = SlackApiChatPostMessageRequest::new(
            SlackChannelId(im_channel.0),
            SlackMessageContent::new().with_text(text.to_string()),
        );
        session.chat_post_message(&post_req).await?;

        Ok(())
    }

    async fn list_members(&self, cursor: Option<&str>) -> Result<MembersPage, SlackError> {
        let mut query: Vec<(&str, String)> = vec![("limit", MEMBERS_PAGE_LIMIT.to_string())];
        if let Some(c) = cursor.filter(|c| !c.is_empty()) {
            query.push(("cursor", c.to_string()));
        }

        let resp = HTTP_CLIENT
            .get(self.method_url("users.list"))
            .bearer_auth(&self.token.token_value.0)
            .query(&query)
            .send()
            .await
            .map_err(|e| SlackError::HttpError(format!("users.list: {e}")))?;

        if !resp.status().is_success() {
            return Err(SlackError::ApiError(format!(
                "users.list HTTP {}",
                resp.status()
            )));
        }

        let body: UsersListResponse = resp
            .json()
            .await
            .map_err(|e| SlackError::ParseError(format!("users.list JSON parse error: {e}")))?;

        if !body.ok {
            return Err(SlackError::ApiError(format!(
                "users.list error: {}",
                body.error.as_deref().unwrap_or("unknown")
            )));
        }

        let next_cursor = body
            .response_metadata
            .and_then(|m| m.next_cursor)
            .filter(|c| !c.is_empty());
        debug!(
            members = body.members.len(),
            has_more = next_cursor.is_some(),
            "users.list page fetched"
        );

        Ok(MembersPage {
            members: body.members,
            next_cursor,
        })
    }
}
