use percent_encoding::percent_decode_str;
use std::collections::HashMap;

use super::envelope::InteractionEnvelope;
use crate::errors::SlackError;

/// Fields Slack sends when a user invokes a slash command.
///
/// Every field defaults to an empty string when absent from the form body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlashCommand {
    pub team_id: String,
    pub channel_id: String,
    pub user_id: String,
    pub user_name: String,
    pub command: String,
    pub text: String,
    pub response_url: String,
    pub trigger_id: String,
}

/// Decode one `application/x-www-form-urlencoded` component.
///
/// # Errors
///
/// Returns an error if the decoded bytes are not valid UTF-8.
pub fn decode_url_component(input: &str) -> Result<String, String> {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.to_string())
        .map_err(|e| format!("Failed to decode URL component: {e}"))
}

/// Parse a URL-encoded form body into a key/value map. Later keys win.
///
/// # Errors
///
/// Returns `SlackError::ParseError` if a key or value is not valid UTF-8
/// after decoding.
pub fn parse_form_data(form_data: &str) -> Result<HashMap<String, String>, SlackError> {
    let mut map = HashMap::new();
    for pair in form_data.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_url_component(raw_key).map_err(SlackError::ParseError)?;
        let value = decode_url_component(raw_value).map_err(SlackError::ParseError)?;
        map.insert(key, value);
    }
    Ok(map)
}

/// # Errors
///
/// Returns an error if the form body cannot be decoded.
pub fn parse_slash_command(body: &str) -> Result<SlashCommand, SlackError> {
    let mut map = parse_form_data(body)?;
    let mut take = |key: &str| map.remove(key).unwrap_or_default();

    Ok(SlashCommand {
        team_id: take("team_id"),
        channel_id: take("channel_id"),
        user_id: take("user_id"),
        user_name: take("user_name"),
        command: take("command"),
        text: take("text"),
        response_url: take("response_url"),
        trigger_id: take("trigger_id"),
    })
}

/// Decode the `payload` field of an interactive request body.
///
/// # Errors
///
/// Returns `SlackError::ParseError` if the body has no `payload` field or the
/// payload is not a JSON interaction envelope.
pub fn parse_interactive_payload(form_body: &str) -> Result<InteractionEnvelope, SlackError> {
    let map = parse_form_data(form_body)?;
    let raw = map
        .get("payload")
        .ok_or_else(|| SlackError::ParseError("Missing payload field".to_string()))?;

    Ok(serde_json::from_str(raw)?)
}
