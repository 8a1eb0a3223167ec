mod common;

use serde_json::json;
use taskboard::api::envelope::InteractionEnvelope;
use taskboard::api::parsing::{
    decode_url_component, parse_interactive_payload, parse_slash_command,
};

#[test]
fn test_decode_url_component() {
    assert_eq!(decode_url_component("hello%20world").unwrap(), "hello world");
    assert_eq!(decode_url_component("hello+world").unwrap(), "hello world");
    assert_eq!(
        decode_url_component("test%40example.com%26param%3Dvalue").unwrap(),
        "test@example.com&param=value"
    );
}

#[test]
fn test_parse_slash_command() {
    let form_data = "token=abc123&team_id=T123&team_domain=example&\
                     channel_id=C123&channel_name=general&user_id=U123&\
                     user_name=alice&command=%2Ftask&text=&\
                     response_url=https%3A%2F%2Fhooks.slack.com%2F&\
                     trigger_id=123.456.abc&api_app_id=A1";

    let command = parse_slash_command(form_data).unwrap();
    assert_eq!(command.team_id, "T123");
    assert_eq!(command.channel_id, "C123");
    assert_eq!(command.user_id, "U123");
    assert_eq!(command.user_name, "alice");
    assert_eq!(command.command, "/task");
    assert_eq!(command.text, "");
    assert_eq!(command.response_url, "https://hooks.slack.com/");
    assert_eq!(command.trigger_id, "123.456.abc");
}

#[test]
fn test_parse_slash_command_missing_fields() {
    let command = parse_slash_command("team_id=T123").unwrap();
    assert_eq!(command.team_id, "T123");
    assert_eq!(command.trigger_id, "");
    assert_eq!(command.command, "");
}

#[test]
fn test_parse_interactive_view_submission() {
    let body = common::interactive_body(&common::task_form_submission(
        "alice",
        &[("client", "Acme & Sons"), ("urgency", "Low")],
    ));
    match parse_interactive_payload(&body).unwrap() {
        InteractionEnvelope::ViewSubmission { user, view } => {
            assert_eq!(user.display_name(), Some("alice"));
            assert_eq!(view.callback_id, "task_form");
            let client = view.state.input("client", "input").unwrap();
            assert_eq!(client.value.as_deref(), Some("Acme & Sons"));
            let urgency = view.state.input("urgency", "input").unwrap();
            assert_eq!(urgency.selected_option.as_ref().unwrap().value, "Low");
        }
        other => panic!("unexpected envelope {other:?}"),
    }
}

#[test]
fn test_parse_interactive_block_actions() {
    let body = common::interactive_body(&common::claim_click(
        "U_CLAIM",
        "bob",
        json!([
            { "type": "section", "text": { "type": "mrkdwn", "text": "x" } },
            { "type": "actions", "elements": [
                { "type": "button", "action_id": "assign_task", "text": { "type": "plain_text", "text": "Claim task" } }
            ] },
            { "type": "context", "elements": [ { "type": "mrkdwn", "text": "Published by: *alice*" } ] },
            { "type": "divider" },
            { "type": "context", "elements": [ { "type": "image", "image_url": "https://x/y.png", "alt_text": "y" } ] }
        ]),
    ));
    match parse_interactive_payload(&body).unwrap() {
        InteractionEnvelope::BlockActions {
            user,
            actions,
            message,
            channel,
            ..
        } => {
            assert_eq!(user.id, "U_CLAIM");
            assert_eq!(actions[0].action_id, "assign_task");
            let message = message.unwrap();
            assert_eq!(message.ts, "1700000000.000100");
            assert_eq!(message.blocks.len(), 5);
            assert_eq!(channel.unwrap().id, "C_TASKS");
        }
        other => panic!("unexpected envelope {other:?}"),
    }
}

#[test]
fn test_parse_unknown_type_is_other() {
    let body = common::interactive_body(&json!({ "type": "view_closed", "view": {} }));
    assert!(matches!(
        parse_interactive_payload(&body).unwrap(),
        InteractionEnvelope::Other
    ));
}

#[test]
fn test_parse_interactive_errors() {
    assert!(parse_interactive_payload("foo=bar").is_err());
    assert!(parse_interactive_payload("payload=%7Bnot-json").is_err());
    assert!(parse_interactive_payload("payload=%7B%7D").is_err());
}
