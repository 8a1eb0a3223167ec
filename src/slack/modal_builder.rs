use serde_json::{Value, json};

use crate::core::models::Urgency;

/// `callback_id` of the task form; submissions carrying it are published.
pub const TASK_FORM_CALLBACK_ID: &str = "task_form";

/// `callback_id` of the shortcut that opens the task form.
pub const NEW_TASK_SHORTCUT_ID: &str = "new_task";

/// Every input element in the task form uses this `action_id`.
pub const INPUT_ACTION_ID: &str = "input";

pub const BLOCK_CLIENT: &str = "client";
pub const BLOCK_PROJECT: &str = "project";
pub const BLOCK_ISSUE: &str = "issue";
pub const BLOCK_DESCRIPTION: &str = "description";
pub const BLOCK_URGENCY: &str = "urgency";
pub const BLOCK_ESTIMATE: &str = "estimate";
pub const BLOCK_CHANNEL: &str = "channel";

fn text_input(block_id: &str, label: &str, optional: bool, multiline: bool) -> Value {
    let mut element = json!({ "type": "plain_text_input", "action_id": INPUT_ACTION_ID });
    if multiline {
        element["multiline"] = Value::Bool(true);
    }
    let mut block = json!({
        "type": "input",
        "block_id": block_id,
        "label": { "type": "plain_text", "text": label },
        "element": element
    });
    if optional {
        block["optional"] = Value::Bool(true);
    }
    block
}

fn urgency_select() -> Value {
    let options: Vec<Value> = Urgency::ALL
        .iter()
        .map(|u| {
            json!({
                "text": { "type": "plain_text", "text": u.as_str() },
                "value": u.as_str()
            })
        })
        .collect();

    json!({
        "type": "input",
        "block_id": BLOCK_URGENCY,
        "label": { "type": "plain_text", "text": "Urgency" },
        "element": {
            "type": "static_select",
            "action_id": INPUT_ACTION_ID,
            "options": options
        }
    })
}

/// Build the Block Kit modal used to create a task.
#[must_use]
pub fn build_task_modal() -> Value {
    let blocks = vec![
        text_input(BLOCK_CLIENT, "Client", false, false),
        text_input(BLOCK_PROJECT, "Project", false, false),
        text_input(BLOCK_ISSUE, "Issue (optional)", true, false),
        text_input(BLOCK_DESCRIPTION, "Description", false, true),
        urgency_select(),
        text_input(BLOCK_ESTIMATE, "Estimate (optional)", true, false),
        text_input(BLOCK_CHANNEL, "Channel to publish in (#...)", false, false),
    ];

    json!({
        "type": "modal",
        "callback_id": TASK_FORM_CALLBACK_ID,
        "title": { "type": "plain_text", "text": "New Task" },
        "submit": { "type": "plain_text", "text": "Publish" },
        "close": { "type": "plain_text", "text": "Cancel" },
        "blocks": blocks
    })
}
