//! Read-side Block Kit structures.
//!
//! Only the parts of a posted message that the claim path reads back are
//! modelled here; unknown block kinds and fields are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextObject {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

/// An element inside a `context` or `actions` block.
///
/// Context elements carry their text inline, buttons carry it in a nested
/// text object, so `text` accepts either shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockElement {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub text: Option<ElementText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementText {
    Plain(String),
    Object(TextObject),
}

impl ElementText {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ElementText::Plain(s) => s,
            ElementText::Object(t) => &t.text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBlock {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub text: Option<TextObject>,
    #[serde(default)]
    pub elements: Vec<BlockElement>,
}

impl MessageBlock {
    #[must_use]
    pub fn is_section(&self) -> bool {
        self.kind == "section"
    }

    #[must_use]
    pub fn is_context(&self) -> bool {
        self.kind == "context"
    }
}
