use serde::{Deserialize, Serialize};

/// Urgency levels offered by the task form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Urgency {
    High,
    #[default]
    Medium,
    Low,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::High, Urgency::Medium, Urgency::Low];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
        }
    }

    /// Map a submitted option value back to an urgency level.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|u| u.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Submitter name recorded when the payload carries no usable name.
/// Never looked up in the member directory.
pub const UNKNOWN_SUBMITTER: &str = "someone";

/// Field values of one submitted task form.
///
/// Optional fields are `None` when blank so the formatter can omit their lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskSubmission {
    pub client: String,
    pub project: String,
    pub issue: Option<String>,
    pub description: String,
    pub urgency: Urgency,
    pub estimate: Option<String>,
    /// Already normalized (no sigil, no surrounding whitespace).
    pub channel: String,
    pub submitter: String,
}

/// The `(channel, ts)` pair identifying a posted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    pub channel_id: String,
    pub ts: String,
}

/// The user who pressed the claim control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claimant {
    pub id: String,
    pub display_name: String,
}

/// One workspace member as listed by the member directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub deleted: bool,
}

/// A single page of the member directory.
#[derive(Debug, Clone, Default)]
pub struct MembersPage {
    pub members: Vec<Member>,
    pub next_cursor: Option<String>,
}
