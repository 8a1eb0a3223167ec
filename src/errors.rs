use slack_morphism::errors::SlackClientError;
use thiserror::Error;

/// Everything that can go wrong while talking to Slack or starting up.
#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Failed to parse Slack payload: {0}")]
    ParseError(String),

    #[error("Failed to access Slack API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Task has no target channel")]
    MissingChannel,

    #[error("Slack HTTP connector not initialized")]
    ConnectorUnavailable,
}

impl From<SlackClientError> for SlackError {
    fn from(error: SlackClientError) -> Self {
        SlackError::ApiError(error.to_string())
    }
}

impl From<serde_json::Error> for SlackError {
    fn from(error: serde_json::Error) -> Self {
        SlackError::ParseError(error.to_string())
    }
}
