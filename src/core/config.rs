use std::env;

use crate::errors::SlackError;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
    pub slack_signing_secret: Option<String>,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the process environment, reading a `.env`
    /// file first when one exists in the working directory.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::ConfigError` if `SLACK_BOT_TOKEN` is missing or
    /// empty, or if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, SlackError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SlackError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let slack_bot_token = lookup("SLACK_BOT_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| SlackError::ConfigError("SLACK_BOT_TOKEN is not set".to_string()))?;

        let slack_signing_secret = lookup("SLACK_SIGNING_SECRET").filter(|s| !s.is_empty());

        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| SlackError::ConfigError(format!("PORT: {e}")))?,
            _ => DEFAULT_PORT,
        };

        Ok(Self {
            slack_bot_token,
            slack_signing_secret,
            port,
        })
    }
}
