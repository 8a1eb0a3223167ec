/// Taskboard - a Slack integration for publishing and claiming tasks.
///
/// A user opens the task form (slash command or shortcut), the submission is
/// posted to the chosen channel with a claim button, and whoever presses the
/// button is assigned: both the claimant and the submitter get a DM and the
/// channel message is replaced with an assignment notice.
///
/// # Architecture
///
/// The system uses:
/// - axum for the inbound webhook endpoints
/// - slack-morphism and reqwest for Slack Web API calls
/// - Tokio detached tasks for work that must not delay Slack's 3 second ack
///
/// No task state is stored: the posted message is the task record, and the
/// claim path reads the fields and submitter back out of it.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use taskboard::api::{AppState, router};
/// use taskboard::core::config::AppConfig;
/// use taskboard::slack::SlackClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     taskboard::setup_logging();
///
///     let config = AppConfig {
///         slack_bot_token: "xoxb-dummy".to_string(),
///         slack_signing_secret: None,
///         port: 3000,
///     };
///     let slack = Arc::new(SlackClient::new(config.slack_bot_token.clone()));
///     let app = router(AppState::new(config, slack));
///
///     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
///     axum::serve(listener, app).await?;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod slack;
pub mod utils;

pub use errors::SlackError;

/// Configure structured JSON logging.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// taskboard::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
