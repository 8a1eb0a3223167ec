use std::sync::Arc;

use anyhow::Context;
use taskboard::api::{AppState, router};
use taskboard::core::config::AppConfig;
use taskboard::slack::SlackClient;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    taskboard::setup_logging();

    let config = AppConfig::from_env().context("loading configuration")?;
    let port = config.port;
    let slack = Arc::new(SlackClient::new(config.slack_bot_token.clone()));
    let app = router(AppState::new(config, slack));

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(port, "Taskboard listening");

    axum::serve(listener, app).await.context("serving HTTP")?;
    Ok(())
}
