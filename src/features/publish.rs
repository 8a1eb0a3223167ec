use tracing::info;

use crate::core::models::TaskSubmission;
use crate::errors::SlackError;
use crate::slack::SlackApi;
use crate::slack::message_formatter::{NEW_TASK_FALLBACK, build_task_blocks};

/// Post a submitted task to its target channel.
///
/// # Errors
///
/// Returns an error if the task has no target channel or the post fails.
pub async fn publish_task(api: &dyn SlackApi, task: &TaskSubmission) -> Result<(), SlackError> {
    if task.channel.is_empty() {
        return Err(SlackError::MissingChannel);
    }

    let blocks = build_task_blocks(task);
    api.post_message_with_blocks(&task.channel, NEW_TASK_FALLBACK, &blocks)
        .await?;

    info!(channel = %task.channel, submitter = %task.submitter, "Task published");
    Ok(())
}
