use tracing::{debug, error, warn};

use crate::slack::SlackApi;

/// Upper bound on `users.list` pages walked for one lookup.
const MAX_DIRECTORY_PAGES: usize = 50;

/// Resolve a workspace member's user ID from their username.
///
/// Walks the paginated member directory looking for an exact match. A miss is
/// `None`; so is a failing directory call, which is logged rather than
/// propagated because the caller only skips a notification on `None`.
pub async fn resolve_member_id(api: &dyn SlackApi, username: &str) -> Option<String> {
    if username.is_empty() {
        return None;
    }

    let mut cursor: Option<String> = None;
    for page_no in 0..MAX_DIRECTORY_PAGES {
        let page = match api.list_members(cursor.as_deref()).await {
            Ok(p) => p,
            Err(e) => {
                error!(operation = "users.list", username = %username, page = page_no, "Member directory lookup failed: {}", e);
                return None;
            }
        };

        if let Some(member) = page
            .members
            .iter()
            .find(|m| !m.deleted && m.name == username)
        {
            debug!(username = %username, user_id = %member.id, "Resolved member");
            return Some(member.id.clone());
        }

        match page.next_cursor {
            Some(next) if cursor.as_deref() != Some(next.as_str()) => cursor = Some(next),
            _ => {
                debug!(username = %username, "No member matches username");
                return None;
            }
        }
    }

    warn!(username = %username, pages = MAX_DIRECTORY_PAGES, "Gave up walking member directory");
    None
}
