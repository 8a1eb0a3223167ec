//! Slack request signing (`X-Slack-Signature`, version `v0`).

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::error;

type HmacSha256 = Hmac<Sha256>;

/// Requests older than this are rejected as possible replays.
const MAX_REQUEST_AGE_SECS: u64 = 300;
const MAX_CLOCK_SKEW_SECS: u64 = 60;
const VERSION_PREFIX: &str = "v0=";

/// HMAC keyed with the signing secret, already fed the `v0:{ts}:{body}` base string.
fn keyed_mac(timestamp: &str, request_body: &str, signing_secret: &str) -> Option<HmacSha256> {
    match HmacSha256::new_from_slice(signing_secret.as_bytes()) {
        Ok(mut mac) => {
            mac.update(format!("v0:{timestamp}:{request_body}").as_bytes());
            Some(mac)
        }
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            None
        }
    }
}

fn within_replay_window(ts: u64) -> bool {
    let Ok(now) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return true;
    };
    let now = now.as_secs();
    now.saturating_sub(ts) <= MAX_REQUEST_AGE_SECS && ts <= now + MAX_CLOCK_SKEW_SECS
}

/// Verify Slack's `X-Slack-Signature` for a request body.
///
/// The comparison is constant-time.
#[must_use]
pub fn verify_slack_signature(
    request_body: &str,
    timestamp: &str,
    signature: &str,
    signing_secret: &str,
) -> bool {
    let Ok(ts) = timestamp.parse::<u64>() else {
        error!(timestamp = %timestamp, "Invalid X-Slack-Request-Timestamp");
        return false;
    };
    if !within_replay_window(ts) {
        error!(timestamp = ts, "Timestamp out of range, potential replay attack");
        return false;
    }

    let Some(received) = signature
        .strip_prefix(VERSION_PREFIX)
        .and_then(|hex_sig| hex::decode(hex_sig).ok())
    else {
        error!("Malformed X-Slack-Signature header");
        return false;
    };

    let Some(mac) = keyed_mac(timestamp, request_body, signing_secret) else {
        return false;
    };
    let verified = mac.verify_slice(&received).is_ok();
    if !verified {
        error!("Slack signature verification failed");
    }
    verified
}

/// Compute the signature header value Slack would send for a body.
#[must_use]
pub fn compute_signature(timestamp: &str, request_body: &str, signing_secret: &str) -> String {
    keyed_mac(timestamp, request_body, signing_secret).map_or_else(String::new, |mac| {
        format!("{VERSION_PREFIX}{}", hex::encode(mac.finalize().into_bytes()))
    })
}
