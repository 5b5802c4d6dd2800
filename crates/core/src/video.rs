//! Video reference validation.
//!
//! A video reference is an opaque YouTube URL. It must match the
//! recognized URL pattern before any network call is attempted; no
//! normalization (e.g. stripping tracking parameters) is performed.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Regex pattern matching recognized YouTube video URLs.
///
/// Accepts `youtube.com` and `youtu.be` hosts (scheme and `www.` optional)
/// with `watch?v=`, `embed/`, `v/` or bare-short forms, an 11-character
/// video id, and an optional trailing query string.
pub const VIDEO_URL_PATTERN: &str =
    r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/(watch\?v=|embed/|v/)?([A-Za-z0-9_-]{11})(\S+)?$";

/// Compiled video URL regex. Compiled once, reused forever.
static VIDEO_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VIDEO_URL_PATTERN).expect("valid regex"));

/// Validate a video reference: must be non-empty and match the
/// recognized YouTube URL pattern.
pub fn validate_video_url(url: &str) -> Result<(), CoreError> {
    if url.is_empty() {
        return Err(CoreError::Validation(
            "Video URL must not be empty".to_string(),
        ));
    }
    if !VIDEO_URL_RE.is_match(url) {
        return Err(CoreError::Validation(format!(
            "'{url}' is not a recognized YouTube video URL"
        )));
    }
    Ok(())
}
