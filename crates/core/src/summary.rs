//! Summary completeness validation and plain-text export shaping.

use crate::error::CoreError;

/// File name offered to clients downloading a summary as plain text.
pub const EXPORT_FILENAME: &str = "summary.txt";

/// Validate that a summary is complete enough to persist.
///
/// Title, body, and video reference must all be non-empty. Checked before
/// any store contact so an incomplete save never reaches the database.
pub fn validate_complete(title: &str, summary: &str, video_url: &str) -> Result<(), CoreError> {
    if title.is_empty() {
        return Err(CoreError::IncompleteData("title is missing".to_string()));
    }
    if summary.is_empty() {
        return Err(CoreError::IncompleteData(
            "summary body is missing".to_string(),
        ));
    }
    if video_url.is_empty() {
        return Err(CoreError::IncompleteData(
            "video URL is missing".to_string(),
        ));
    }
    Ok(())
}

/// Shape a summary body for plain-text download.
///
/// The markdown body is served verbatim; only a trailing newline is
/// guaranteed so the file ends cleanly.
pub fn export_plain_text(summary: &str) -> String {
    if summary.ends_with('\n') {
        summary.to_string()
    } else {
        format!("{summary}\n")
    }
}
