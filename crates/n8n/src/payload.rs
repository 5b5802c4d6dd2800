//! Webhook response payload types and validation.
//!
//! The webhook returns JSON of the shape
//! `{ "title": ..., "summary": ..., "thumbnails": [...] }` with no schema
//! guarantees. [`RawSummaryResponse`] mirrors that loose shape;
//! [`RawSummaryResponse::into_payload`] validates it exactly once into a
//! [`SummaryPayload`] so downstream code never re-checks fields.

use recap_core::thumbnail::Thumbnail;
use serde::Deserialize;

use crate::error::GatewayError;

/// Raw JSON body returned by the summarization webhook.
#[derive(Debug, Deserialize)]
pub struct RawSummaryResponse {
    pub title: Option<String>,
    pub summary: Option<String>,
    /// Thumbnail candidates in the order the workflow returned them.
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
}

/// A validated summarization result.
#[derive(Debug, Clone)]
pub struct SummaryPayload {
    /// Video title reported by the summarization workflow.
    pub title: String,
    /// Markdown summary text.
    pub summary: String,
    /// Thumbnail candidates, original order preserved.
    pub thumbnails: Vec<Thumbnail>,
}

impl RawSummaryResponse {
    /// Validate required fields. A missing or empty `title` or `summary`
    /// is a protocol violation naming the offending field.
    pub fn into_payload(self) -> Result<SummaryPayload, GatewayError> {
        let title = match self.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(GatewayError::Protocol { field: "title" }),
        };
        let summary = match self.summary {
            Some(summary) if !summary.is_empty() => summary,
            _ => return Err(GatewayError::Protocol { field: "summary" }),
        };
        Ok(SummaryPayload {
            title,
            summary,
            thumbnails: self.thumbnails,
        })
    }
}
