//! Summary entity model and DTOs.

use recap_core::types::{OwnerId, SummaryId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A summary row from the `summaries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Summary {
    pub id: SummaryId,
    pub title: String,
    /// Markdown summary text.
    pub summary: String,
    pub video_url: String,
    /// Best-resolution thumbnail selected at generation time, if any.
    pub thumbnail_url: Option<String>,
    /// Owning user. Set at creation, never reassigned.
    pub owner_id: OwnerId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new summary.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSummary {
    pub title: String,
    pub summary: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
}

/// DTO for updating an existing summary. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSummary {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub thumbnail_url: Option<String>,
}
