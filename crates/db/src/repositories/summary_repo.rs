//! Repository for the `summaries` table.

use recap_core::types::{OwnerId, SummaryId};
use sqlx::PgPool;

use crate::models::summary::{CreateSummary, Summary, UpdateSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, summary, video_url, thumbnail_url, owner_id, created_at, updated_at";

/// Provides owner-scoped CRUD operations for summaries.
pub struct SummaryRepo;

impl SummaryRepo {
    /// Insert a new summary owned by `owner_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: OwnerId,
        input: &CreateSummary,
    ) -> Result<Summary, sqlx::Error> {
        let query = format!(
            "INSERT INTO summaries (title, summary, video_url, thumbnail_url, owner_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Summary>(&query)
            .bind(&input.title)
            .bind(&input.summary)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a summary by id. Returns `None` when the row does not exist
    /// or belongs to a different owner.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: OwnerId,
        id: SummaryId,
    ) -> Result<Option<Summary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM summaries WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Summary>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List all summaries owned by `owner_id`, most recently updated first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: OwnerId,
    ) -> Result<Vec<Summary>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM summaries WHERE owner_id = $1 ORDER BY updated_at DESC");
        sqlx::query_as::<_, Summary>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a summary in place. Only non-`None` fields in `input` are
    /// applied; `updated_at` always advances.
    ///
    /// Returns `None` if no row with the given `id` exists for `owner_id`.
    pub async fn update(
        pool: &PgPool,
        owner_id: OwnerId,
        id: SummaryId,
        input: &UpdateSummary,
    ) -> Result<Option<Summary>, sqlx::Error> {
        let query = format!(
            "UPDATE summaries SET
                title = COALESCE($3, title),
                summary = COALESCE($4, summary),
                thumbnail_url = COALESCE($5, thumbnail_url),
                updated_at = NOW()
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Summary>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.summary)
            .bind(&input.thumbnail_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a summary by id. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        owner_id: OwnerId,
        id: SummaryId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM summaries WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
