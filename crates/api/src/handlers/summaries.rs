//! Handlers for the `/summaries` resource.
//!
//! Coordinates summary generation against the webhook gateway and
//! reconciles the results into the store. Generation never persists;
//! persistence happens only on an explicit save or a resummarize.

use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use recap_core::error::CoreError;
use recap_core::summary::{export_plain_text, validate_complete, EXPORT_FILENAME};
use recap_core::thumbnail::best_thumbnail;
use recap_core::types::SummaryId;
use recap_core::video::validate_video_url;
use recap_db::models::summary::{CreateSummary, Summary, UpdateSummary};
use recap_db::repositories::SummaryRepo;
use recap_n8n::payload::SummaryPayload;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for generation and the unsaved-resummarize path.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub video_url: String,
}

/// A freshly generated summary that has not been persisted.
#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub title: String,
    pub summary: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
}

impl SummaryView {
    fn from_payload(video_url: String, payload: SummaryPayload) -> Self {
        let thumbnail_url = best_thumbnail(&payload.thumbnails).map(|t| t.url.clone());
        Self {
            title: payload.title,
            summary: payload.summary,
            video_url,
            thumbnail_url,
        }
    }
}

// ---------------------------------------------------------------------------
// POST /summaries/generate
// ---------------------------------------------------------------------------

/// Generate a summary for a video without persisting it.
///
/// The video URL is validated before any outbound call; an invalid URL
/// never reaches the webhook.
pub async fn generate_summary(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> AppResult<Json<DataResponse<SummaryView>>> {
    validate_video_url(&request.video_url)?;

    let payload = state.gateway.request_summary(&request.video_url).await?;

    tracing::info!(
        owner_id = %auth.owner_id,
        video_url = %request.video_url,
        "Summary generated",
    );

    Ok(Json(DataResponse {
        data: SummaryView::from_payload(request.video_url, payload),
    }))
}

// ---------------------------------------------------------------------------
// POST /summaries
// ---------------------------------------------------------------------------

/// Save a generated summary.
///
/// Incomplete records (missing title, body, or video URL) are rejected
/// before the store is touched.
pub async fn save_summary(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSummary>,
) -> AppResult<(StatusCode, Json<DataResponse<Summary>>)> {
    validate_complete(&input.title, &input.summary, &input.video_url)?;

    let summary = SummaryRepo::create(&state.pool, auth.owner_id, &input).await?;

    tracing::info!(
        summary_id = %summary.id,
        owner_id = %auth.owner_id,
        "Summary saved",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: summary })))
}

// ---------------------------------------------------------------------------
// GET /summaries
// ---------------------------------------------------------------------------

/// List the caller's saved summaries, most recently updated first.
pub async fn list_summaries(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Summary>>>> {
    let summaries = SummaryRepo::list_by_owner(&state.pool, auth.owner_id).await?;

    Ok(Json(DataResponse { data: summaries }))
}

// ---------------------------------------------------------------------------
// GET /summaries/{id}
// ---------------------------------------------------------------------------

/// Fetch a single saved summary.
pub async fn get_summary(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<SummaryId>,
) -> AppResult<Json<DataResponse<Summary>>> {
    let summary = SummaryRepo::find_by_id(&state.pool, auth.owner_id, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Summary",
            id,
        })?;

    Ok(Json(DataResponse { data: summary }))
}

// ---------------------------------------------------------------------------
// POST /summaries/{id}/resummarize
// ---------------------------------------------------------------------------

/// Regenerate a saved summary and persist the fresh content in place.
///
/// The webhook call and the store update are separate steps, not a
/// transaction. A gateway failure aborts before any write and surfaces
/// as a plain gateway error; a store failure after a successful
/// generation surfaces as `RECONCILIATION_FAILED` with the fresh
/// content riding along so it is not lost.
pub async fn resummarize_saved(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<SummaryId>,
) -> AppResult<Json<DataResponse<Summary>>> {
    let existing = SummaryRepo::find_by_id(&state.pool, auth.owner_id, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Summary",
            id,
        })?;

    let payload = state.gateway.request_summary(&existing.video_url).await?;
    let thumbnail_url = best_thumbnail(&payload.thumbnails).map(|t| t.url.clone());

    // Always persist the freshly fetched values, never a stale capture.
    let changes = UpdateSummary {
        title: Some(payload.title.clone()),
        summary: Some(payload.summary.clone()),
        thumbnail_url: thumbnail_url.clone(),
    };

    match SummaryRepo::update(&state.pool, auth.owner_id, id, &changes).await {
        Ok(Some(updated)) => {
            tracing::info!(
                summary_id = %updated.id,
                owner_id = %auth.owner_id,
                "Summary regenerated",
            );
            Ok(Json(DataResponse { data: updated }))
        }
        Ok(None) => Err(AppError::PartialReconciliation {
            title: payload.title,
            summary: payload.summary,
            thumbnail_url,
            detail: format!("summary {id} disappeared before the update"),
        }),
        Err(err) => Err(AppError::PartialReconciliation {
            title: payload.title,
            summary: payload.summary,
            thumbnail_url,
            detail: err.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// POST /summaries/resummarize
// ---------------------------------------------------------------------------

/// Regenerate a summary that was never saved and persist the result as
/// a new record.
///
/// Same separation as the in-place variant: an insert failure after a
/// successful generation is a reconciliation failure, not a plain store
/// error.
pub async fn resummarize_unsaved(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Summary>>)> {
    validate_video_url(&request.video_url)?;

    let payload = state.gateway.request_summary(&request.video_url).await?;
    let thumbnail_url = best_thumbnail(&payload.thumbnails).map(|t| t.url.clone());

    let record = CreateSummary {
        title: payload.title,
        summary: payload.summary,
        video_url: request.video_url,
        thumbnail_url,
    };

    match SummaryRepo::create(&state.pool, auth.owner_id, &record).await {
        Ok(created) => {
            tracing::info!(
                summary_id = %created.id,
                owner_id = %auth.owner_id,
                "Summary regenerated and saved as new record",
            );
            Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
        }
        Err(err) => Err(AppError::PartialReconciliation {
            title: record.title,
            summary: record.summary,
            thumbnail_url: record.thumbnail_url,
            detail: err.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// DELETE /summaries/{id}
// ---------------------------------------------------------------------------

/// Delete a saved summary.
///
/// No existence pre-check: the store's own result decides between 204
/// and 404, so a repeated delete reports not-found and nothing more.
pub async fn delete_summary(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<SummaryId>,
) -> AppResult<StatusCode> {
    let deleted = SummaryRepo::delete(&state.pool, auth.owner_id, id).await?;

    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Summary",
            id,
        }
        .into());
    }

    tracing::info!(summary_id = %id, owner_id = %auth.owner_id, "Summary deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /summaries/{id}/download
// ---------------------------------------------------------------------------

/// Export a saved summary's body as a plain-text attachment.
///
/// Pure read; the markdown body is served verbatim with a guaranteed
/// trailing newline.
pub async fn download_summary(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<SummaryId>,
) -> AppResult<impl IntoResponse> {
    let summary = SummaryRepo::find_by_id(&state.pool, auth.owner_id, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Summary",
            id,
        })?;

    let body = export_plain_text(&summary.summary);

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        body,
    ))
}
