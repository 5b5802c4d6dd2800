use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use recap_core::error::CoreError;
use recap_n8n::error::GatewayError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`GatewayError`] for webhook
/// failures, and adds store-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `recap_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure from the summarization webhook.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The webhook produced a fresh summary but the subsequent store
    /// write failed. Carries the fresh content so it is not lost: the
    /// generated summary is valid even though durability failed.
    #[error("Summary was generated but could not be persisted")]
    PartialReconciliation {
        title: String,
        summary: String,
        thumbnail_url: Option<String>,
        detail: String,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::IncompleteData(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INCOMPLETE_DATA",
                    format!("Cannot save an incomplete summary: {msg}"),
                ),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- Webhook gateway errors ---
            AppError::Gateway(gateway) => {
                let code = match gateway {
                    GatewayError::Transport { .. } => "TRANSPORT_FAILURE",
                    GatewayError::Protocol { .. } => "PROTOCOL_VIOLATION",
                    GatewayError::Unknown { .. } => "GATEWAY_ERROR",
                };
                tracing::warn!(error = %gateway, "Summarization webhook call failed");
                (StatusCode::BAD_GATEWAY, code, gateway.to_string())
            }

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Reconciliation failures ---
            // Dedicated response shape: the fresh content rides along with
            // the error so the caller still has the valid summary whose
            // persistence failed. The store-side detail is logged, never
            // returned.
            AppError::PartialReconciliation {
                title,
                summary,
                thumbnail_url,
                detail,
            } => {
                tracing::error!(error = %detail, "Generated summary could not be persisted");
                let body = json!({
                    "error": "Summary was generated but could not be persisted",
                    "code": "RECONCILIATION_FAILED",
                    "summary": {
                        "title": title,
                        "summary": summary,
                        "thumbnail_url": thumbnail_url,
                    },
                });
                return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response();
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message; the raw
///   database error is logged, never sent to clients.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PERSISTENCE_FAILURE",
                "A storage error occurred".to_string(),
            )
        }
    }
}
