//! Route definitions for the `/summaries` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::summaries;
use crate::state::AppState;

/// Routes mounted at `/summaries`.
///
/// ```text
/// POST   /                    -> save_summary
/// GET    /                    -> list_summaries
/// POST   /generate            -> generate_summary
/// POST   /resummarize         -> resummarize_unsaved
/// GET    /{id}                -> get_summary
/// DELETE /{id}                -> delete_summary
/// POST   /{id}/resummarize    -> resummarize_saved
/// GET    /{id}/download       -> download_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(summaries::save_summary).get(summaries::list_summaries),
        )
        .route("/generate", post(summaries::generate_summary))
        .route("/resummarize", post(summaries::resummarize_unsaved))
        .route(
            "/{id}",
            get(summaries::get_summary).delete(summaries::delete_summary),
        )
        .route("/{id}/resummarize", post(summaries::resummarize_saved))
        .route("/{id}/download", get(summaries::download_summary))
}
