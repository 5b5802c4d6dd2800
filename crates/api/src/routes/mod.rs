//! Route definitions for the HTTP API.

pub mod health;
pub mod summaries;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /summaries/generate          generate a summary without persisting (POST)
/// /summaries                   save (POST), list (GET)
/// /summaries/resummarize       regenerate an unsaved summary, save as new (POST)
/// /summaries/{id}              fetch one (GET), delete (DELETE)
/// /summaries/{id}/resummarize  regenerate a saved summary in place (POST)
/// /summaries/{id}/download     export the body as plain text (GET)
/// ```
///
/// Every route here requires a bearer token. The unauthenticated health
/// probe lives outside this tree (see [`health`]).
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/summaries", summaries::router())
}
