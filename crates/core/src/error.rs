use crate::types::SummaryId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound {
        entity: &'static str,
        id: SummaryId,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Incomplete summary: {0}")]
    IncompleteData(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
