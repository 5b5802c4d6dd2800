use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use recap_core::error::CoreError;
use recap_core::types::OwnerId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller, extracted from the `Authorization` header.
///
/// Handlers take this as an argument to require a valid bearer token;
/// the owner id scopes every store operation performed on their behalf.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub owner_id: OwnerId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing authorization header".to_string(),
                ))
            })?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid authorization header format".to_string(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|err| {
            tracing::debug!(error = %err, "Token validation failed");
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired token".to_string(),
            ))
        })?;

        Ok(AuthUser {
            owner_id: claims.sub,
        })
    }
}
