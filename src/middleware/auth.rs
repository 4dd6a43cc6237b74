//! Auth extractor: bearer-token gate for protected endpoints.

use axum::http::header::AUTHORIZATION;
use tracing::warn;

use crate::error::AppError;
use crate::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Extractor: verified subject email from a `Authorization: Bearer <token>`
/// header. Rejection is 401 for a missing header, a malformed token, a bad
/// signature, or an expired token alike.
#[derive(Clone, Debug)]
pub struct AuthUser(pub String);

#[axum::async_trait]
impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix(BEARER_PREFIX))
            .ok_or_else(|| AppError::Auth("No token provided".to_string()))?;

        let claims = state.jwt_secret().validate(token).map_err(|e| {
            // Never log the token itself, only a short prefix.
            warn!(token_prefix = %&token[..token.len().min(8)], "rejected bearer token");
            e
        })?;

        Ok(AuthUser(claims.sub))
    }
}
