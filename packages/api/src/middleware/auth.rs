use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use shared::models::auth::Identity;
use shared::services::auth_service::IdentityResolver;
use shared::services::errors::auth_service_errors::AuthServiceError;

use crate::{error::ApiError, state::AppState};

/// The caller of a route that requires sign-in.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub identity: Identity,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = state
            .identity_resolver
            .resolve(bearer_token(parts), true)?
            .ok_or(ApiError::AuthService(AuthServiceError::Unauthorized))?;

        Ok(AuthenticatedUser { identity })
    }
}

/// Token from an `Authorization: Bearer <token>` header. Any other shape
/// counts as no credentials.
pub fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
