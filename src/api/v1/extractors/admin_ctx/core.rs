use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::AdminCtx;

/// Extractor handing `AdminCtx` to handlers.
/// Relies on the admin gate having inserted it into request extensions;
/// a route without the gate answers 401 instead of running unauthenticated.
pub struct AdminCtxExtractor(pub AdminCtx);

impl FromRequestParts<AppState> for AdminCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminCtx>()
            .cloned()
            .map(AdminCtxExtractor)
            .ok_or_else(|| {
                tracing::error!(path = %parts.uri.path(), "admin context missing; gate not applied");
                AppError::InvalidToken
            })
    }
}
