/*
 * Responsibility
 * - /admin handlers; only reachable through the admin gate
 * - Read the verified claims from AdminCtxExtractor, never from headers
 */
use axum::Json;

use crate::api::v1::{
    dto::admin::{MeResponse, SessionResponse},
    extractors::AdminCtxExtractor,
};

pub async fn me(AdminCtxExtractor(ctx): AdminCtxExtractor) -> Json<MeResponse> {
    Json(MeResponse { user: ctx.user })
}

pub async fn session(AdminCtxExtractor(ctx): AdminCtxExtractor) -> Json<SessionResponse> {
    Json(SessionResponse::from_claims(&ctx.user))
}
