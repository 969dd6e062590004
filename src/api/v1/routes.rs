/*
 * Responsibility
 * - v1 URL layout
 * - /health is public; everything under /admin goes through the admin gate
 */
use axum::{Router, routing::get};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{
    admin::{me, session},
    health::health,
};

pub fn routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/me", get(me))
        .route("/session", get(session));
    let admin = middleware::auth::admin::apply(admin, state);

    Router::new()
        .route("/health", get(health))
        .nest("/admin", admin)
}
