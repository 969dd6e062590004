//! Admin gate: bearer token verification → `AdminCtx` in request extensions.
//!
//! - `Authorization` missing → 401 `No authorization header`
//! - no token after the scheme → 401 `No token provided`
//! - secret missing / bad signature / malformed / expired → 401 `Invalid token`
//!
//! Every rejection is logged before the response goes out. Nothing is retried.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AdminCtx;
use crate::error::AppError;
use crate::services::auth::VerifyError;
use crate::state::AppState;

/// Put the admin gate in front of every route of `router`.
///
/// Applied with `route_layer`, so unknown paths still fall through to the
/// 404 fallback instead of answering 401.
///
/// ```ignore
/// let admin = Router::new().route("/me", get(me));
/// let admin = middleware::auth::admin::apply(admin, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, admin_middleware))
}

async fn admin_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let claims = match state.verifier.verify_headers(req.headers()) {
        Ok(claims) => claims,
        Err(err) => {
            log_rejection(&err, req.method().as_str(), req.uri().path());
            return Err(err.into());
        }
    };

    tracing::debug!(sub = ?claims.sub(), "admin request authenticated");

    // middleware → extractor
    req.extensions_mut().insert(AdminCtx::new(claims));

    Ok(next.run(req).await)
}

fn log_rejection(err: &VerifyError, method: &str, path: &str) {
    match err {
        VerifyError::MissingHeader | VerifyError::MissingToken => {
            tracing::warn!(%method, %path, reason = %err, "admin request rejected");
        }
        VerifyError::Misconfigured => {
            tracing::error!(%method, %path, "admin request rejected: signing secret is not configured");
        }
        VerifyError::Invalid(e) => {
            tracing::warn!(%method, %path, error = ?e, "access token verification failed");
        }
    }
}
