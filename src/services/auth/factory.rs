//! Factory: build `TokenVerifier` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::TokenVerifier;

pub fn build_token_verifier(config: &Config) -> Arc<TokenVerifier> {
    let verifier = TokenVerifier::new(config.jwt_secret.as_deref(), config.jwt_leeway_seconds);

    if !verifier.is_configured() {
        // Keep serving: public routes still work and admin routes answer 401
        tracing::warn!("JWT_SECRET is not set; every admin request will be rejected");
    }

    Arc::new(verifier)
}
