use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::auth::Claims;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: Claims,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    /// `None` for tokens issued without `exp`
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionResponse {
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            authenticated: true,
            expires_at: claims.exp().and_then(|exp| DateTime::from_timestamp(exp, 0)),
        }
    }
}
