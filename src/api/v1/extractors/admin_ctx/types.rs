/*
 * Responsibility
 * - The authenticated context handlers see for admin routes
 * - The admin gate verifies the token and stores this in request extensions;
 *   handlers only ever receive this type
 */
use crate::services::auth::Claims;

/// Context attached to a request that passed the admin gate.
///
/// `user` is the decoded token payload exactly as the issuer encoded it.
#[derive(Debug, Clone)]
pub struct AdminCtx {
    pub user: Claims,
}

impl AdminCtx {
    pub fn new(user: Claims) -> Self {
        Self { user }
    }
}
