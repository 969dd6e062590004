/*!
 * Route guard for the admin front end
 *
 * Responsibility:
 * - Decide, before a protected view renders, whether to render it or to
 *   redirect to the login view
 * - Carry the attempted location so the login flow can send the user back
 *
 * This is the UX half of the double gate. It never replaces the server-side
 * admin gate: a client can always skip it.
 *
 * Public API:
 * - AuthService, ProtectedRoute, resolve
 * - Location, Navigate, RedirectState, AuthStatus, GuardOutcome
 */

mod core;
mod types;

pub use self::core::{AuthService, GuardOutcome, ProtectedRoute, resolve};
pub use types::{
    AuthStatus, DEFAULT_AFTER_LOGIN_PATH, LOGIN_PATH, Location, Navigate, RedirectState,
};
