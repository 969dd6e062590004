use super::{AuthStatus, Location, Navigate};

/// Synchronous authentication predicate supplied by the front end's auth
/// service. Must already be resolved when the guard runs.
pub trait AuthService {
    fn is_authenticated(&self) -> bool;
}

impl<F> AuthService for F
where
    F: Fn() -> bool,
{
    fn is_authenticated(&self) -> bool {
        self()
    }
}

/// What the guard produced for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome<C> {
    /// Children, untouched.
    Render(C),
    /// Replace-navigate to the login view.
    Redirect(Navigate),
    /// Auth state not resolved yet: render neither children nor redirect.
    Pending,
}

impl<C> GuardOutcome<C> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }

    pub fn redirect(&self) -> Option<&Navigate> {
        match self {
            Self::Redirect(navigate) => Some(navigate),
            _ => None,
        }
    }

    pub fn into_children(self) -> Option<C> {
        match self {
            Self::Render(children) => Some(children),
            _ => None,
        }
    }
}

/// Wraps protected view trees.
///
/// ```ignore
/// let guard = ProtectedRoute::new(&auth);
/// match guard.guard(&location, dashboard) {
///     GuardOutcome::Render(view) => render(view),
///     GuardOutcome::Redirect(to) => navigate(to),
///     GuardOutcome::Pending => {}
/// }
/// ```
pub struct ProtectedRoute<'a, A: AuthService + ?Sized> {
    auth: &'a A,
}

impl<'a, A: AuthService + ?Sized> ProtectedRoute<'a, A> {
    pub fn new(auth: &'a A) -> Self {
        Self { auth }
    }

    pub fn guard<C>(&self, location: &Location, children: C) -> GuardOutcome<C> {
        resolve(
            AuthStatus::from(self.auth.is_authenticated()),
            location,
            children,
        )
    }
}

/// Decision for an already-known auth status.
pub fn resolve<C>(status: AuthStatus, location: &Location, children: C) -> GuardOutcome<C> {
    match status {
        AuthStatus::Authenticated => GuardOutcome::Render(children),
        AuthStatus::Unauthenticated => GuardOutcome::Redirect(Navigate::to_login(location.clone())),
        AuthStatus::Pending => GuardOutcome::Pending,
    }
}
