use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where unauthenticated users are sent.
pub const LOGIN_PATH: &str = "/admin/login";

/// Where the login flow lands when no usable `from` was carried.
pub const DEFAULT_AFTER_LOGIN_PATH: &str = "/admin/dashboard";

/// A navigation location, shaped like the router's location object so it can
/// be handed to the front end as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub pathname: String,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub state: Value,
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    "default".to_string()
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: String::new(),
            hash: String::new(),
            state: Value::Null,
            key: default_key(),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// `pathname + search + hash`
    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

/// State carried by the login redirect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedirectState {
    pub from: Location,
}

impl RedirectState {
    /// Destination after a successful login.
    ///
    /// Only same-origin absolute paths are honoured; anything else (or a
    /// `from` pointing back at the login page) falls back to the dashboard.
    pub fn return_to(state: Option<&RedirectState>) -> String {
        state
            .map(|s| &s.from)
            .filter(|from| is_local_path(&from.pathname) && from.pathname != LOGIN_PATH)
            .map(Location::href)
            .unwrap_or_else(|| DEFAULT_AFTER_LOGIN_PATH.to_string())
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}

/// A redirect element: navigate to `to`, optionally replacing the current
/// history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navigate {
    pub to: String,
    pub replace: bool,
    pub state: RedirectState,
}

impl Navigate {
    pub fn to_login(from: Location) -> Self {
        Self {
            to: LOGIN_PATH.to_string(),
            replace: true,
            state: RedirectState { from },
        }
    }
}

/// Authentication as seen by the front end.
///
/// `Pending` exists for auth services that resolve asynchronously; the
/// synchronous predicate path never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    Authenticated,
    Unauthenticated,
    Pending,
}

impl From<bool> for AuthStatus {
    fn from(authenticated: bool) -> Self {
        if authenticated {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}
