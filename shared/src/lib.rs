use serde::{Deserialize, Serialize};

// Navigation configuration table (menus, footer, call-to-action links)
pub mod layout;
pub use layout::{LayoutConfig, NavLink, NavMenu};

// API client types and trait
pub mod api;
pub use api::{ApiClientConfig, ApiError, SessionApi};

// Sign-out sequencing against the session API and the navigation layer
pub mod sign_out;
pub use sign_out::{sign_out, ClientNavigation, HOME_PATH};

/// The signed-in user as reported by `/api/auth/me`.
///
/// Extra fields sent by the backend (ids, avatar urls, flags) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl CurrentUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Text shown in the avatar when no image is available.
    ///
    /// The email is split on spaces and the first character of every
    /// non-empty piece is kept, so `"a@b.com"` becomes `"a"`.
    pub fn avatar_fallback(&self) -> String {
        self.email
            .split(' ')
            .filter_map(|piece| piece.chars().next())
            .collect()
    }

    /// Accessible label for the avatar: the display name, or empty.
    pub fn avatar_alt(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// What the header knows about the current session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// The session provider has not answered yet
    #[default]
    NotLoaded,
    /// The provider answered and nobody is signed in
    LoggedOut,
    LoggedIn(CurrentUser),
}

impl SessionState {
    pub fn is_loaded(&self) -> bool {
        !matches!(self, SessionState::NotLoaded)
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            SessionState::LoggedIn(user) => Some(user),
            _ => None,
        }
    }
}

impl From<Option<CurrentUser>> for SessionState {
    fn from(user: Option<CurrentUser>) -> Self {
        match user {
            Some(user) => SessionState::LoggedIn(user),
            None => SessionState::LoggedOut,
        }
    }
}
