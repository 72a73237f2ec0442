use shared::models::UserProfile;
use yewdux::Store;

use crate::storage::Session;

const FALLBACK_NAME: &str = "there";

/// Global authentication state shared by the navbar and the pages.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<UserProfile>,
    pub authenticated: bool,
    /// Set once the state has been read back from local storage.
    pub hydrated: bool,
}

impl AppState {
    /// State as last persisted in the browser.
    pub fn from_session(session: &Session) -> Self {
        Self {
            user: session.user(),
            authenticated: session.is_authenticated(),
            hydrated: true,
        }
    }

    pub fn signed_in(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            authenticated: true,
            hydrated: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            authenticated: false,
            hydrated: true,
        }
    }

    /// Name for the "Welcome back" greeting, shown whenever a profile is cached.
    pub fn display_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|user| user.display_name().unwrap_or(FALLBACK_NAME))
    }
}

/// An account created on the signup page, waiting to be published to the
/// store. Released once, either by the redirect timer or when the page
/// unmounts first.
#[derive(Debug, Default)]
pub struct PendingSignIn {
    user: Option<UserProfile>,
}

impl PendingSignIn {
    pub fn hold(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    pub fn release(&mut self) -> Option<AppState> {
        self.user.take().map(AppState::signed_in)
    }
}
