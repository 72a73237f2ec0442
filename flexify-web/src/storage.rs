//! Browser-persisted session: the JWT pair and the cached user profile.
//!
//! Tokens live in `localStorage` under `access_token` and `refresh_token` as
//! plain strings, the profile under `user` as JSON. The pending OAuth `state`
//! is kept in `sessionStorage` so it dies with the tab.

use std::fmt;
use std::rc::Rc;

use gloo_storage::{LocalStorage, SessionStorage, Storage};
use shared::models::{AuthResponse, UserProfile};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";
const OAUTH_STATE_KEY: &str = "flexify.oauth_state";

/// Key/value string storage backing a [`Session`].
pub trait SessionStore: fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Values are written raw, not JSON-quoted.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            log::warn!("failed to write {key} to localStorage: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            log::warn!("failed to remove {key} from localStorage: {err:?}");
        }
    }
}

/// In-memory store used by native tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Typed view over the persisted authentication state.
#[derive(Debug, Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    /// Session backed by the browser's `localStorage`.
    pub fn browser() -> Self {
        Self::new(LocalSessionStore)
    }

    /// Stores the tokens and profile from a successful login, signup or
    /// Google exchange.
    pub fn persist(&self, auth: &AuthResponse) {
        self.set_access_token(&auth.tokens.access);
        self.set_refresh_token(&auth.tokens.refresh);
        self.set_user(&auth.user);
    }

    fn non_empty(&self, key: &str) -> Option<String> {
        self.store.get(key).filter(|value| !value.is_empty())
    }

    pub fn access_token(&self) -> Option<String> {
        self.non_empty(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.non_empty(REFRESH_TOKEN_KEY)
    }

    pub fn set_access_token(&self, token: &str) {
        self.store.set(ACCESS_TOKEN_KEY, token);
    }

    pub fn set_refresh_token(&self, token: &str) {
        self.store.set(REFRESH_TOKEN_KEY, token);
    }

    /// Cached profile. A blob that no longer parses is dropped.
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.non_empty(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("discarding unreadable stored user profile: {err}");
                self.store.remove(USER_KEY);
                None
            }
        }
    }

    pub fn set_user(&self, user: &UserProfile) {
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(USER_KEY, &json),
            Err(err) => log::warn!("failed to serialize user profile: {err}"),
        }
    }

    /// An access token is present. It is not validated locally.
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn clear_tokens(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
    }

    /// Forgets everything this session stored.
    pub fn logout(&self) {
        self.clear_tokens();
        self.store.remove(USER_KEY);
    }
}

/// Remembers the `state` sent to Google until the callback page checks it.
pub fn remember_oauth_state(state: &str) {
    if let Err(err) = SessionStorage::set(OAUTH_STATE_KEY, state) {
        log::warn!("failed to store OAuth state: {err}");
    }
}

/// Returns and forgets the pending OAuth `state`.
pub fn take_oauth_state() -> Option<String> {
    let state = SessionStorage::get::<String>(OAUTH_STATE_KEY).ok();
    SessionStorage::delete(OAUTH_STATE_KEY);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::TokenPair;

    fn memory_session() -> Session {
        Session::new(MemorySessionStore::default())
    }

    fn auth_response() -> AuthResponse {
        AuthResponse {
            tokens: TokenPair {
                access: "access-1".to_string(),
                refresh: "refresh-1".to_string(),
            },
            user: UserProfile {
                username: Some("flexer".to_string()),
                email: Some("flexer@example.com".to_string()),
                ..Default::default()
            },
        }
    }

    /// A fresh session holds nothing and is not authenticated.
    #[test]
    fn empty_session_is_anonymous() {
        let session = memory_session();
        assert!(!session.is_authenticated());
        assert_eq!(session.access_token(), None);
        assert_eq!(session.user(), None);
    }

    /// Persisting an auth response stores both tokens and the profile.
    #[test]
    fn persist_stores_tokens_and_user() {
        let session = memory_session();
        session.persist(&auth_response());

        assert!(session.is_authenticated());
        assert_eq!(session.access_token().as_deref(), Some("access-1"));
        assert_eq!(session.refresh_token().as_deref(), Some("refresh-1"));
        assert_eq!(
            session.user().and_then(|user| user.username),
            Some("flexer".to_string())
        );
    }

    /// Tokens are stored verbatim rather than JSON-encoded.
    #[test]
    fn tokens_are_stored_raw() {
        let store = Rc::new(MemorySessionStore::default());
        let session = Session { store: store.clone() };
        session.set_access_token("abc.def.ghi");
        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("abc.def.ghi"));
    }

    /// Clearing tokens keeps the cached profile, logout removes it too.
    #[test]
    fn clear_tokens_and_logout() {
        let session = memory_session();
        session.persist(&auth_response());

        session.clear_tokens();
        assert!(!session.is_authenticated());
        assert_eq!(session.refresh_token(), None);
        assert!(session.user().is_some());

        session.logout();
        assert_eq!(session.user(), None);
    }

    /// A corrupt profile blob reads as absent and is removed.
    #[test]
    fn corrupt_user_blob_is_discarded() {
        let store = Rc::new(MemorySessionStore::default());
        store.set(USER_KEY, "{not json");
        let session = Session { store: store.clone() };

        assert_eq!(session.user(), None);
        assert_eq!(store.get(USER_KEY), None);
    }

    /// Empty strings left behind by other code count as missing tokens.
    #[test]
    fn empty_token_is_not_authenticated() {
        let session = memory_session();
        session.set_access_token("");
        assert!(!session.is_authenticated());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_store_keeps_raw_strings() {
        let store = LocalSessionStore;
        store.set(ACCESS_TOKEN_KEY, "abc.def.ghi");
        assert_eq!(
            LocalStorage::raw().get_item(ACCESS_TOKEN_KEY).ok().flatten(),
            Some("abc.def.ghi".to_string())
        );
        store.remove(ACCESS_TOKEN_KEY);
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    }

    #[wasm_bindgen_test]
    fn oauth_state_is_taken_once() {
        remember_oauth_state("state-123");
        assert_eq!(take_oauth_state().as_deref(), Some("state-123"));
        assert_eq!(take_oauth_state(), None);
    }
}
