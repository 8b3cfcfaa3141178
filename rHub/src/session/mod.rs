//! Session state: the token and profile of the signed-in user.
//!
//! A [`Session`] is the only in-memory owner of the credential. It is
//! loaded from a [`KeyValueStorage`] at startup and keeps that storage in
//! step on every login and logout. The HTTP client reads the token and
//! reports rejected credentials through [`SessionHook`].

use std::sync::{Arc, PoisonError, RwLock};

use crate::client::{HubClient, SessionHook};
use crate::error::{Error, Result};
use crate::models::{LoginForm, UserProfile};
use crate::router::{Redirect, LOGIN_PATH};
use crate::storage::{CredentialStore, KeyValueStorage, StoredProfile};

/// Token and profile at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Auth token. Empty when signed out.
    pub token: String,
    /// User profile. Empty when unset.
    pub profile: UserProfile,
}

impl SessionState {
    /// Whether a token is held.
    pub fn is_logged_in(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Process-wide session.
pub struct Session {
    state: RwLock<SessionState>,
    store: CredentialStore,
    redirect: RwLock<Option<Arc<dyn Redirect>>>,
}

impl Session {
    /// Load the session from storage.
    ///
    /// Never fails. A profile entry that cannot be read is dropped together
    /// with the token, and both durable entries are purged.
    pub fn initialize(storage: Arc<dyn KeyValueStorage>) -> Self {
        let store = CredentialStore::new(storage);

        let state = match store.profile() {
            StoredProfile::Corrupt => {
                log::warn!("Stored user profile is unreadable, clearing saved session");
                if let Err(e) = store.purge() {
                    log::warn!("Failed to clear saved session: {}", e);
                }
                SessionState::default()
            }
            StoredProfile::Valid(profile) => SessionState {
                token: store.token().unwrap_or_default(),
                profile,
            },
            StoredProfile::Absent => SessionState {
                token: store.token().unwrap_or_default(),
                profile: UserProfile::default(),
            },
        };

        log::debug!("Session initialized (logged in: {})", state.is_logged_in());

        Self {
            state: RwLock::new(state),
            store,
            redirect: RwLock::new(None),
        }
    }

    /// Set where logout sends the user.
    pub fn with_redirect(self, redirect: Arc<dyn Redirect>) -> Self {
        self.set_redirect(Some(redirect));
        self
    }

    /// Replace or clear the logout redirect target.
    pub fn set_redirect(&self, redirect: Option<Arc<dyn Redirect>>) {
        *self.redirect.write().unwrap_or_else(PoisonError::into_inner) = redirect;
    }

    /// Detach the session from navigation.
    ///
    /// Token, profile and storage are left as they are.
    pub fn teardown(&self) {
        self.set_redirect(None);
        log::debug!("Session torn down");
    }

    /// Sign in and keep the issued token.
    ///
    /// Transport and server errors are returned unchanged and leave the
    /// session untouched.
    pub async fn login(&self, client: &HubClient, username: &str, password: &str) -> Result<()> {
        let form = LoginForm {
            username: username.to_owned(),
            password: password.to_owned(),
        };

        let data = client.users().login(&form).await?.into_data();

        let token = data
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::missing("token"))?;

        self.commit(token, data.profile())
    }

    /// Write token and profile to storage and memory as one step.
    fn commit(&self, token: String, profile: UserProfile) -> Result<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        self.store.save(&token, &profile)?;
        log::info!("Logged in as {}", profile.display_name());

        *state = SessionState { token, profile };
        Ok(())
    }

    /// Sign out.
    ///
    /// Clears token and profile, purges storage and redirects to the login
    /// route. Calling it again changes nothing.
    ///
    /// Memory is always cleared. If storage cannot be purged even key by
    /// key, the failure is only logged and the stored token will sign the
    /// next [`Session::initialize`] back in.
    pub fn logout(&self) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let was_logged_in = state.is_logged_in();

            *state = SessionState::default();
            if let Err(e) = self.store.purge() {
                log::warn!("Failed to clear saved session: {}", e);
            }

            if was_logged_in {
                log::info!("Logged out");
            }
        }

        let redirect = self
            .redirect
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(redirect) = redirect {
            redirect.redirect(LOGIN_PATH);
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current token. Empty when signed out.
    pub fn token(&self) -> String {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    /// Current profile.
    pub fn profile(&self) -> UserProfile {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .profile
            .clone()
    }

    /// Whether a token is held.
    pub fn is_logged_in(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_logged_in()
    }

    /// Profile username, or the guest label.
    pub fn display_name(&self) -> String {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .profile
            .display_name()
            .to_owned()
    }

    /// The durable side of the session.
    pub fn credentials(&self) -> &CredentialStore {
        &self.store
    }
}

impl SessionHook for Session {
    fn credential(&self) -> Option<String> {
        Some(self.token()).filter(|t| !t.is_empty())
    }

    fn mark_unauthenticated(&self) {
        log::warn!("Credential rejected by server, logging out");
        self.logout();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.is_logged_in())
            .field("user", &self.display_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GUEST_NAME;
    use crate::storage::{MemoryStorage, TOKEN_KEY, USER_INFO_KEY};
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRedirect(Mutex<Vec<String>>);

    impl Redirect for RecordingRedirect {
        fn redirect(&self, to: &str) {
            self.0.lock().unwrap().push(to.to_owned());
        }
    }

    fn storage_with(entries: &[(&str, &str)]) -> Arc<MemoryStorage> {
        Arc::new(MemoryStorage::with_entries(entries.iter().copied()))
    }

    #[test]
    fn test_initialize_from_storage() {
        let storage = storage_with(&[
            (TOKEN_KEY, "abc123"),
            (USER_INFO_KEY, r#"{"id":7,"username":"alice","fansNumber":2}"#),
        ]);
        let session = Session::initialize(storage);

        assert!(session.is_logged_in());
        assert_eq!(session.token(), "abc123");
        assert_eq!(session.profile(), UserProfile::new(7, "alice", 2));
        assert_eq!(session.display_name(), "alice");
    }

    #[test]
    fn test_initialize_empty() {
        let session = Session::initialize(storage_with(&[]));

        assert!(!session.is_logged_in());
        assert!(session.profile().is_empty());
        assert_eq!(session.display_name(), GUEST_NAME);
    }

    #[test]
    fn test_initialize_heals_undefined_profile() {
        let storage = storage_with(&[(TOKEN_KEY, "abc123"), (USER_INFO_KEY, "undefined")]);
        let session = Session::initialize(storage.clone());

        assert!(session.profile().is_empty());
        assert!(!session.is_logged_in());
        assert_eq!(storage.get(TOKEN_KEY), None);
        assert_eq!(storage.get(USER_INFO_KEY), None);
    }

    #[test]
    fn test_initialize_heals_non_json_profile() {
        let storage = storage_with(&[(USER_INFO_KEY, "{broken")]);
        let session = Session::initialize(storage.clone());

        assert_eq!(session.snapshot(), SessionState::default());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_initialize_ignores_placeholder_token() {
        let session = Session::initialize(storage_with(&[(TOKEN_KEY, "undefined")]));
        assert!(!session.is_logged_in());
        assert_eq!(session.credential(), None);
    }

    #[test]
    fn test_logout_clears_everything_and_redirects() {
        let storage = storage_with(&[
            (TOKEN_KEY, "abc123"),
            (USER_INFO_KEY, r#"{"id":7,"username":"alice","fansNumber":2}"#),
        ]);
        let redirect = Arc::new(RecordingRedirect::default());
        let session = Session::initialize(storage.clone()).with_redirect(redirect.clone());

        session.logout();

        assert_eq!(session.snapshot(), SessionState::default());
        assert!(storage.is_empty());
        assert_eq!(*redirect.0.lock().unwrap(), vec![LOGIN_PATH.to_owned()]);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let storage = storage_with(&[(TOKEN_KEY, "abc123"), (USER_INFO_KEY, "{}")]);
        let session = Session::initialize(storage.clone());

        session.logout();
        let first = (session.snapshot(), storage.len());
        session.logout();
        let second = (session.snapshot(), storage.len());

        assert_eq!(first, second);
    }

    #[derive(Debug, Default)]
    struct NoBatchRemove(MemoryStorage);

    impl KeyValueStorage for NoBatchRemove {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.0.remove(key)
        }

        fn remove_many(&self, _keys: &[&str]) -> Result<()> {
            Err(Error::storage("batch write failed"))
        }
    }

    #[test]
    fn test_logout_survives_failed_batch_purge() {
        let storage = Arc::new(NoBatchRemove::default());
        storage.set(TOKEN_KEY, "abc123").unwrap();

        let session = Session::initialize(storage.clone());
        assert!(session.is_logged_in());

        session.logout();

        assert_eq!(storage.get(TOKEN_KEY), None);
        assert!(!Session::initialize(storage).is_logged_in());
    }

    #[test]
    fn test_teardown_detaches_redirect() {
        let redirect = Arc::new(RecordingRedirect::default());
        let session = Session::initialize(storage_with(&[])).with_redirect(redirect.clone());

        session.teardown();
        session.logout();

        assert!(redirect.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_mark_unauthenticated_logs_out() {
        let storage = storage_with(&[(TOKEN_KEY, "abc123")]);
        let session = Session::initialize(storage.clone());
        assert_eq!(session.credential().as_deref(), Some("abc123"));

        session.mark_unauthenticated();

        assert!(!session.is_logged_in());
        assert_eq!(storage.get(TOKEN_KEY), None);
    }
}
