//! The two durable session entries: token and user profile.

use std::sync::Arc;

use super::traits::{KeyValueStorage, KeyValueStorageExt};
use crate::error::Result;
use crate::models::UserProfile;

/// Storage key of the auth token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the JSON-serialized user profile.
pub const USER_INFO_KEY: &str = "userInfo";

/// Placeholder strings left behind by careless writers.
const PLACEHOLDERS: [&str; 2] = ["undefined", "null"];

/// What was found under the profile key.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredProfile {
    /// Nothing stored.
    Absent,
    /// A readable profile object.
    Valid(UserProfile),
    /// Something that is not a profile object.
    Corrupt,
}

/// Typed view over a [`KeyValueStorage`] holding the session entries.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl CredentialStore {
    /// Wrap a storage backend.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Read the token. Empty and placeholder values read as `None`.
    pub fn token(&self) -> Option<String> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|t| !is_placeholder(t))
    }

    /// Read the profile entry.
    pub fn profile(&self) -> StoredProfile {
        match self.storage.get(USER_INFO_KEY) {
            None => StoredProfile::Absent,
            Some(raw) if raw.trim().is_empty() => StoredProfile::Absent,
            Some(raw) if is_placeholder(&raw) => StoredProfile::Corrupt,
            Some(_) => match self.storage.get_json::<UserProfile>(USER_INFO_KEY) {
                Some(profile) => StoredProfile::Valid(profile),
                None => StoredProfile::Corrupt,
            },
        }
    }

    /// Write both entries in one batch.
    pub fn save(&self, token: &str, profile: &UserProfile) -> Result<()> {
        let profile_json = serde_json::to_string(profile)?;
        self.storage
            .set_many(&[(TOKEN_KEY, token), (USER_INFO_KEY, &profile_json)])
    }

    /// Remove both entries in one batch.
    ///
    /// When the batch removal fails each key is removed on its own, token
    /// first. The first failure is returned only if an entry is left behind.
    pub fn purge(&self) -> Result<()> {
        let Err(batch_error) = self.storage.remove_many(&[TOKEN_KEY, USER_INFO_KEY]) else {
            return Ok(());
        };
        log::warn!("Batch removal of session entries failed ({}), removing one by one", batch_error);

        let mut first_error = None;
        for key in [TOKEN_KEY, USER_INFO_KEY] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("Failed to remove '{}': {}", key, e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// The underlying storage.
    pub fn storage(&self) -> &Arc<dyn KeyValueStorage> {
        &self.storage
    }
}

fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || PLACEHOLDERS.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn store_with(entries: &[(&str, &str)]) -> CredentialStore {
        let storage = MemoryStorage::with_entries(entries.iter().copied());
        CredentialStore::new(Arc::new(storage))
    }

    #[test]
    fn test_save_then_read() {
        let store = store_with(&[]);
        let profile = UserProfile::new(7, "alice", 2);

        store.save("abc123", &profile).unwrap();

        assert_eq!(store.token().as_deref(), Some("abc123"));
        assert_eq!(store.profile(), StoredProfile::Valid(profile));
    }

    #[test]
    fn test_placeholders() {
        let store = store_with(&[(TOKEN_KEY, "undefined"), (USER_INFO_KEY, "undefined")]);
        assert_eq!(store.token(), None);
        assert_eq!(store.profile(), StoredProfile::Corrupt);

        let store = store_with(&[(TOKEN_KEY, "null"), (USER_INFO_KEY, "null")]);
        assert_eq!(store.token(), None);
        assert_eq!(store.profile(), StoredProfile::Corrupt);
    }

    #[test]
    fn test_non_object_profile_is_corrupt() {
        for raw in ["{not json", "[1,2]", "42", "\"alice\""] {
            let store = store_with(&[(USER_INFO_KEY, raw)]);
            assert_eq!(store.profile(), StoredProfile::Corrupt, "input: {}", raw);
        }
    }

    #[test]
    fn test_absent_and_blank() {
        assert_eq!(store_with(&[]).profile(), StoredProfile::Absent);
        assert_eq!(store_with(&[(USER_INFO_KEY, "  ")]).profile(), StoredProfile::Absent);
    }

    /// Storage whose batch removal always fails.
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
            Err(crate::Error::storage("batch write failed"))
        }
    }

    #[test]
    fn test_purge_falls_back_to_single_removes() {
        let store = CredentialStore::new(Arc::new(NoBatchRemove::default()));
        store.save("t", &UserProfile::new(1, "bob", 0)).unwrap();

        store.purge().unwrap();

        assert_eq!(store.token(), None);
        assert_eq!(store.profile(), StoredProfile::Absent);
    }

    #[test]
    fn test_purge_removes_both() {
        let store = store_with(&[]);
        store.save("t", &UserProfile::default()).unwrap();
        store.purge().unwrap();

        assert_eq!(store.storage().get(TOKEN_KEY), None);
        assert_eq!(store.storage().get(USER_INFO_KEY), None);
    }
}
