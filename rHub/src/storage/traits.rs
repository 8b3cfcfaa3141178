//! Storage trait definitions.

use crate::error::{Error, Result};

/// Trait for durable string key/value backends.
///
/// Operations are synchronous so that a caller can update memory and
/// storage in one step without yielding in between.
pub trait KeyValueStorage: Send + Sync + std::fmt::Debug {
    /// Get a value by key.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value by key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Set several values at once.
    ///
    /// Backends that can commit a batch in one write should override this.
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Remove several values at once.
    fn remove_many(&self, keys: &[&str]) -> Result<()> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// Extension trait for storage with typed operations.
pub trait KeyValueStorageExt: KeyValueStorage {
    /// Get a JSON-deserialized value. Unparseable entries read as `None`.
    fn get_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let data = self.get(key)?;
        serde_json::from_str(&data).ok()
    }

    /// Set a JSON-serialized value.
    fn set_json<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let data = serde_json::to_string(value).map_err(Error::Json)?;
        self.set(key, &data)
    }
}

// Blanket implementation
impl<T: KeyValueStorage + ?Sized> KeyValueStorageExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TestData {
        value: String,
    }

    #[test]
    fn test_storage_ext() {
        let storage = MemoryStorage::new();
        let value = TestData {
            value: "hello".into(),
        };

        storage.set_json("test", &value).unwrap();
        let result: Option<TestData> = storage.get_json("test");
        assert_eq!(result, Some(value));
    }

    #[test]
    fn test_get_json_rejects_garbage() {
        let storage = MemoryStorage::new();
        storage.set("test", "undefined").unwrap();

        let result: Option<TestData> = storage.get_json("test");
        assert!(result.is_none());
    }
}
