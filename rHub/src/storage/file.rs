//! File-backed storage implementation.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use super::traits::KeyValueStorage;
use crate::error::{Error, Result};

/// Storage persisted as a flat JSON object in a single file.
///
/// Every mutation rewrites the whole file through a temporary sibling and a
/// rename, so a crash never leaves a half-written file behind.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    data: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open storage at `path`.
    ///
    /// A missing file is an empty storage. A file that does not hold a JSON
    /// object of strings is also read as empty and will be overwritten on
    /// the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let data = match fs::read_to_string(&path) {
            Ok(content) => parse_entries(&content).unwrap_or_else(|| {
                log::warn!("Ignoring unreadable storage file {}", path.display());
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(Error::storage(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        Ok(Self {
            path,
            data: Mutex::new(data),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = data.clone();
        f(&mut next);
        if next == *data {
            return Ok(());
        }
        self.flush(&next)?;
        *data = next;
        Ok(())
    }

    fn flush(&self, data: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(data)?;
        let tmp = self.path.with_extension("tmp");

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| Error::storage(format!("failed to create {}: {}", parent.display(), e)))?;
        }
        fs::write(&tmp, content)
            .map_err(|e| Error::storage(format!("failed to write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            Error::storage(format!("failed to replace {}: {}", self.path.display(), e))
        })
    }
}

fn parse_entries(content: &str) -> Option<BTreeMap<String, String>> {
    if content.trim().is_empty() {
        return Some(BTreeMap::new());
    }
    serde_json::from_str(content).ok()
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        data.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|data| {
            data.insert(key.to_owned(), value.to_owned());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|data| {
            data.remove(key);
        })
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        self.update(|data| {
            for (key, value) in entries {
                data.insert((*key).to_owned(), (*value).to_owned());
            }
        })
    }

    fn remove_many(&self, keys: &[&str]) -> Result<()> {
        self.update(|data| {
            for key in keys {
                data.remove(*key);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set_many(&[("token", "abc"), ("userInfo", "{}")]).unwrap();
        drop(storage);

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get("token").as_deref(), Some("abc"));
        assert_eq!(storage.get("userInfo").as_deref(), Some("{}"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("absent.json")).unwrap();

        assert_eq!(storage.get("token"), None);
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, "not json at all").unwrap();

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get("token"), None);

        storage.set("token", "abc").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"token\": \"abc\""));
    }

    #[test]
    fn test_remove_many_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set_many(&[("token", "abc"), ("userInfo", "{}"), ("other", "x")]).unwrap();
        storage.remove_many(&["token", "userInfo"]).unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("token"), None);
        assert_eq!(reopened.get("userInfo"), None);
        assert_eq!(reopened.get("other").as_deref(), Some("x"));
    }
}
