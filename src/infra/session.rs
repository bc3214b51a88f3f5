//! File-backed key-value storage for the resumable session.
//!
//! The file holds a flat JSON object of string keys to string values, the
//! same shape a browser's local storage would have. The signed-in user is
//! kept as a JSON blob under [`USER_KEY`].

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::{SessionStorage, StorageError, UserResponse};

pub const USER_KEY: &str = "user";

pub struct FileSessionStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock();
        Ok(self.read_map()?.remove(key))
    }

    pub fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        let (mut map, _) = self.writable_map()?;
        map.insert(key.to_string(), value);
        self.write_map(&map)
    }

    pub fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        let (mut map, corrupt) = self.writable_map()?;
        if map.remove(key).is_some() || corrupt {
            self.write_map(&map)?;
        }
        Ok(())
    }

    /// Like `read_map`, but an unparseable file counts as empty so the next
    /// write replaces it. The flag says whether that happened.
    fn writable_map(&self) -> Result<(BTreeMap<String, String>, bool), StorageError> {
        match self.read_map() {
            Ok(map) => Ok((map, false)),
            Err(StorageError::Corrupt(err)) => {
                log::warn!(
                    "Replacing unreadable session storage {}: {}",
                    self.path.display(),
                    err
                );
                Ok((BTreeMap::new(), true))
            }
            Err(err) => Err(err),
        }
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(map)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SessionStorage for FileSessionStorage {
    fn load_user(&self) -> Option<UserResponse> {
        let raw = match self.get_item(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                log::warn!("Failed to read session storage {}: {}", self.path.display(), err);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("Discarding unreadable stored user: {}", err);
                None
            }
        }
    }

    fn save_user(&self, user: &UserResponse) -> Result<(), StorageError> {
        self.set_item(USER_KEY, serde_json::to_string(user)?)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.remove_item(USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn user() -> UserResponse {
        UserResponse {
            id: 12,
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@navy.mil".into(),
        }
    }

    #[test]
    fn missing_file_means_no_session() {
        let dir = TempDir::new().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("nested").join("session.json"));
        assert!(storage.load_user().is_none());
    }

    #[test]
    fn user_survives_a_new_handle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        FileSessionStorage::new(&path).save_user(&user()).unwrap();

        let reopened = FileSessionStorage::new(&path);
        assert_eq!(reopened.load_user(), Some(user()));
        let raw = reopened.get_item(USER_KEY).unwrap().unwrap();
        assert!(!raw.contains("password"));
    }

    #[test]
    fn clear_keeps_unrelated_keys() {
        let dir = TempDir::new().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));
        storage.set_item("theme", "dark".into()).unwrap();
        storage.save_user(&user()).unwrap();

        storage.clear().unwrap();

        assert!(storage.load_user().is_none());
        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_blob_is_ignored() {
        let dir = TempDir::new().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));
        storage.set_item(USER_KEY, "{not json".into()).unwrap();
        assert!(storage.load_user().is_none());
    }

    #[test]
    fn unreadable_file_is_replaced_on_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "garbage{").unwrap();
        let storage = FileSessionStorage::new(&path);
        assert!(storage.load_user().is_none());

        storage.save_user(&user()).unwrap();
        assert_eq!(storage.load_user(), Some(user()));
    }

    #[test]
    fn clear_resets_an_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "garbage{").unwrap();
        let storage = FileSessionStorage::new(&path);

        storage.clear().unwrap();
        assert_eq!(storage.get_item(USER_KEY).unwrap(), None);
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "{}");
    }
}
