use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StoreError;

pub const KEY_TOKEN: &str = "token";
pub const KEY_THEME: &str = "theme";
pub const KEY_MOVIES: &str = "movies";

/// JSON key-value store, one file per key.
///
/// Backs the local collection, the persisted token, and the theme setting.
/// The default root lives under the platform data directory; tests point it
/// at a temporary directory instead.
#[derive(Debug, Clone)]
pub struct KeyValueStore {
    root: PathBuf,
}

impl KeyValueStore {
    pub fn open_default() -> Self {
        let mut root = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        root.push("cinelog/state");
        Self { root }
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// Reads and deserializes a key. A missing file reads as `None`;
    /// unreadable or corrupt content is an error.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path(key);
        let content = match async_fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };
        let value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path(key);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(value)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Removes a key. Removing an absent key is a no-op.
    pub async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path(key);
        match async_fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// True if the key currently has a persisted value.
    pub async fn contains(&self, key: &str) -> bool {
        async_fs::metadata(self.path(key))
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}
