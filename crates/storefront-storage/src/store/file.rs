//! # File Store
//!
//! Keeps each key in its own file inside a data directory.
//!
//! ## Atomic Overwrite
//! ```text
//! set("@storefront:cart", json)
//!      │
//!      ▼
//! write json to  <dir>/.tmpXXXX        (same directory, same filesystem)
//!      │
//!      ▼
//! rename over    <dir>/_storefront_cart.json
//! ```
//! A crash mid-write leaves either the old file or the new one, never half of
//! each.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::KeyValueStore;
use crate::error::{StorageError, StorageResult};

/// File-backed key-value store.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    /// Returns the data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that holds `key`.
    ///
    /// Characters outside `[A-Za-z0-9._-]` become `_`, so
    /// `@storefront:cart` maps to `_storefront_cart.json`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(?path, "Slot file not found");
                Ok(None)
            }
            Err(e) => Err(StorageError::read(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| StorageError::write(key, e))?;

        let path = self.path_for(key);
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| StorageError::write(key, e))?;
        tmp.write_all(value.as_bytes())
            .map_err(|e| StorageError::write(key, e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| StorageError::write(key, e))?;
        tmp.persist(&path)
            .map_err(|e| StorageError::write(key, e.error))?;

        debug!(?path, bytes = value.len(), "Slot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("@storefront:cart").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        store.set("@storefront:cart", "[]").unwrap();
        store.set("@storefront:cart", r#"[{"id":1}]"#).unwrap();

        assert_eq!(
            store.get("@storefront:cart").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }

    #[test]
    fn test_key_to_file_name() {
        let store = FileStore::new("/data");
        assert_eq!(
            store.path_for("@storefront:cart"),
            PathBuf::from("/data/_storefront_cart.json")
        );
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
