//! File-backed backend

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::StoreError;
use crate::kv::{validate_key, Kv};

/// Directory-backed key-value store
///
/// One file per key inside a dedicated directory. Writes go through a
/// sibling temp file followed by a rename, so a crash mid-write leaves
/// either the old value or the new one, never a torn file. Reads of a
/// missing key are `Ok(None)`.
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
        debug!(dir = %dir.display(), "file store opened");
        Ok(Self { dir })
    }

    /// Root directory of this store
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

impl std::fmt::Debug for FileKv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileKv").field("dir", &self.dir).finish()
    }
}

impl Kv for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let mut tmp =
            NamedTempFile::new_in(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;
        tmp.write_all(value.as_bytes())
            .map_err(|e| StoreError::io(tmp.path().to_path_buf(), e))?;
        tmp.persist(&path)
            .map_err(|e| StoreError::io(&path, e.error))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, FileKv) {
        let dir = TempDir::new().unwrap();
        let store = FileKv::new(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn put_then_get_round_trips() {
        let (_dir, store) = open_store();
        store.put("cart", r#"[{"id":1,"quantity":2}]"#).unwrap();
        assert_eq!(
            store.get("cart").unwrap().as_deref(),
            Some(r#"[{"id":1,"quantity":2}]"#)
        );
    }

    #[test]
    fn get_missing_is_none() {
        let (_dir, store) = open_store();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn put_replaces_whole_value() {
        let (_dir, store) = open_store();
        store.put("cart", "a much longer original value").unwrap();
        store.put("cart", "short").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn remove_deletes_and_tolerates_absent() {
        let (_dir, store) = open_store();
        store.put("cart", "[]").unwrap();
        store.remove("cart").unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
        store.remove("cart").unwrap();
    }

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileKv::new(dir.path()).unwrap();
            store.put("cart", "[]").unwrap();
        }
        let store = FileKv::new(dir.path()).unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn key_cannot_escape_directory() {
        let (_dir, store) = open_store();
        assert!(store.put("../escape", "x").is_err());
        assert!(store.get("..").is_err());
    }
}
