use super::SnapshotStore;
use crate::error::{NoteError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store: each key is one file under the root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        // Keys are flat names; anything that could escape the root is a
        // programming error upstream.
        if key.is_empty() || key.contains(|c: char| c == '/' || c == '\\' || c == '.') {
            return Err(NoteError::Store(format!("Invalid store key: {:?}", key)));
        }
        Ok(self.root.join(key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NoteError::Io)?;
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(NoteError::Io)?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;
        let path = self.key_path(key)?;
        debug!(key, bytes = value.len(), "writing snapshot");
        fs::write(path, value).map_err(NoteError::Io)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            debug!(key, "removing snapshot");
            fs::remove_file(path).map_err(NoteError::Io)?;
        }
        Ok(())
    }
}
