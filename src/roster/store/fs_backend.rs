use super::backend::KeyValueBackend;
use crate::error::{Result, RosterError};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Filesystem backend: every key is a `<key>.json` file under one directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn item_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(RosterError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RosterError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueBackend for FsBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        debug!(path = %path.display(), "reading item");
        let content = fs::read_to_string(&path).map_err(RosterError::Io)?;
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let target = self.item_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp = self.root.join(format!(
            ".{}-{}-{}.tmp",
            key,
            process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::write(&tmp, value).map_err(RosterError::Io)?;
        fs::rename(&tmp, &target).map_err(RosterError::Io)?;
        debug!(path = %target.display(), bytes = value.len(), "wrote item");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path());
        assert_eq!(backend.get_item("appData").unwrap(), None);
    }

    #[test]
    fn set_then_get_creates_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path().join("nested").join("store"));
        backend.set_item("appData", "[]").unwrap();
        assert_eq!(backend.get_item("appData").unwrap().as_deref(), Some("[]"));
        assert!(backend.root().join("appData.json").exists());
    }

    #[test]
    fn set_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path());
        backend.set_item("appData", "[1]").unwrap();
        backend.set_item("appData", "[2]").unwrap();
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["appData.json".to_string()]);
    }

    #[test]
    fn rejects_keys_that_escape_the_root() {
        let backend = FsBackend::new("/tmp/unused");
        assert!(backend.item_path("../etc").is_err());
        assert!(backend.item_path("").is_err());
    }
}
