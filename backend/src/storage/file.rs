//! File-backed session storage for native builds.
//!
//! Each key maps to `<base_dir>/<key>.json`. The directory is created on first write.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::traits::SessionStorage;

#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    base_dir: PathBuf,
}

impl FileSessionStorage {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // keep keys from escaping the base directory
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.base_dir.join(format!("{}.json", file_name))
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read session file {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .with_context(|| format!("Failed to create session directory {}", self.base_dir.display()))?;

        let path = self.path_for(key);
        // write then rename so a crash never leaves half a record behind
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)
            .with_context(|| format!("Failed to write session file {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &path)
            .with_context(|| format!("Failed to move session file into place at {}", path.display()))?;

        debug!("Stored session record at {}", path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove session file {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Storage rooted in a temp dir that is removed on drop
    struct TestEnvironment {
        _temp_dir: TempDir,
        storage: FileSessionStorage,
    }

    impl TestEnvironment {
        fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let storage = FileSessionStorage::new(temp_dir.path().join("session"));
            Self { _temp_dir: temp_dir, storage }
        }
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let env = TestEnvironment::new();
        assert_eq!(env.storage.get("svasthify_user").unwrap(), None);
        // removing before anything was written is fine
        env.storage.remove("svasthify_user").unwrap();
    }

    #[test]
    fn test_round_trip_through_disk() {
        let env = TestEnvironment::new();
        env.storage.set("svasthify_user", r#"{"id":"1"}"#).unwrap();

        let path = env.storage.base_dir().join("svasthify_user.json");
        assert!(path.exists());
        assert_eq!(
            env.storage.get("svasthify_user").unwrap().as_deref(),
            Some(r#"{"id":"1"}"#)
        );

        // a second handle on the same directory sees the record
        let reopened = FileSessionStorage::new(env.storage.base_dir());
        assert!(reopened.get("svasthify_user").unwrap().is_some());

        env.storage.remove("svasthify_user").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_keys_cannot_escape_directory() {
        let env = TestEnvironment::new();
        env.storage.set("../outside", "x").unwrap();

        assert!(env.storage.base_dir().join("___outside.json").exists());
        assert_eq!(env.storage.get("../outside").unwrap().as_deref(), Some("x"));
    }
}
