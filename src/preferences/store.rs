use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Failed to access preference file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preference file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to lock preference file '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// String key-value slots persisted across sessions.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preferences kept in a flat TOML table on disk.
///
/// Writes hold an exclusive lock on a sidecar `.lock` file and replace the
/// table atomically. Keys this build does not know about are kept.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.config/walaoe/preferences.toml` or the platform equivalent.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("walaoe").join("preferences.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        toml::from_str(&content).map_err(|e| PreferenceError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write_table(&self, table: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let content = toml::to_string(table)?;
        let tmp_path = self.path.with_extension("toml.tmp");
        let mut tmp = File::create(&tmp_path).map_err(|e| self.io_error(e))?;
        let written = tmp
            .write_all(content.as_bytes())
            .and_then(|_| tmp.sync_all());
        drop(tmp);

        written
            .and_then(|_| fs::rename(&tmp_path, &self.path))
            .map_err(|e| {
                if let Err(cleanup) = fs::remove_file(&tmp_path) {
                    tracing::warn!(
                        path = %tmp_path.display(),
                        error = %cleanup,
                        "Failed to remove temporary preference file"
                    );
                }
                self.io_error(e)
            })
    }

    fn lock(&self) -> Result<File, PreferenceError> {
        let lock_path = self.path.with_extension("lock");
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| PreferenceError::Lock {
                path: lock_path.clone(),
                source: e,
            })?;
        file.lock_exclusive().map_err(|e| PreferenceError::Lock {
            path: lock_path,
            source: e,
        })?;
        Ok(file)
    }

    fn io_error(&self, source: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_table()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let lock = self.lock()?;
        let _unlock = scopeguard::guard(lock, |lock| {
            let _ = FileExt::unlock(&lock);
        });

        let mut table = self.read_table()?;
        table.insert(key.to_string(), value.to_string());
        self.write_table(&table)
    }
}

/// Process-local store. Nothing survives the process.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.lock().insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.toml"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn set_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.toml");
        let store = FilePreferenceStore::new(&path);
        store.set("theme", "dark").unwrap();
        assert!(path.exists());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn set_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "font = \"mono\"\ntheme = \"light\"\n").unwrap();

        let store = FilePreferenceStore::new(&path);
        store.set("theme", "dark").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("font = \"mono\""));
        assert!(content.contains("theme = \"dark\""));
    }

    #[test]
    fn corrupt_file_reports_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "theme = [unterminated").unwrap();
        let store = FilePreferenceStore::new(&path);
        assert!(matches!(store.get("theme"), Err(PreferenceError::Parse { .. })));
    }

    #[test]
    fn failed_write_leaves_no_temporary_file() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory where the table should go makes the rename fail
        let path = dir.path().join("prefs.toml");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();

        let store = FilePreferenceStore::new(&path);
        let table = BTreeMap::from([("theme".to_string(), "dark".to_string())]);
        assert!(matches!(store.write_table(&table), Err(PreferenceError::Io { .. })));
        assert!(!dir.path().join("prefs.toml.tmp").exists());
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryPreferenceStore::with_value("theme", "dark");
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }
}
