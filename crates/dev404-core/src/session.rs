//! Session-scoped key-value store.
//!
//! On the web the one-time boot flag lives in `sessionStorage`. Here the
//! same role is played by an injected [`SessionStore`]: an in-memory map
//! for tests and `--fresh` runs, and a small JSON file under the OS temp dir
//! for real invocations (temp dirs are cleared on reboot, which is the
//! closest terminal analogue to a browser session).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// String key-value store with session lifetime.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Purely in-memory store. Forgets everything on drop.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// JSON-file-backed store. Loads once on open, writes through on every `set`.
///
/// A missing or corrupt file degrades to an empty store; a failed write is
/// logged and otherwise ignored — losing the flag only means the boot
/// sequence plays again next time.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileSessionStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::load(&path).unwrap_or_default();
        Self { path, values }
    }

    /// Default location under the OS temp dir.
    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join("dev404-session.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Option<HashMap<String, String>> {
        let contents = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(values) => Some(values),
            Err(e) => {
                log::warn!("ignoring corrupt session file {}: {e}", path.display());
                None
            }
        }
    }

    fn persist(&self) {
        let contents = match serde_json::to_string_pretty(&self.values) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("failed to serialize session state: {e}");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, contents) {
            log::warn!("failed to write session file {}: {e}", self.path.display());
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemorySessionStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v");
        assert_eq!(store.get("k"), Some("v".to_string()));
        store.set("k", "v2");
        assert_eq!(store.get("k"), Some("v2".to_string()));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = FileSessionStore::open(&path);
        assert_eq!(store.get("dev404-boot-seen"), None);
        store.set("dev404-boot-seen", "true");

        // A second open sees what the first one wrote.
        let reopened = FileSessionStore::open(&path);
        assert_eq!(reopened.get("dev404-boot-seen"), Some("true".to_string()));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path().join("nope.json"));
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let mut store = FileSessionStore::open(&path);
        assert_eq!(store.get("k"), None);

        // And it can still be written afterwards.
        store.set("k", "v");
        let reopened = FileSessionStore::open(&path);
        assert_eq!(reopened.get("k"), Some("v".to_string()));
    }
}
