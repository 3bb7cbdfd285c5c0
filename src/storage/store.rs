use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Durable string slots addressed by key
pub trait KeyValueStore {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
    /// Removing an absent key is not an error
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// One `<key>.json` file per slot inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.slot_path(key);
        // Write beside the slot and rename so a crash never leaves half a snapshot
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.slot_path(key)) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

/// Volatile store, handy for tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_and_removes() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path().join("nested"));

        assert_eq!(store.get("slot").unwrap(), None);
        store.set("slot", "[\"red\"]").unwrap();
        assert_eq!(store.get("slot").unwrap().as_deref(), Some("[\"red\"]"));
        assert!(tmp.path().join("nested/slot.json").exists());

        store.remove("slot").unwrap();
        assert_eq!(store.get("slot").unwrap(), None);
        store.remove("slot").unwrap();
    }

    #[test]
    fn set_overwrites_previous_value() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path());
        store.set("slot", "old").unwrap();
        store.set("slot", "new").unwrap();
        assert_eq!(store.get("slot").unwrap().as_deref(), Some("new"));
        assert!(!tmp.path().join("slot.json.tmp").exists());
    }
}
