//! `KeyValueStore` backed by one JSON object on disk.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use media_capture_core::models::error::MediaError;
use media_capture_core::traits::key_value_store::KeyValueStore;

/// Key-value store persisted as `{ "key": "value", ... }` in a single file.
///
/// Every `set` rewrites the whole file through a temporary sibling and a
/// rename, so a crash mid-write leaves the previous contents intact. A
/// missing file reads as an empty store. A file that no longer parses fails
/// reads; the next `set` moves it aside to `<name>.json.corrupt` and starts
/// a fresh store.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a damaged store file is kept once `set` replaces it.
    pub fn corrupt_path(&self) -> PathBuf {
        self.path.with_extension("json.corrupt")
    }

    fn read_raw(&self) -> Result<Option<String>, MediaError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MediaError::PersistenceRead(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn parse(json: &str) -> Result<BTreeMap<String, String>, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, MediaError> {
        match self.read_raw()? {
            None => Ok(BTreeMap::new()),
            Some(json) => Self::parse(&json).map_err(|e| {
                MediaError::PersistenceRead(format!("failed to parse {}: {}", self.path.display(), e))
            }),
        }
    }

    /// Entries to start a write from. An unparsable file is moved aside.
    fn read_for_update(&self) -> Result<BTreeMap<String, String>, MediaError> {
        let json = match self.read_raw() {
            Ok(Some(json)) => json,
            Ok(None) => return Ok(BTreeMap::new()),
            Err(e) => return Err(MediaError::PersistenceWrite(e.to_string())),
        };
        match Self::parse(&json) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                let aside = self.corrupt_path();
                log::warn!(
                    "Store {} is unreadable ({}); moving it to {} and starting empty",
                    self.path.display(),
                    e,
                    aside.display()
                );
                fs::rename(&self.path, &aside).map_err(|e| {
                    MediaError::PersistenceWrite(format!(
                        "failed to move damaged store aside: {}",
                        e
                    ))
                })?;
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), MediaError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| MediaError::PersistenceWrite(format!("failed to create directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| MediaError::PersistenceWrite(format!("failed to serialize store: {}", e)))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .map_err(|e| MediaError::PersistenceWrite(format!("failed to write store: {}", e)))?;
        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            MediaError::PersistenceWrite(format!("failed to replace store: {}", e))
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, MediaError> {
        let _guard = self.lock.lock();
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MediaError> {
        let _guard = self.lock.lock();
        let mut entries = self.read_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }
}
