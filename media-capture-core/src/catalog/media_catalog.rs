use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::asset::{AssetKind, AssetRecord};
use crate::models::error::MediaError;
use crate::storage::snapshot::{decode_catalog, encode_catalog};
use crate::traits::file_deleter::FileDeleter;
use crate::traits::key_value_store::KeyValueStore;

/// Ordered, persisted list of captured assets.
///
/// Every mutation stages a copy of the list, writes the copy to the store
/// and only then swaps it in. A failed write therefore leaves the in-memory
/// list exactly as it was, and after any successful mutation the in-memory
/// list equals the persisted snapshot.
///
/// The records mutex is held for the whole stage/persist/commit cycle, so
/// concurrent mutations queue up behind each other instead of interleaving.
pub struct MediaCatalog {
    store: Arc<dyn KeyValueStore>,
    deleter: Arc<dyn FileDeleter>,
    key: String,
    records: Mutex<Vec<AssetRecord>>,
}

impl MediaCatalog {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        deleter: Arc<dyn FileDeleter>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            store,
            deleter,
            key: key.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the in-memory list with the persisted snapshot.
    ///
    /// A missing snapshot yields an empty catalog. On a read or parse error
    /// the in-memory list is cleared and the error returned, leaving the
    /// caller in the documented empty-catalog degraded mode.
    pub fn load(&self) -> Result<Vec<AssetRecord>, MediaError> {
        let mut records = self.records.lock();
        records.clear();

        let loaded = match self.store.get(&self.key)? {
            Some(json) => decode_catalog(&json)?,
            None => Vec::new(),
        };

        log::info!("Loaded {} catalogued assets from '{}'", loaded.len(), self.key);
        *records = loaded;
        Ok(records.clone())
    }

    /// `load`, falling back to an empty catalog on any error.
    pub fn load_or_empty(&self) -> Vec<AssetRecord> {
        match self.load() {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Starting with an empty catalog: {}", e);
                Vec::new()
            }
        }
    }

    /// Add `record` at the tail and persist.
    pub fn append(&self, record: AssetRecord) -> Result<Vec<AssetRecord>, MediaError> {
        let mut records = self.records.lock();

        if records.iter().any(|r| r.uri == record.uri) {
            return Err(MediaError::DuplicateAsset(record.uri));
        }

        let mut staged = records.clone();
        staged.push(record);
        self.persist(&staged)?;

        *records = staged;
        log::debug!("Catalog now holds {} assets", records.len());
        Ok(records.clone())
    }

    /// Delete the file behind `uri` and drop its record.
    ///
    /// Fails closed: if the file cannot be deleted the record stays. A uri
    /// that is not catalogued yields `NotFound` and touches nothing.
    pub fn remove(&self, uri: &str) -> Result<Vec<AssetRecord>, MediaError> {
        let mut records = self.records.lock();

        let Some(target) = records.iter().find(|r| r.uri == uri) else {
            return Err(MediaError::NotFound(uri.to_string()));
        };

        self.deleter
            .delete(&target.handle(), true)
            .map_err(|e| MediaError::Deletion(format!("{}: {}", uri, e)))?;

        let staged: Vec<AssetRecord> = records.iter().filter(|r| r.uri != uri).cloned().collect();
        // The file is already gone here; a retry is safe since deletion is idempotent.
        self.persist(&staged)?;

        *records = staged;
        log::info!("Removed '{}' from catalog", uri);
        Ok(records.clone())
    }

    pub fn records(&self) -> Vec<AssetRecord> {
        self.records.lock().clone()
    }

    pub fn records_of_kind(&self, kind: AssetKind) -> Vec<AssetRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect()
    }

    pub fn get(&self, uri: &str) -> Option<AssetRecord> {
        self.records.lock().iter().find(|r| r.uri == uri).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    fn persist(&self, staged: &[AssetRecord]) -> Result<(), MediaError> {
        let json = encode_catalog(staged)?;
        self.store.set(&self.key, &json).map_err(|e| {
            log::error!("Failed to persist catalog '{}': {}", self.key, e);
            match e {
                MediaError::PersistenceWrite(_) => e,
                other => MediaError::PersistenceWrite(other.to_string()),
            }
        })
    }
}
