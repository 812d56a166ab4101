use crate::models::asset::AssetRecord;
use crate::models::error::MediaError;

/// Serialize a catalog into the JSON snapshot stored under the catalog key.
pub fn encode_catalog(records: &[AssetRecord]) -> Result<String, MediaError> {
    serde_json::to_string_pretty(records)
        .map_err(|e| MediaError::PersistenceWrite(format!("failed to serialize catalog: {}", e)))
}

/// Parse a catalog snapshot.
///
/// Any structural problem, including a snapshot that is valid JSON but not
/// a list of records, is reported as `CorruptCatalog`.
pub fn decode_catalog(json: &str) -> Result<Vec<AssetRecord>, MediaError> {
    serde_json::from_str(json)
        .map_err(|e| MediaError::CorruptCatalog(format!("failed to parse catalog: {}", e)))
}
