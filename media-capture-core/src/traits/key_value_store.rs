use crate::models::error::MediaError;

/// String key-value persistence, in the shape of a mobile async storage.
pub trait KeyValueStore: Send + Sync {
    /// Value under `key`, or `None` if nothing was ever stored.
    fn get(&self, key: &str) -> Result<Option<String>, MediaError>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), MediaError>;
}
