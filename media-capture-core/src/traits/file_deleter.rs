use crate::models::asset::FileHandle;
use crate::models::error::MediaError;

/// Removes stored media files.
pub trait FileDeleter: Send + Sync {
    /// Delete `file`. With `idempotent` set, a file that is already gone is
    /// not an error.
    fn delete(&self, file: &FileHandle, idempotent: bool) -> Result<(), MediaError>;
}
