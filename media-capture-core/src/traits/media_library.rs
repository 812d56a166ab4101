use crate::models::asset::FileHandle;
use crate::models::error::MediaError;

/// Device media library (camera roll / gallery).
///
/// Registration is best-effort: callers log failures and carry on.
pub trait MediaLibrary: Send + Sync {
    fn register(&self, file: &FileHandle) -> Result<(), MediaError>;
}
