use std::path::Path;

use crate::models::asset::FileHandle;
use crate::models::error::MediaError;

/// Moves freshly captured files into durable storage.
pub trait FileMover: Send + Sync {
    /// Move `from` to `to`, returning the handle of the moved file.
    fn move_file(&self, from: &FileHandle, to: &Path) -> Result<FileHandle, MediaError>;
}
