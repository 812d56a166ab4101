//! File moves and deletes on the local filesystem.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use media_capture_core::models::asset::FileHandle;
use media_capture_core::models::error::MediaError;
use media_capture_core::traits::file_deleter::FileDeleter;
use media_capture_core::traits::file_mover::FileMover;

/// Resolve a handle to a local path, accepting plain paths and `file://` URIs.
pub fn handle_path(handle: &FileHandle) -> PathBuf {
    let uri = handle.as_str();
    PathBuf::from(uri.strip_prefix("file://").unwrap_or(uri))
}

/// `FileMover` and `FileDeleter` over `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileMover for LocalFileSystem {
    fn move_file(&self, from: &FileHandle, to: &Path) -> Result<FileHandle, MediaError> {
        let source = handle_path(from);

        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| MediaError::Io(format!("failed to create directory: {}", e)))?;
        }

        if let Err(rename_err) = fs::rename(&source, to) {
            // Camera caches often live on another volume; rename can't cross it.
            log::debug!(
                "rename {} -> {} failed ({}), copying instead",
                source.display(),
                to.display(),
                rename_err
            );
            fs::copy(&source, to).map_err(|e| {
                MediaError::Io(format!("failed to move {} to {}: {}", source.display(), to.display(), e))
            })?;
            if let Err(e) = fs::remove_file(&source) {
                log::warn!("Moved copy of {} but could not remove source: {}", source.display(), e);
            }
        }

        Ok(FileHandle::from_path(to))
    }
}

impl FileDeleter for LocalFileSystem {
    fn delete(&self, file: &FileHandle, idempotent: bool) -> Result<(), MediaError> {
        let path = handle_path(file);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if idempotent && e.kind() == ErrorKind::NotFound => {
                log::debug!("{} already gone", path.display());
                Ok(())
            }
            Err(e) => Err(MediaError::Io(format!("failed to delete {}: {}", path.display(), e))),
        }
    }
}
