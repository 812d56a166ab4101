//! Media library stand-in that collects registered files in a directory.

use std::fs;
use std::path::{Path, PathBuf};

use media_capture_core::models::asset::FileHandle;
use media_capture_core::models::error::MediaError;
use media_capture_core::traits::media_library::MediaLibrary;

use crate::local_fs::handle_path;

/// Copies every registered file into `root`, keeping its file name.
pub struct DirectoryMediaLibrary {
    root: PathBuf,
}

impl DirectoryMediaLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl MediaLibrary for DirectoryMediaLibrary {
    fn register(&self, file: &FileHandle) -> Result<(), MediaError> {
        let source = handle_path(file);
        let name = source
            .file_name()
            .ok_or_else(|| MediaError::Registration(format!("no file name in {}", file)))?;

        fs::create_dir_all(&self.root)
            .map_err(|e| MediaError::Registration(format!("failed to create library: {}", e)))?;
        let target = self.root.join(name);
        fs::copy(&source, &target)
            .map_err(|e| MediaError::Registration(format!("failed to copy {}: {}", source.display(), e)))?;

        log::info!("Registered {} in media library", target.display());
        Ok(())
    }
}
