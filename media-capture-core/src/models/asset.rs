use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque handle to a stored media file (filesystem path or content URI).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileHandle(String);

impl FileHandle {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn from_path(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for FileHandle {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

impl From<&str> for FileHandle {
    fn from(uri: &str) -> Self {
        Self(uri.to_string())
    }
}

impl fmt::Display for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of captured media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Photo,
    Video,
}

/// One catalogued capture.
///
/// Videos carry no duration or size; only the location, the kind and the
/// completion time are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub uri: String,
    pub kind: AssetKind,
    pub captured_at: DateTime<Utc>,
}

impl AssetRecord {
    /// Record for a capture that completed just now.
    pub fn captured_now(kind: AssetKind, file: FileHandle) -> Self {
        Self {
            uri: file.into_string(),
            kind,
            captured_at: Utc::now(),
        }
    }

    pub fn handle(&self) -> FileHandle {
        FileHandle::new(self.uri.clone())
    }

    pub fn is_photo(&self) -> bool {
        self.kind == AssetKind::Photo
    }

    pub fn is_video(&self) -> bool {
        self.kind == AssetKind::Video
    }
}
