use thiserror::Error;

/// Errors surfaced by the capture session, the media catalog and the ports
/// they drive.
///
/// Payloads are plain strings so the error stays `Clone + Eq` and can be
/// handed to delegates and UI layers without lifetime concerns.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("capture failed: {0}")]
    Capture(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("failed to read catalog: {0}")]
    PersistenceRead(String),

    #[error("failed to persist catalog: {0}")]
    PersistenceWrite(String),

    #[error("catalog snapshot is corrupt: {0}")]
    CorruptCatalog(String),

    #[error("media library registration failed: {0}")]
    Registration(String),

    #[error("failed to delete asset: {0}")]
    Deletion(String),

    #[error("another capture operation is in progress")]
    SessionBusy,

    #[error("invalid session state: {0}")]
    InvalidState(String),

    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("asset already catalogued: {0}")]
    DuplicateAsset(String),

    #[error("configuration failed: {0}")]
    ConfigurationFailed(String),
}
