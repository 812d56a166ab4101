//! # media-capture-core
//!
//! Platform-agnostic media capture core library.
//!
//! Provides the capture session state machine, the persisted media catalog
//! and the view-mode switch of a camera app. Camera hardware, file moves,
//! deletion, media-library registration and key-value persistence are
//! ports (traits) implemented by platform backends.
//!
//! ## Architecture
//!
//! ```text
//! media-capture-core (this crate)
//! ├── traits/    ← CameraDevice, FileMover, FileDeleter, KeyValueStore, MediaLibrary, SessionDelegate
//! ├── models/    ← MediaError, CaptureMode, CameraFacing, AssetRecord, CaptureConfiguration
//! ├── catalog/   ← MediaCatalog (ordered, persisted asset list)
//! ├── session/   ← CaptureSession (generic over the camera backend)
//! ├── view/      ← ViewModeController
//! ├── storage/   ← catalog snapshot codec, MemoryStore
//! └── app        ← MediaApp (wires everything at startup)
//! ```

pub mod app;
pub mod catalog;
pub mod models;
pub mod session;
pub mod storage;
pub mod traits;
pub mod view;

#[cfg(test)]
mod testing;

// Re-export key types at crate root for convenience.
pub use app::{MediaApp, Ports};
pub use catalog::media_catalog::MediaCatalog;
pub use models::asset::{AssetKind, AssetRecord, FileHandle};
pub use models::config::{CaptureConfiguration, PhotoOptions, RecordingOptions, VideoQuality};
pub use models::error::MediaError;
pub use models::state::{CameraFacing, CaptureMode, PermissionStatus};
pub use session::capture_session::CaptureSession;
pub use storage::memory_store::MemoryStore;
pub use traits::camera_device::CameraDevice;
pub use traits::file_deleter::FileDeleter;
pub use traits::file_mover::FileMover;
pub use traits::key_value_store::KeyValueStore;
pub use traits::media_library::MediaLibrary;
pub use traits::session_delegate::SessionDelegate;
pub use view::mode_controller::{ViewMode, ViewModeController};
