//! # media-capture-fs
//!
//! Local filesystem backend for media-capture-kit.
//!
//! Provides:
//! - `JsonFileStore`: `KeyValueStore` kept in a single JSON file
//! - `LocalFileSystem`: `FileMover` + `FileDeleter` over `std::fs`
//! - `DirectoryMediaLibrary`: `MediaLibrary` that copies files into a folder
//!
//! ## Usage
//! ```ignore
//! use std::sync::Arc;
//! use media_capture_core::MediaCatalog;
//! use media_capture_fs::{JsonFileStore, LocalFileSystem};
//!
//! let store = Arc::new(JsonFileStore::new(data_dir.join("storage.json")));
//! let catalog = MediaCatalog::new(store, Arc::new(LocalFileSystem), "capturedMedia");
//! catalog.load_or_empty();
//! ```

pub mod directory_library;
pub mod json_store;
pub mod local_fs;

pub use directory_library::DirectoryMediaLibrary;
pub use json_store::JsonFileStore;
pub use local_fs::LocalFileSystem;
