pub mod camera_device;
pub mod file_deleter;
pub mod file_mover;
pub mod key_value_store;
pub mod media_library;
pub mod session_delegate;
