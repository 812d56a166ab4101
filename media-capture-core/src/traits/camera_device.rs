use crate::models::asset::FileHandle;
use crate::models::config::{PhotoOptions, RecordingOptions};
use crate::models::error::MediaError;
use crate::models::state::{CameraFacing, PermissionStatus};

/// Interface for platform-specific camera access.
///
/// Calls block until the hardware has answered. Implementations report
/// hardware and readiness failures as `MediaError::Capture`.
pub trait CameraDevice: Send + Sync + 'static {
    /// Current camera and microphone grants.
    fn permissions(&self) -> PermissionStatus;

    /// Point the camera at the given side.
    fn set_facing(&self, facing: CameraFacing) -> Result<(), MediaError>;

    /// Take a still and return the temporary file the encoder wrote.
    fn capture_photo(&self, options: &PhotoOptions) -> Result<FileHandle, MediaError>;

    /// Begin recording. Returns once frames are flowing.
    ///
    /// The camera may stop by itself after `options.max_duration_secs`; the
    /// file is still collected through `stop_recording`.
    fn start_recording(&self, options: &RecordingOptions) -> Result<(), MediaError>;

    /// End the running recording (if still running) and return its file.
    fn stop_recording(&self) -> Result<FileHandle, MediaError>;
}

impl<T: CameraDevice + ?Sized> CameraDevice for std::sync::Arc<T> {
    fn permissions(&self) -> PermissionStatus {
        (**self).permissions()
    }

    fn set_facing(&self, facing: CameraFacing) -> Result<(), MediaError> {
        (**self).set_facing(facing)
    }

    fn capture_photo(&self, options: &PhotoOptions) -> Result<FileHandle, MediaError> {
        (**self).capture_photo(options)
    }

    fn start_recording(&self, options: &RecordingOptions) -> Result<(), MediaError> {
        (**self).start_recording(options)
    }

    fn stop_recording(&self) -> Result<FileHandle, MediaError> {
        (**self).stop_recording()
    }
}
