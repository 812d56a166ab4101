use crate::models::asset::AssetRecord;
use crate::models::error::MediaError;
use crate::models::state::{CameraFacing, CaptureMode};

/// Event delegate for capture session notifications.
///
/// Methods are called on the thread that drove the session operation, or on
/// the recording timer thread when a recording hits its duration cap.
/// Implementations should marshal to the UI thread if needed.
pub trait SessionDelegate: Send + Sync {
    /// Called when the capture mode changes.
    fn on_mode_changed(&self, mode: CaptureMode);

    /// Called when the camera facing changes.
    fn on_facing_changed(&self, facing: CameraFacing);

    /// Called once a capture has been added to the catalog.
    fn on_asset_captured(&self, record: &AssetRecord);

    /// Called when an operation fails with an error meant for the user.
    fn on_error(&self, error: &MediaError);
}
