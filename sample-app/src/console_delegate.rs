use std::sync::Arc;

use media_capture_core::{AssetRecord, CameraFacing, CaptureMode, MediaError, SessionDelegate};

/// SessionDelegate that echoes session events to the terminal.
pub struct ConsoleDelegate;

impl ConsoleDelegate {
    pub fn new() -> Arc<Self> {
        Arc::new(Self)
    }
}

impl SessionDelegate for ConsoleDelegate {
    fn on_mode_changed(&self, mode: CaptureMode) {
        println!("  [camera] {}", mode);
    }

    fn on_facing_changed(&self, facing: CameraFacing) {
        println!("  [camera] facing {}", facing);
    }

    fn on_asset_captured(&self, record: &AssetRecord) {
        println!("  [saved] {:?} {}", record.kind, record.uri);
    }

    fn on_error(&self, error: &MediaError) {
        eprintln!("  [error] {}", error);
    }
}
