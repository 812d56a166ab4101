use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use parking_lot::Mutex;

use media_capture_core::{
    CameraDevice, CameraFacing, FileHandle, MediaError, PermissionStatus, PhotoOptions,
    RecordingOptions,
};

/// Simulated camera that writes placeholder files into a cache directory.
///
/// **NOT A REAL CAMERA**. Stands in for the platform binding so the
/// capture flow can be driven from a terminal.
pub struct DemoCamera {
    cache_dir: PathBuf,
    facing: Mutex<CameraFacing>,
    recording: Mutex<Option<(Instant, RecordingOptions)>>,
}

impl DemoCamera {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            facing: Mutex::new(CameraFacing::Back),
            recording: Mutex::new(None),
        }
    }

    fn write_placeholder(&self, ext: &str, contents: String) -> Result<FileHandle, MediaError> {
        fs::create_dir_all(&self.cache_dir)
            .map_err(|e| MediaError::Capture(format!("camera cache unavailable: {}", e)))?;
        let name = format!("{}.{}", chrono::Utc::now().format("%Y%m%d_%H%M%S%3f"), ext);
        let path = self.cache_dir.join(name);
        fs::write(&path, contents)
            .map_err(|e| MediaError::Capture(format!("failed to encode {}: {}", ext, e)))?;
        Ok(FileHandle::from(format!("file://{}", path.display())))
    }
}

impl CameraDevice for DemoCamera {
    fn permissions(&self) -> PermissionStatus {
        PermissionStatus::granted()
    }

    fn set_facing(&self, facing: CameraFacing) -> Result<(), MediaError> {
        *self.facing.lock() = facing;
        Ok(())
    }

    fn capture_photo(&self, options: &PhotoOptions) -> Result<FileHandle, MediaError> {
        let facing = *self.facing.lock();
        self.write_placeholder(
            "jpg",
            format!("demo photo ({} camera, quality {:.2})\n", facing, options.quality),
        )
    }

    fn start_recording(&self, options: &RecordingOptions) -> Result<(), MediaError> {
        let mut recording = self.recording.lock();
        if recording.is_some() {
            return Err(MediaError::Capture("camera is already recording".into()));
        }
        *recording = Some((Instant::now(), *options));
        Ok(())
    }

    fn stop_recording(&self) -> Result<FileHandle, MediaError> {
        let (started, options) = self
            .recording
            .lock()
            .take()
            .ok_or_else(|| MediaError::Capture("camera is not recording".into()))?;

        let limit = f64::from(options.max_duration_secs);
        let secs = started.elapsed().as_secs_f64().min(limit);
        self.write_placeholder(
            "mp4",
            format!(
                "demo video ({:.1}s of max {}s, {:?}, muted: {})\n",
                secs, options.max_duration_secs, options.quality, options.muted
            ),
        )
    }
}
