use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Storage key the catalog snapshot lives under unless configured otherwise.
pub const DEFAULT_CATALOG_KEY: &str = "capturedMedia";

/// Recording length cap passed to the camera, in seconds.
pub const DEFAULT_MAX_RECORDING_SECS: u32 = 60;

/// Target resolution for video recordings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VideoQuality {
    #[serde(rename = "480p")]
    P480,
    #[serde(rename = "720p")]
    P720,
    #[default]
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "2160p")]
    P2160,
}

/// Options forwarded to the camera for a still capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoOptions {
    /// Encoder quality, 0.0–1.0.
    pub quality: f32,
    pub include_exif: bool,
}

/// Options forwarded to the camera when a recording starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingOptions {
    /// The camera stops on its own once this much has been recorded.
    pub max_duration_secs: u32,
    pub muted: bool,
    pub quality: VideoQuality,
    pub torch: bool,
}

/// Configuration for a capture session and its catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureConfiguration {
    /// Directory captured photos are moved into (default: current dir).
    pub media_directory: PathBuf,

    /// Key under which the catalog snapshot is persisted.
    pub catalog_key: String,

    /// Maximum recording duration in seconds (default: 60).
    pub max_recording_secs: u32,

    /// Record video without audio. Muted recordings need no microphone grant.
    pub mute_recordings: bool,

    /// Photo encoder quality, 0.0–1.0 (default: 1.0).
    pub photo_quality: f32,

    pub include_exif: bool,

    pub video_quality: VideoQuality,

    pub enable_torch: bool,

    /// Register finished recordings with the device media library.
    pub register_videos: bool,
}

impl CaptureConfiguration {
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog_key.trim().is_empty() {
            return Err("catalog key must not be empty".into());
        }
        if self.max_recording_secs == 0 {
            return Err("max recording duration must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.photo_quality) {
            return Err(format!("photo quality out of range: {}", self.photo_quality));
        }
        Ok(())
    }

    pub fn photo_options(&self) -> PhotoOptions {
        PhotoOptions {
            quality: self.photo_quality,
            include_exif: self.include_exif,
        }
    }

    pub fn recording_options(&self) -> RecordingOptions {
        RecordingOptions {
            max_duration_secs: self.max_recording_secs,
            muted: self.mute_recordings,
            quality: self.video_quality,
            torch: self.enable_torch,
        }
    }
}

impl Default for CaptureConfiguration {
    fn default() -> Self {
        Self {
            media_directory: PathBuf::from("."),
            catalog_key: DEFAULT_CATALOG_KEY.to_string(),
            max_recording_secs: DEFAULT_MAX_RECORDING_SECS,
            mute_recordings: false,
            photo_quality: 1.0,
            include_exif: false,
            video_quality: VideoQuality::P1080,
            enable_torch: false,
            register_videos: true,
        }
    }
}
