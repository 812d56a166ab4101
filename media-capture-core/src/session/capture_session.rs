use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::Utc;
use parking_lot::Mutex;

use crate::catalog::media_catalog::MediaCatalog;
use crate::models::asset::{AssetKind, AssetRecord, FileHandle};
use crate::models::config::CaptureConfiguration;
use crate::models::error::MediaError;
use crate::models::state::{CameraFacing, CaptureMode};
use crate::traits::camera_device::CameraDevice;
use crate::traits::file_mover::FileMover;
use crate::traits::media_library::MediaLibrary;
use crate::traits::session_delegate::SessionDelegate;

/// How often the recording timer checks the duration cap.
const LIMIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Internal mutable session state, protected by `parking_lot::Mutex`.
struct SessionState {
    mode: CaptureMode,
    facing: CameraFacing,
    recording_start: Option<Instant>,
}

impl SessionState {
    fn new() -> Self {
        Self {
            mode: CaptureMode::Idle,
            facing: CameraFacing::Back,
            recording_start: None,
        }
    }
}

/// Clears the in-flight flag when dropped, unless handed over with `keep`.
struct InFlight<'a> {
    flag: &'a AtomicBool,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, MediaError> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| MediaError::SessionBusy)?;
        Ok(Self { flag, armed: true })
    }

    /// Leave the flag set past this guard; finishing the recording clears it.
    fn keep(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.flag.store(false, Ordering::SeqCst);
        }
    }
}

/// Watches one recording and finishes it at the duration cap.
struct RecordingTimer {
    running: Arc<AtomicBool>,
    handle: thread::JoinHandle<()>,
}

impl RecordingTimer {
    fn stop(self) {
        self.running.store(false, Ordering::SeqCst);
        let _ = self.handle.join();
    }
}

/// Capture session orchestrator.
///
/// Generic over the camera backend via the `CameraDevice` trait. Drives
/// the mode/facing state machine and turns finished captures into catalog
/// entries:
/// ```text
/// [CameraDevice] → photo ─→ [FileMover] ─┐
///                                          ├→ [MediaCatalog::append]
/// [CameraDevice] → video ─→ [MediaLibrary]┘
/// ```
///
/// Only one operation is in flight at a time. A photo capture, recording
/// start, camera close or flip issued while another is pending fails with
/// `MediaError::SessionBusy`; a running recording counts as pending until
/// it is stopped or reaches `max_recording_secs`, at which point a timer
/// thread finishes it exactly as `stop_recording` would.
pub struct CaptureSession<C: CameraDevice> {
    core: Arc<SessionCore<C>>,
    timer: Mutex<Option<RecordingTimer>>,
}

/// State and ports shared between the session and its recording timer.
struct SessionCore<C: CameraDevice> {
    camera: C,
    mover: Arc<dyn FileMover>,
    library: Arc<dyn MediaLibrary>,
    catalog: Arc<MediaCatalog>,
    config: CaptureConfiguration,
    session_state: Mutex<SessionState>,
    in_flight: AtomicBool,
    delegate: Mutex<Option<Arc<dyn SessionDelegate>>>,
}

impl<C: CameraDevice> CaptureSession<C> {
    pub fn new(
        camera: C,
        mover: Arc<dyn FileMover>,
        library: Arc<dyn MediaLibrary>,
        catalog: Arc<MediaCatalog>,
        config: CaptureConfiguration,
    ) -> Self {
        Self {
            core: Arc::new(SessionCore {
                camera,
                mover,
                library,
                catalog,
                config,
                session_state: Mutex::new(SessionState::new()),
                in_flight: AtomicBool::new(false),
                delegate: Mutex::new(None),
            }),
            timer: Mutex::new(None),
        }
    }

    pub fn set_delegate(&self, delegate: Arc<dyn SessionDelegate>) {
        *self.core.delegate.lock() = Some(delegate);
    }

    pub fn mode(&self) -> CaptureMode {
        self.core.mode()
    }

    pub fn facing(&self) -> CameraFacing {
        self.core.session_state.lock().facing
    }

    /// Whether a capture or recording is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.core.in_flight.load(Ordering::SeqCst)
    }

    pub fn catalog(&self) -> &Arc<MediaCatalog> {
        &self.core.catalog
    }

    pub fn config(&self) -> &CaptureConfiguration {
        &self.core.config
    }

    /// Time since the running recording started.
    pub fn recording_elapsed(&self) -> Option<Duration> {
        self.core.recording_elapsed()
    }

    /// Whether the running recording has hit the configured cap and is
    /// about to be finished by the timer.
    pub fn recording_limit_reached(&self) -> bool {
        self.core.recording_limit_reached()
    }

    /// Open the camera. Transitions: idle → camera-active.
    pub fn open_camera(&self) -> Result<(), MediaError> {
        match self.mode() {
            CaptureMode::CameraActive => return Ok(()),
            CaptureMode::Recording => {
                return Err(MediaError::InvalidState(
                    "camera is already recording".into(),
                ))
            }
            CaptureMode::Idle => {}
        }

        let _in_flight = InFlight::acquire(&self.core.in_flight)?;
        if self.mode().is_idle() {
            self.core.activate_camera(false)?;
        }
        Ok(())
    }

    /// Close the camera. Transitions: camera-active → idle.
    pub fn close_camera(&self) -> Result<(), MediaError> {
        if self.mode().is_recording() {
            return Err(MediaError::InvalidState(
                "stop recording before closing the camera".into(),
            ));
        }

        // Holding the flag rules out a recording starting underneath us.
        let _in_flight = InFlight::acquire(&self.core.in_flight)?;
        self.core.set_mode(CaptureMode::Idle);
        Ok(())
    }

    /// Toggle between front and back camera. Not allowed while recording
    /// or while a capture is pending.
    pub fn flip_facing(&self) -> Result<CameraFacing, MediaError> {
        if self.mode().is_recording() {
            return Err(MediaError::InvalidState(
                "cannot flip camera while recording".into(),
            ));
        }

        let _in_flight = InFlight::acquire(&self.core.in_flight)?;
        let (mode, facing) = {
            let s = self.core.session_state.lock();
            (s.mode, s.facing)
        };

        let flipped = facing.flipped();
        if mode.is_camera_active() {
            self.core
                .camera
                .set_facing(flipped)
                .map_err(|e| self.core.report(e))?;
        }

        self.core.session_state.lock().facing = flipped;
        if let Some(delegate) = self.core.delegate() {
            delegate.on_facing_changed(flipped);
        }
        Ok(flipped)
    }

    /// Take a photo, move it to the media directory and catalog it.
    ///
    /// Opens the camera first when idle; the session stays camera-active.
    pub fn capture_photo(&self) -> Result<AssetRecord, MediaError> {
        let core = &self.core;
        let _in_flight = InFlight::acquire(&core.in_flight)?;

        match core.mode() {
            CaptureMode::Recording => {
                return Err(MediaError::InvalidState(
                    "cannot take a photo while recording".into(),
                ))
            }
            CaptureMode::Idle => core.activate_camera(false)?,
            CaptureMode::CameraActive => {}
        }

        let temp = core
            .camera
            .capture_photo(&core.config.photo_options())
            .map_err(|e| core.report(as_capture_error(e)))?;

        let destination = core.photo_destination();
        let stored = core
            .mover
            .move_file(&temp, &destination)
            .map_err(|e| core.report(as_io_error(e)))?;

        core.catalogue(AssetKind::Photo, stored)
    }

    /// Start recording video. Transitions: camera-active → recording.
    ///
    /// Opens the camera first when idle, and arms the timer that ends the
    /// recording after `max_recording_secs`.
    pub fn start_recording(&self) -> Result<(), MediaError> {
        let core = &self.core;
        let in_flight = InFlight::acquire(&core.in_flight)?;

        // A timer that finished the previous recording may still be cataloguing.
        let stale = self.timer.lock().take();
        if let Some(stale) = stale {
            stale.stop();
        }

        match core.mode() {
            CaptureMode::Recording => {
                return Err(MediaError::InvalidState("already recording".into()))
            }
            CaptureMode::Idle => core.activate_camera(true)?,
            CaptureMode::CameraActive => core.check_microphone()?,
        }

        let options = core.config.recording_options();
        core.camera
            .start_recording(&options)
            .map_err(|e| core.report(as_capture_error(e)))?;

        core.session_state.lock().recording_start = Some(Instant::now());
        core.set_mode(CaptureMode::Recording);
        in_flight.keep();
        self.start_limit_timer();

        log::info!(
            "Recording started (max {}s, muted: {})",
            options.max_duration_secs,
            options.muted
        );
        Ok(())
    }

    /// Stop recording and catalog the video.
    /// Transitions: recording → camera-active.
    ///
    /// Exactly one caller collects a recording; any other stop, or one that
    /// arrives after the duration cap already finished it, is `InvalidState`.
    /// The session leaves the recording state whatever the outcome.
    /// Registration with the media library is best-effort.
    pub fn stop_recording(&self) -> Result<AssetRecord, MediaError> {
        let started = self.core.claim_recording()?;
        let timer = self.timer.lock().take();
        if let Some(timer) = timer {
            timer.stop();
        }
        self.core.finish_recording(started)
    }

    /// Start the duration cap timer for the recording that just began.
    fn start_limit_timer(&self) {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let core = Arc::clone(&self.core);

        let spawned = thread::Builder::new()
            .name("recording-limit".into())
            .spawn(move || {
                while flag.load(Ordering::SeqCst) {
                    thread::sleep(LIMIT_POLL_INTERVAL);

                    if core.recording_limit_reached() {
                        core.finish_at_limit();
                        break;
                    }
                }
            });

        match spawned {
            Ok(handle) => *self.timer.lock() = Some(RecordingTimer { running, handle }),
            Err(e) => log::warn!("Recording limit timer unavailable: {}", e),
        }
    }
}

impl<C: CameraDevice> Drop for CaptureSession<C> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.get_mut().take() {
            timer.stop();
        }
    }
}

impl<C: CameraDevice> SessionCore<C> {
    fn mode(&self) -> CaptureMode {
        self.session_state.lock().mode
    }

    fn delegate(&self) -> Option<Arc<dyn SessionDelegate>> {
        self.delegate.lock().clone()
    }

    fn recording_elapsed(&self) -> Option<Duration> {
        self.session_state
            .lock()
            .recording_start
            .map(|start| start.elapsed())
    }

    fn recording_limit_reached(&self) -> bool {
        let limit = Duration::from_secs(u64::from(self.config.max_recording_secs));
        self.recording_elapsed().is_some_and(|elapsed| elapsed >= limit)
    }

    fn activate_camera(&self, for_recording: bool) -> Result<(), MediaError> {
        let permissions = self.camera.permissions();
        if !permissions.camera {
            return Err(self.report(MediaError::PermissionDenied("camera access not granted".into())));
        }
        if for_recording {
            self.check_microphone()?;
        }

        let facing = self.session_state.lock().facing;
        self.camera.set_facing(facing).map_err(|e| self.report(e))?;
        self.set_mode(CaptureMode::CameraActive);
        Ok(())
    }

    fn check_microphone(&self) -> Result<(), MediaError> {
        if self.config.mute_recordings || self.camera.permissions().microphone {
            return Ok(());
        }
        Err(self.report(MediaError::PermissionDenied(
            "microphone access not granted".into(),
        )))
    }

    /// Move the session out of recording. Only the first caller succeeds.
    fn claim_recording(&self) -> Result<Option<Instant>, MediaError> {
        let started = {
            let mut s = self.session_state.lock();
            if !s.mode.is_recording() {
                return Err(MediaError::InvalidState("not recording".into()));
            }
            s.mode = CaptureMode::CameraActive;
            s.recording_start.take()
        };
        self.notify_mode(CaptureMode::CameraActive);
        Ok(started)
    }

    /// Collect a claimed recording, register it and add it to the catalog.
    fn finish_recording(&self, started: Option<Instant>) -> Result<AssetRecord, MediaError> {
        let result = self.camera.stop_recording();
        self.in_flight.store(false, Ordering::SeqCst);

        let file = result.map_err(|e| self.report(as_capture_error(e)))?;
        if let Some(started) = started {
            log::info!("Recording stopped after {:.1}s: {}", started.elapsed().as_secs_f64(), file);
        }

        if self.config.register_videos {
            if let Err(e) = self.library.register(&file) {
                log::warn!("Could not add {} to the media library: {}", file, e);
            }
        }

        self.catalogue(AssetKind::Video, file)
    }

    fn finish_at_limit(&self) {
        // Lost the race against an explicit stop.
        let Ok(started) = self.claim_recording() else {
            return;
        };
        log::info!(
            "Maximum recording duration of {}s reached",
            self.config.max_recording_secs
        );
        // Failures have already gone to the delegate.
        let _ = self.finish_recording(started);
    }

    fn catalogue(&self, kind: AssetKind, file: FileHandle) -> Result<AssetRecord, MediaError> {
        let record = AssetRecord::captured_now(kind, file);
        self.catalog
            .append(record.clone())
            .map_err(|e| self.report(e))?;

        log::info!("Catalogued {:?} {}", record.kind, record.uri);
        if let Some(delegate) = self.delegate() {
            delegate.on_asset_captured(&record);
        }
        Ok(record)
    }

    /// `photo_<unix millis>_<random suffix>.jpg` inside the media directory.
    fn photo_destination(&self) -> PathBuf {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        let file_name = format!("photo_{}_{}.jpg", Utc::now().timestamp_millis(), &suffix[..8]);
        self.config.media_directory.join(file_name)
    }

    fn set_mode(&self, mode: CaptureMode) {
        {
            let mut s = self.session_state.lock();
            if s.mode == mode {
                return;
            }
            s.mode = mode;
        }
        self.notify_mode(mode);
    }

    fn notify_mode(&self, mode: CaptureMode) {
        log::debug!("Capture mode -> {}", mode);
        if let Some(delegate) = self.delegate() {
            delegate.on_mode_changed(mode);
        }
    }

    /// Log an error and forward it to the delegate, handing it back for `?`.
    fn report(&self, error: MediaError) -> MediaError {
        log::error!("Capture session error: {}", error);
        if let Some(delegate) = self.delegate() {
            delegate.on_error(&error);
        }
        error
    }
}

fn as_capture_error(error: MediaError) -> MediaError {
    match error {
        MediaError::Capture(_) | MediaError::PermissionDenied(_) => error,
        other => MediaError::Capture(other.to_string()),
    }
}

fn as_io_error(error: MediaError) -> MediaError {
    match error {
        MediaError::Io(_) => error,
        other => MediaError::Io(other.to_string()),
    }
}
