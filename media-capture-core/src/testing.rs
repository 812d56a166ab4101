//! Port fakes shared by the unit tests.

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc;

use parking_lot::Mutex;

use crate::models::asset::{AssetRecord, FileHandle};
use crate::models::config::{PhotoOptions, RecordingOptions};
use crate::models::error::MediaError;
use crate::models::state::{CameraFacing, CaptureMode, PermissionStatus};
use crate::storage::memory_store::MemoryStore;
use crate::traits::camera_device::CameraDevice;
use crate::traits::file_deleter::FileDeleter;
use crate::traits::file_mover::FileMover;
use crate::traits::key_value_store::KeyValueStore;
use crate::traits::media_library::MediaLibrary;
use crate::traits::session_delegate::SessionDelegate;

/// `MemoryStore` whose reads and writes can be made to fail.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub writes: AtomicUsize,
}

impl FlakyStore {
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, MediaError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(MediaError::PersistenceRead("disk unavailable".into()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MediaError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(MediaError::PersistenceWrite("disk full".into()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value)
    }
}

#[derive(Default)]
pub struct FakeDeleter {
    pub deleted: Mutex<Vec<(String, bool)>>,
    pub fail: AtomicBool,
}

impl FileDeleter for FakeDeleter {
    fn delete(&self, file: &FileHandle, idempotent: bool) -> Result<(), MediaError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(MediaError::Io(format!("cannot unlink {}", file)));
        }
        self.deleted.lock().push((file.to_string(), idempotent));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeMover {
    pub moves: Mutex<Vec<(String, String)>>,
    pub fail: AtomicBool,
}

impl FileMover for FakeMover {
    fn move_file(&self, from: &FileHandle, to: &Path) -> Result<FileHandle, MediaError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(MediaError::Io("no space left on device".into()));
        }
        let moved = FileHandle::from_path(to);
        self.moves.lock().push((from.to_string(), moved.to_string()));
        Ok(moved)
    }
}

#[derive(Default)]
pub struct FakeLibrary {
    pub registered: Mutex<Vec<String>>,
    pub fail: AtomicBool,
}

impl MediaLibrary for FakeLibrary {
    fn register(&self, file: &FileHandle) -> Result<(), MediaError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(MediaError::Registration("library locked".into()));
        }
        self.registered.lock().push(file.to_string());
        Ok(())
    }
}

/// Blocks one camera call until the test releases it.
pub struct Gate {
    entered: mpsc::Sender<()>,
    release: mpsc::Receiver<()>,
}

impl Gate {
    fn open() -> (Self, mpsc::Receiver<()>, mpsc::Sender<()>) {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let gate = Self {
            entered: entered_tx,
            release: release_rx,
        };
        (gate, entered_rx, release_tx)
    }

    fn pass(slot: &Mutex<Option<Gate>>) {
        let gate = slot.lock().take();
        if let Some(gate) = gate {
            let _ = gate.entered.send(());
            let _ = gate.release.recv();
        }
    }
}

pub struct FakeCamera {
    pub permissions: Mutex<PermissionStatus>,
    pub facings: Mutex<Vec<CameraFacing>>,
    pub last_recording: Mutex<Option<RecordingOptions>>,
    pub recording: AtomicBool,
    pub fail_capture: AtomicBool,
    pub fail_facing: AtomicBool,
    pub fail_stop: AtomicBool,
    pub stops: AtomicUsize,
    counter: AtomicUsize,
    photo_gate: Mutex<Option<Gate>>,
    stop_gate: Mutex<Option<Gate>>,
}

impl Default for FakeCamera {
    fn default() -> Self {
        Self {
            permissions: Mutex::new(PermissionStatus::granted()),
            facings: Mutex::new(Vec::new()),
            last_recording: Mutex::new(None),
            recording: AtomicBool::new(false),
            fail_capture: AtomicBool::new(false),
            fail_facing: AtomicBool::new(false),
            fail_stop: AtomicBool::new(false),
            stops: AtomicUsize::new(0),
            counter: AtomicUsize::new(0),
            photo_gate: Mutex::new(None),
            stop_gate: Mutex::new(None),
        }
    }
}

impl FakeCamera {
    /// Make the next photo capture wait. Returns (entered, release) ends.
    pub fn hold_photos(&self) -> (mpsc::Receiver<()>, mpsc::Sender<()>) {
        let (gate, entered, release) = Gate::open();
        *self.photo_gate.lock() = Some(gate);
        (entered, release)
    }

    /// Same as `hold_photos`, for the next `stop_recording`.
    pub fn hold_stops(&self) -> (mpsc::Receiver<()>, mpsc::Sender<()>) {
        let (gate, entered, release) = Gate::open();
        *self.stop_gate.lock() = Some(gate);
        (entered, release)
    }

    fn next_id(&self) -> usize {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl CameraDevice for FakeCamera {
    fn permissions(&self) -> PermissionStatus {
        *self.permissions.lock()
    }

    fn set_facing(&self, facing: CameraFacing) -> Result<(), MediaError> {
        if self.fail_facing.load(Ordering::SeqCst) {
            return Err(MediaError::Capture("front camera unavailable".into()));
        }
        self.facings.lock().push(facing);
        Ok(())
    }

    fn capture_photo(&self, _options: &PhotoOptions) -> Result<FileHandle, MediaError> {
        Gate::pass(&self.photo_gate);
        if self.fail_capture.load(Ordering::SeqCst) {
            return Err(MediaError::Capture("camera not ready".into()));
        }
        Ok(FileHandle::new(format!("cache/Camera/{}.jpg", self.next_id())))
    }

    fn start_recording(&self, options: &RecordingOptions) -> Result<(), MediaError> {
        if self.fail_capture.load(Ordering::SeqCst) {
            return Err(MediaError::Capture("encoder busy".into()));
        }
        *self.last_recording.lock() = Some(*options);
        self.recording.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop_recording(&self) -> Result<FileHandle, MediaError> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        Gate::pass(&self.stop_gate);
        self.recording.store(false, Ordering::SeqCst);
        if self.fail_stop.load(Ordering::SeqCst) {
            return Err(MediaError::Capture("recording interrupted".into()));
        }
        Ok(FileHandle::new(format!("cache/Camera/{}.mp4", self.next_id())))
    }
}

#[derive(Default)]
pub struct EventLog {
    pub events: Mutex<Vec<String>>,
}

impl EventLog {
    pub fn snapshot(&self) -> Vec<String> {
        self.events.lock().clone()
    }
}

impl SessionDelegate for EventLog {
    fn on_mode_changed(&self, mode: CaptureMode) {
        self.events.lock().push(format!("mode:{}", mode));
    }

    fn on_facing_changed(&self, facing: CameraFacing) {
        self.events.lock().push(format!("facing:{}", facing));
    }

    fn on_asset_captured(&self, record: &AssetRecord) {
        self.events.lock().push(format!("asset:{:?}", record.kind));
    }

    fn on_error(&self, error: &MediaError) {
        self.events.lock().push(format!("error:{}", error));
    }
}
