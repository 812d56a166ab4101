use std::sync::Arc;

use parking_lot::Mutex;

use crate::catalog::media_catalog::MediaCatalog;
use crate::models::config::CaptureConfiguration;
use crate::models::error::MediaError;
use crate::session::capture_session::CaptureSession;
use crate::traits::camera_device::CameraDevice;
use crate::traits::file_deleter::FileDeleter;
use crate::traits::file_mover::FileMover;
use crate::traits::key_value_store::KeyValueStore;
use crate::traits::media_library::MediaLibrary;
use crate::traits::session_delegate::SessionDelegate;
use crate::view::mode_controller::ViewModeController;

/// Platform services the app is wired to.
pub struct Ports<C: CameraDevice> {
    pub camera: C,
    pub store: Arc<dyn KeyValueStore>,
    pub mover: Arc<dyn FileMover>,
    pub deleter: Arc<dyn FileDeleter>,
    pub library: Arc<dyn MediaLibrary>,
}

/// Application context: one catalog, one capture session and the view
/// switch, created together at startup.
pub struct MediaApp<C: CameraDevice> {
    catalog: Arc<MediaCatalog>,
    session: CaptureSession<C>,
    views: Mutex<ViewModeController>,
}

impl<C: CameraDevice> MediaApp<C> {
    /// Validate `config`, build the components and load the catalog.
    ///
    /// An unreadable catalog snapshot does not block startup; the app comes
    /// up with an empty catalog instead.
    pub fn start(
        config: CaptureConfiguration,
        ports: Ports<C>,
        delegate: Option<Arc<dyn SessionDelegate>>,
    ) -> Result<Self, MediaError> {
        config.validate().map_err(MediaError::ConfigurationFailed)?;

        let catalog = Arc::new(MediaCatalog::new(
            ports.store,
            ports.deleter,
            config.catalog_key.clone(),
        ));
        catalog.load_or_empty();

        let session = CaptureSession::new(
            ports.camera,
            ports.mover,
            ports.library,
            Arc::clone(&catalog),
            config,
        );
        if let Some(delegate) = delegate {
            session.set_delegate(delegate);
        }

        Ok(Self {
            catalog,
            session,
            views: Mutex::new(ViewModeController::new()),
        })
    }

    pub fn catalog(&self) -> &Arc<MediaCatalog> {
        &self.catalog
    }

    pub fn session(&self) -> &CaptureSession<C> {
        &self.session
    }

    pub fn views(&self) -> &Mutex<ViewModeController> {
        &self.views
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::asset::AssetKind;
    use crate::models::state::CaptureMode;
    use crate::testing::{FakeCamera, FakeDeleter, FakeLibrary, FakeMover, FlakyStore};
    use crate::view::mode_controller::ViewMode;

    fn ports(store: Arc<FlakyStore>) -> Ports<FakeCamera> {
        Ports {
            camera: FakeCamera::default(),
            store,
            mover: Arc::new(FakeMover::default()),
            deleter: Arc::new(FakeDeleter::default()),
            library: Arc::new(FakeLibrary::default()),
        }
    }

    #[test]
    fn start_loads_persisted_catalog() {
        let store = Arc::new(FlakyStore::default());
        {
            let app = MediaApp::start(CaptureConfiguration::default(), ports(store.clone()), None).unwrap();
            app.session().capture_photo().unwrap();
            app.session().start_recording().unwrap();
            app.session().stop_recording().unwrap();
        }

        let app = MediaApp::start(CaptureConfiguration::default(), ports(store), None).unwrap();
        let records = app.catalog().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, AssetKind::Photo);
        assert_eq!(records[1].kind, AssetKind::Video);
        assert_eq!(app.session().mode(), CaptureMode::Idle);
        assert_eq!(app.views().lock().mode(), ViewMode::Home);
    }

    #[test]
    fn start_survives_corrupt_snapshot() {
        let store = Arc::new(FlakyStore::default());
        store.inner.set("capturedMedia", "not json").unwrap();

        let app = MediaApp::start(CaptureConfiguration::default(), ports(store), None).unwrap();
        assert!(app.catalog().is_empty());
        app.session().capture_photo().unwrap();
        assert_eq!(app.catalog().len(), 1);
    }

    #[test]
    fn start_rejects_invalid_config() {
        let config = CaptureConfiguration {
            max_recording_secs: 0,
            ..Default::default()
        };
        let result = MediaApp::start(config, ports(Arc::new(FlakyStore::default())), None);
        assert!(matches!(result, Err(MediaError::ConfigurationFailed(_))));
    }
}
