use serde::{Deserialize, Serialize};

/// Top-level screen selection.
///
/// `Home` is the launch state where neither the camera nor the catalog is
/// shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Home,
    Capture,
    Catalog,
}

/// Switches between the capture view and the catalog view. Showing one
/// always hides the other.
#[derive(Debug, Clone, Default)]
pub struct ViewModeController {
    mode: ViewMode,
}

impl ViewModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn shows_capture(&self) -> bool {
        self.mode == ViewMode::Capture
    }

    pub fn shows_catalog(&self) -> bool {
        self.mode == ViewMode::Catalog
    }

    /// Show the capture view, or go back home if it is already shown.
    pub fn toggle_capture(&mut self) -> ViewMode {
        self.mode = if self.shows_capture() { ViewMode::Home } else { ViewMode::Capture };
        self.mode
    }

    /// Show the catalog view, or go back home if it is already shown.
    pub fn toggle_catalog(&mut self) -> ViewMode {
        self.mode = if self.shows_catalog() { ViewMode::Home } else { ViewMode::Catalog };
        self.mode
    }

    pub fn show_capture(&mut self) {
        self.mode = ViewMode::Capture;
    }

    pub fn show_catalog(&mut self) {
        self.mode = ViewMode::Catalog;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_home() {
        let views = ViewModeController::new();
        assert_eq!(views.mode(), ViewMode::Home);
        assert!(!views.shows_capture());
        assert!(!views.shows_catalog());
    }

    #[test]
    fn toggles_are_mutually_exclusive() {
        let mut views = ViewModeController::new();

        assert_eq!(views.toggle_capture(), ViewMode::Capture);
        assert_eq!(views.toggle_catalog(), ViewMode::Catalog);
        assert!(!views.shows_capture());

        assert_eq!(views.toggle_capture(), ViewMode::Capture);
        assert!(!views.shows_catalog());
    }

    #[test]
    fn toggling_visible_view_goes_home() {
        let mut views = ViewModeController::new();
        views.toggle_catalog();
        assert_eq!(views.toggle_catalog(), ViewMode::Home);
    }

    #[test]
    fn show_is_not_a_toggle() {
        let mut views = ViewModeController::new();
        views.show_capture();
        views.show_capture();
        assert!(views.shows_capture());
        views.show_catalog();
        assert!(views.shows_catalog());
    }
}
