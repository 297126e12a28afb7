// Tmeon rendering-surface abstraction
// The web engine is an external collaborator; everything the browser shell
// needs from it goes through these two traits.
//
// `headless` is always compiled (console demo, tests). The wry-backed
// implementation lives in `ui::webview_surface` behind the `gui` feature.

use crate::types::errors::SurfaceError;

pub mod headless;

/// Capabilities of one tab's web view.
pub trait RenderSurface {
    fn load(&mut self, address: &str) -> Result<(), SurfaceError>;
    fn go_back(&mut self) -> Result<(), SurfaceError>;
    fn go_forward(&mut self) -> Result<(), SurfaceError>;
    fn reload(&mut self) -> Result<(), SurfaceError>;
    fn current_address(&self) -> String;
    fn set_zoom_factor(&mut self, factor: f64) -> Result<(), SurfaceError>;
    fn zoom_factor(&self) -> f64;
    /// Show the surface when its tab gains focus, hide it otherwise.
    fn set_active(&mut self, active: bool) -> Result<(), SurfaceError>;
}

/// Creates a fresh surface for a tab. One factory per window.
pub trait SurfaceFactory {
    type Surface: RenderSurface;

    fn create_surface(&mut self, tab_id: &str) -> Result<Self::Surface, SurfaceError>;
}
