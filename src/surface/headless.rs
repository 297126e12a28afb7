//! In-memory rendering surface.
//!
//! Keeps a linear session history and a zoom factor without rendering
//! anything. Drives the console demo and the test suite.

use crate::surface::{RenderSurface, SurfaceFactory};
use crate::types::errors::SurfaceError;

const BLANK: &str = "about:blank";

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    history: Vec<String>,
    position: Option<usize>,
    zoom: f64,
    active: bool,
    reloads: usize,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            position: None,
            zoom: 1.0,
            active: false,
            reloads: 0,
        }
    }

    /// Session history entries, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reload_count(&self) -> usize {
        self.reloads
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for HeadlessSurface {
    fn load(&mut self, address: &str) -> Result<(), SurfaceError> {
        // A new load drops any forward entries, like a real session history.
        if let Some(pos) = self.position {
            self.history.truncate(pos + 1);
        }
        self.history.push(address.to_string());
        self.position = Some(self.history.len() - 1);
        Ok(())
    }

    fn go_back(&mut self) -> Result<(), SurfaceError> {
        if let Some(pos) = self.position {
            if pos > 0 {
                self.position = Some(pos - 1);
            }
        }
        Ok(())
    }

    fn go_forward(&mut self) -> Result<(), SurfaceError> {
        if let Some(pos) = self.position {
            if pos + 1 < self.history.len() {
                self.position = Some(pos + 1);
            }
        }
        Ok(())
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        self.reloads += 1;
        Ok(())
    }

    fn current_address(&self) -> String {
        self.position
            .and_then(|pos| self.history.get(pos))
            .cloned()
            .unwrap_or_else(|| BLANK.to_string())
    }

    fn set_zoom_factor(&mut self, factor: f64) -> Result<(), SurfaceError> {
        self.zoom = factor;
        Ok(())
    }

    fn zoom_factor(&self) -> f64 {
        self.zoom
    }

    fn set_active(&mut self, active: bool) -> Result<(), SurfaceError> {
        self.active = active;
        Ok(())
    }
}

/// Factory handing out fresh [`HeadlessSurface`]s.
#[derive(Debug, Default)]
pub struct HeadlessFactory {
    created: usize,
}

impl HeadlessFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created(&self) -> usize {
        self.created
    }
}

impl SurfaceFactory for HeadlessFactory {
    type Surface = HeadlessSurface;

    fn create_surface(&mut self, _tab_id: &str) -> Result<HeadlessSurface, SurfaceError> {
        self.created += 1;
        Ok(HeadlessSurface::new())
    }
}
