use serde::{Deserialize, Serialize};

/// Process-wide browser configuration, fixed when the app is constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrowserConfig {
    pub home_url: String,
    pub window: WindowConfig,
    pub zoom: ZoomConfig,
    /// Extensions that require confirmation before download, lower-case.
    pub executable_extensions: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            home_url: "https://www.google.com".to_string(),
            window: WindowConfig::default(),
            zoom: ZoomConfig::default(),
            executable_extensions: ["exe", "msi", "bat", "cmd", "sh"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl BrowserConfig {
    pub fn with_home_url(mut self, url: &str) -> Self {
        self.home_url = url.to_string();
        self
    }

    pub fn with_zoom(mut self, zoom: ZoomConfig) -> Self {
        self.zoom = zoom;
        self
    }
}

/// Top-level window geometry and title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tmeon Browser".to_string(),
            x: 100,
            y: 100,
            width: 1200,
            height: 800,
        }
    }
}

/// Zoom step and the range zoom factors are clamped to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZoomConfig {
    pub step: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: 0.1,
            min: 0.25,
            max: 5.0,
        }
    }
}

impl ZoomConfig {
    pub fn clamp(&self, factor: f64) -> f64 {
        factor.clamp(self.min, self.max)
    }
}
