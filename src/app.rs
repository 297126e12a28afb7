//! App Core for Tmeon.
//!
//! Registry of open windows. Every window has its own [`WindowController`]
//! and tab collection; nothing is shared between windows except the
//! read-only configuration, the shortcut table and the download gatekeeper.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{info, warn};

use crate::ipc_handler::{self, IpcAction};
use crate::managers::shortcut_manager::ShortcutManager;
use crate::managers::window_controller::WindowController;
use crate::services::dialogs::Dialogs;
use crate::services::download_gatekeeper::DownloadGatekeeper;
use crate::services::menu::standard_menu_bar;
use crate::surface::SurfaceFactory;
use crate::types::command::{CloseDecision, Command, Outcome};
use crate::types::config::BrowserConfig;
use crate::types::errors::BrowserError;
use crate::types::menu::MenuBar;

/// Central application struct, generic over the window key (the native
/// window id in the GUI) and the surface factory each window uses.
pub struct App<K, F: SurfaceFactory> {
    config: BrowserConfig,
    shortcuts: ShortcutManager,
    gatekeeper: DownloadGatekeeper,
    windows: HashMap<K, WindowController<F>>,
}

impl<K, F> App<K, F>
where
    K: Eq + Hash + Copy + Debug,
    F: SurfaceFactory,
{
    pub fn new(config: BrowserConfig) -> Self {
        let gatekeeper = DownloadGatekeeper::from_config(&config);
        Self {
            config,
            shortcuts: ShortcutManager::new(),
            gatekeeper,
            windows: HashMap::new(),
        }
    }

    /// Registers a new, independent window and opens its first tab.
    pub fn open_window(
        &mut self,
        key: K,
        factory: F,
        dialogs: Box<dyn Dialogs>,
    ) -> Result<&mut WindowController<F>, BrowserError> {
        let controller = WindowController::new(&self.config, factory, dialogs)?;
        self.windows.insert(key, controller);
        info!(window = ?key, open = self.windows.len(), "window opened");
        self.window_mut(key)
    }

    /// Runs a command in one window. A confirmed exit removes the window.
    pub fn dispatch(&mut self, key: K, command: Command) -> Result<Outcome, BrowserError> {
        let outcome = self.window_mut(key)?.dispatch(command)?;
        if outcome == Outcome::CloseWindow {
            self.remove_window(key);
        }
        Ok(outcome)
    }

    /// Decodes and routes a toolbar message posted from `tab_id`.
    pub fn handle_ipc(&mut self, key: K, tab_id: &str, body: &str) -> Result<Outcome, BrowserError> {
        match ipc_handler::decode(body, &self.shortcuts)? {
            IpcAction::Refresh => Ok(Outcome::Handled),
            IpcAction::PageInfo { url, title } => {
                let window = self.window_mut(key)?;
                window.on_location_changed(tab_id, &url)?;
                window.on_title_changed(tab_id, &title)?;
                Ok(Outcome::Handled)
            }
            IpcAction::Run(command) => self.dispatch(key, command),
        }
    }

    /// Window-manager close button: confirm, then forget the window.
    pub fn request_close(&mut self, key: K) -> Result<CloseDecision, BrowserError> {
        let decision = self.window(key)?.request_close();
        if decision == CloseDecision::Proceed {
            self.remove_window(key);
        }
        Ok(decision)
    }

    fn remove_window(&mut self, key: K) {
        match self.windows.remove(&key) {
            Some(_) => info!(window = ?key, remaining = self.windows.len(), "window closed"),
            None => warn!(window = ?key, "close for unknown window"),
        }
    }

    pub fn window(&self, key: K) -> Result<&WindowController<F>, BrowserError> {
        self.windows
            .get(&key)
            .ok_or_else(|| BrowserError::WindowNotFound(format!("{:?}", key)))
    }

    pub fn window_mut(&mut self, key: K) -> Result<&mut WindowController<F>, BrowserError> {
        self.windows
            .get_mut(&key)
            .ok_or_else(|| BrowserError::WindowNotFound(format!("{:?}", key)))
    }

    pub fn windows_mut(&mut self) -> impl Iterator<Item = (&K, &mut WindowController<F>)> {
        self.windows.iter_mut()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// True once the last window is gone; the event loop should exit.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn shortcuts(&self) -> &ShortcutManager {
        &self.shortcuts
    }

    pub fn gatekeeper(&self) -> &DownloadGatekeeper {
        &self.gatekeeper
    }

    pub fn menu_bar(&self) -> MenuBar {
        standard_menu_bar(&self.shortcuts)
    }
}
