//! Window Controller for Tmeon.
//!
//! One controller per top-level window. It owns the window's tabs, the
//! address-field text and the status line, and turns every [`Command`] into
//! calls on the active tab's rendering surface.
//!
//! The controller never reaches for "the first tab" or any other implicit
//! surface: navigation and zoom always go through the explicit active-tab id
//! held by the [`TabManager`], which only changes on focus changes.

use tracing::{debug, info};

use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::address::{resolve_address, title_for_address};
use crate::services::dialogs::Dialogs;
use crate::surface::{RenderSurface, SurfaceFactory};
use crate::types::chrome::ChromeState;
use crate::types::command::{CloseDecision, Command, Outcome};
use crate::types::config::{BrowserConfig, ZoomConfig};
use crate::types::errors::{BrowserError, TabError};
use crate::types::tab::Tab;

const APP_NAME: &str = "Tmeon Browser";

pub struct WindowController<F: SurfaceFactory> {
    // Declared before `factory` so tab surfaces drop before the window
    // the factory holds on to.
    tabs: TabManager<F::Surface>,
    factory: F,
    dialogs: Box<dyn Dialogs>,
    home_url: String,
    zoom: ZoomConfig,
    address_field: String,
    status: String,
}

impl<F: SurfaceFactory> WindowController<F> {
    /// Creates the controller and its first tab, showing the home page.
    pub fn new(
        config: &BrowserConfig,
        factory: F,
        dialogs: Box<dyn Dialogs>,
    ) -> Result<Self, BrowserError> {
        let mut controller = Self {
            tabs: TabManager::new(),
            factory,
            dialogs,
            home_url: config.home_url.clone(),
            zoom: config.zoom,
            address_field: String::new(),
            status: String::new(),
        };
        controller.new_tab()?;
        Ok(controller)
    }

    // ─── Navigation ───

    /// Loads address-bar text in the active tab, prefixing `https://` when
    /// the text has no http(s) scheme. Returns the address actually loaded.
    pub fn navigate_to(&mut self, text: &str) -> Result<String, BrowserError> {
        let address = resolve_address(text);
        {
            let tab = self.active_tab_mut()?;
            tab.surface.load(&address)?;
            tab.address = address.clone();
            tab.title = title_for_address(&address);
        }
        info!(%address, "navigate");
        self.address_field = address.clone();
        self.set_status(format!("Loading {}", address));
        Ok(address)
    }

    pub fn go_home(&mut self) -> Result<(), BrowserError> {
        let home = self.home_url.clone();
        self.navigate_to(&home)?;
        Ok(())
    }

    pub fn go_back(&mut self) -> Result<(), BrowserError> {
        self.active_tab_mut()?.surface.go_back()?;
        self.on_active_tab_changed();
        Ok(())
    }

    pub fn go_forward(&mut self) -> Result<(), BrowserError> {
        self.active_tab_mut()?.surface.go_forward()?;
        self.on_active_tab_changed();
        Ok(())
    }

    pub fn reload(&mut self) -> Result<(), BrowserError> {
        self.active_tab_mut()?.surface.reload()?;
        self.set_status("Reloading");
        Ok(())
    }

    // ─── Tabs and windows ───

    /// Opens a tab on the home page and focuses it. Returns its id.
    pub fn new_tab(&mut self) -> Result<String, BrowserError> {
        let id = TabManager::<F::Surface>::new_tab_id();
        let mut surface = self.factory.create_surface(&id)?;
        surface.load(&self.home_url)?;

        if let Some(previous) = self.tabs.get_active_tab_mut() {
            previous.surface.set_active(false)?;
        }
        surface.set_active(true)?;

        let home = self.home_url.clone();
        self.tabs.create_tab(id.clone(), surface, &home, true);
        debug!(tab = %id, count = self.tabs.tab_count(), "tab created");

        self.on_active_tab_changed();
        Ok(id)
    }

    /// Asks the caller to open an independent window with its own tabs.
    pub fn new_window(&self) -> Outcome {
        info!("new window requested");
        Outcome::OpenWindow
    }

    pub fn switch_tab(&mut self, tab_id: &str) -> Result<(), BrowserError> {
        if self.tabs.active_tab_id() == Some(tab_id) {
            return Ok(());
        }
        if self.tabs.get_tab(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id.to_string()).into());
        }

        if let Some(previous) = self.tabs.get_active_tab_mut() {
            previous.surface.set_active(false)?;
        }
        self.tabs.switch_tab(tab_id)?;
        self.active_tab_mut()?.surface.set_active(true)?;
        debug!(tab = %tab_id, "tab switched");

        self.on_active_tab_changed();
        Ok(())
    }

    /// Closes a tab. A window never ends up without tabs: closing the last
    /// one opens a fresh home tab.
    pub fn close_tab(&mut self, tab_id: &str) -> Result<(), BrowserError> {
        let was_active = self.tabs.active_tab_id() == Some(tab_id);
        self.tabs.close_tab(tab_id)?;

        if self.tabs.tab_count() == 0 {
            self.new_tab()?;
            return Ok(());
        }
        if was_active {
            self.active_tab_mut()?.surface.set_active(true)?;
            self.on_active_tab_changed();
        }
        Ok(())
    }

    pub fn close_active_tab(&mut self) -> Result<(), BrowserError> {
        let id = self
            .tabs
            .active_tab_id()
            .ok_or(TabError::NoActiveTab)?
            .to_string();
        self.close_tab(&id)
    }

    // ─── Engine notifications ───

    /// Copies the active tab's current address into the address field.
    pub fn on_active_tab_changed(&mut self) {
        let Some(tab) = self.tabs.get_active_tab_mut() else {
            self.address_field.clear();
            return;
        };
        let address = tab.surface.current_address();
        tab.address = address.clone();
        self.address_field = address;
    }

    /// A tab's location changed (page load finished, redirect, history move).
    pub fn on_location_changed(&mut self, tab_id: &str, address: &str) -> Result<(), BrowserError> {
        self.tabs.update_tab_address(tab_id, address)?;
        if self.tabs.active_tab_id() == Some(tab_id) {
            self.address_field = address.to_string();
            self.set_status("Done");
        }
        Ok(())
    }

    pub fn on_title_changed(&mut self, tab_id: &str, title: &str) -> Result<(), BrowserError> {
        if title.is_empty() {
            return Ok(());
        }
        self.tabs.update_tab_title(tab_id, title)?;
        Ok(())
    }

    // ─── Zoom ───

    pub fn zoom_reset(&mut self) -> Result<f64, BrowserError> {
        self.set_zoom(1.0)
    }

    pub fn zoom_in(&mut self) -> Result<f64, BrowserError> {
        let current = self.active_tab()?.surface.zoom_factor();
        self.set_zoom(self.zoom.clamp(current + self.zoom.step))
    }

    pub fn zoom_out(&mut self) -> Result<f64, BrowserError> {
        let current = self.active_tab()?.surface.zoom_factor();
        self.set_zoom(self.zoom.clamp(current - self.zoom.step))
    }

    fn set_zoom(&mut self, factor: f64) -> Result<f64, BrowserError> {
        self.active_tab_mut()?.surface.set_zoom_factor(factor)?;
        self.set_status(format!("Zoom {:.0}%", factor * 100.0));
        Ok(factor)
    }

    // ─── Dialogs ───

    /// Asks before the window goes away. Only an explicit "yes" proceeds.
    pub fn request_close(&self) -> CloseDecision {
        if self.dialogs.confirm("Close", "Are you sure you want to quit?") {
            info!("window close confirmed");
            CloseDecision::Proceed
        } else {
            info!("window close vetoed");
            CloseDecision::Vetoed
        }
    }

    pub fn show_settings(&self) {
        self.dialogs.inform("Settings", "Settings will be here.");
    }

    pub fn show_download_manager(&self) {
        self.dialogs.warn("Download Manager", "Feature coming soon.");
    }

    pub fn show_about(&self) {
        let text = format!("{} - Version {}", APP_NAME, env!("CARGO_PKG_VERSION"));
        self.dialogs.inform(&format!("About {}", APP_NAME), &text);
    }

    // ─── Command routing ───

    /// Runs one command against this window.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, BrowserError> {
        debug!(?command, "dispatch");
        match command {
            Command::Back => self.go_back()?,
            Command::Forward => self.go_forward()?,
            Command::Reload => self.reload()?,
            Command::Home => self.go_home()?,
            Command::Navigate(text) => {
                self.navigate_to(&text)?;
            }
            Command::NewTab => {
                self.new_tab()?;
            }
            Command::NewWindow => return Ok(self.new_window()),
            Command::SwitchTab(id) => self.switch_tab(&id)?,
            Command::CloseTab(id) => self.close_tab(&id)?,
            Command::CloseActiveTab => self.close_active_tab()?,
            Command::ZoomReset => {
                self.zoom_reset()?;
            }
            Command::ZoomIn => {
                self.zoom_in()?;
            }
            Command::ZoomOut => {
                self.zoom_out()?;
            }
            Command::Settings => self.show_settings(),
            Command::DownloadManager => self.show_download_manager(),
            Command::About => self.show_about(),
            Command::Exit => {
                return Ok(match self.request_close() {
                    CloseDecision::Proceed => Outcome::CloseWindow,
                    CloseDecision::Vetoed => Outcome::Handled,
                });
            }
        }
        Ok(Outcome::Handled)
    }

    // ─── State ───

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn address_field(&self) -> &str {
        &self.address_field
    }

    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    pub fn tabs(&self) -> &TabManager<F::Surface> {
        &self.tabs
    }

    pub fn active_tab(&self) -> Result<&Tab<F::Surface>, TabError> {
        self.tabs.get_active_tab().ok_or(TabError::NoActiveTab)
    }

    fn active_tab_mut(&mut self) -> Result<&mut Tab<F::Surface>, TabError> {
        self.tabs.get_active_tab_mut().ok_or(TabError::NoActiveTab)
    }

    pub fn active_surface(&self) -> Option<&F::Surface> {
        self.tabs.get_active_tab().map(|t| &t.surface)
    }

    /// Applies `f` to every tab's surface, e.g. to follow a window resize.
    pub fn for_each_surface(&mut self, mut f: impl FnMut(&mut F::Surface)) {
        for tab in self.tabs.iter_mut() {
            f(&mut tab.surface);
        }
    }

    pub fn chrome_state(&self) -> ChromeState {
        ChromeState {
            tabs: self.tabs.summaries(),
            active_id: self.tabs.active_tab_id().map(str::to_string),
            address: self.address_field.clone(),
            status: self.status.clone(),
            zoom: self
                .active_surface()
                .map(|s| s.zoom_factor())
                .unwrap_or(1.0),
        }
    }
}
