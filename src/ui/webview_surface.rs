//! `wry`-backed rendering surfaces.
//!
//! Each tab gets its own `WebView`, created as a child of the window's
//! native view. Engine callbacks never touch the controller directly: they
//! post a [`UserEvent`] through the event-loop proxy and the loop routes it.
//! The download-started callback is the one exception, because the engine
//! wants its answer synchronously.

use std::path::PathBuf;

use tao::event_loop::EventLoopProxy;
use tao::window::{Window, WindowId};
use tracing::debug;
use wry::dpi::{LogicalPosition, PhysicalSize};
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use crate::services::download_gatekeeper::{DownloadGatekeeper, DownloadGatekeeperTrait};
use crate::surface::{RenderSurface, SurfaceFactory};
use crate::types::download::DownloadState;
use crate::types::errors::SurfaceError;
use crate::ui::native_dialogs::NativeDialogs;

const TOOLBAR_JS: &str = include_str!("../../resources/ui/toolbar.js");

/// Events posted from engine callbacks back to the event loop.
#[derive(Debug)]
pub enum UserEvent {
    /// Raw JSON posted by the toolbar script of a tab.
    Ipc {
        window: WindowId,
        tab: String,
        body: String,
    },
    /// A tab finished loading a document.
    PageLoaded {
        window: WindowId,
        tab: String,
        address: String,
    },
    /// A page asked for a popup; it opens in the requesting tab instead.
    OpenInTab { window: WindowId, address: String },
    DownloadReviewed {
        window: WindowId,
        file_name: String,
        state: DownloadState,
    },
    DownloadFinished {
        window: WindowId,
        address: String,
        success: bool,
    },
}

fn engine_error(e: wry::Error) -> SurfaceError {
    SurfaceError::Engine(e.to_string())
}

/// One tab's web view.
pub struct WebViewSurface {
    webview: WebView,
    address: String,
    zoom: f64,
}

impl WebViewSurface {
    pub fn evaluate(&self, script: &str) -> Result<(), SurfaceError> {
        self.webview.evaluate_script(script).map_err(engine_error)
    }

    /// Resizes the view to cover the window's client area.
    pub fn fit(&self, width: u32, height: u32) -> Result<(), SurfaceError> {
        self.webview.set_bounds(full_bounds(width, height)).map_err(engine_error)
    }
}

impl RenderSurface for WebViewSurface {
    fn load(&mut self, address: &str) -> Result<(), SurfaceError> {
        self.webview.load_url(address).map_err(engine_error)?;
        self.address = address.to_string();
        Ok(())
    }

    // wry has no history API; the page's own history object does the work.
    fn go_back(&mut self) -> Result<(), SurfaceError> {
        self.evaluate("history.back()")
    }

    fn go_forward(&mut self) -> Result<(), SurfaceError> {
        self.evaluate("history.forward()")
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        self.evaluate("location.reload()")
    }

    fn current_address(&self) -> String {
        self.webview.url().unwrap_or_else(|_| self.address.clone())
    }

    fn set_zoom_factor(&mut self, factor: f64) -> Result<(), SurfaceError> {
        self.webview.zoom(factor).map_err(engine_error)?;
        self.zoom = factor;
        Ok(())
    }

    fn zoom_factor(&self) -> f64 {
        self.zoom
    }

    fn set_active(&mut self, active: bool) -> Result<(), SurfaceError> {
        self.webview.set_visible(active).map_err(engine_error)?;
        if active {
            self.webview.focus().map_err(engine_error)?;
        }
        Ok(())
    }
}

fn full_bounds(width: u32, height: u32) -> Rect {
    Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: PhysicalSize::new(width, height).into(),
    }
}

/// Creates the web views of one window. Owns the native window, so it is
/// dropped (and the window closed) together with the window's controller.
pub struct WebViewFactory {
    window: Window,
    proxy: EventLoopProxy<UserEvent>,
    gatekeeper: DownloadGatekeeper,
}

impl WebViewFactory {
    pub fn new(window: Window, proxy: EventLoopProxy<UserEvent>, gatekeeper: DownloadGatekeeper) -> Self {
        Self {
            window,
            proxy,
            gatekeeper,
        }
    }

    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }
}

impl SurfaceFactory for WebViewFactory {
    type Surface = WebViewSurface;

    fn create_surface(&mut self, tab_id: &str) -> Result<WebViewSurface, SurfaceError> {
        let window_id = self.window.id();

        let ipc_proxy = self.proxy.clone();
        let ipc_tab = tab_id.to_string();
        let load_proxy = self.proxy.clone();
        let load_tab = tab_id.to_string();
        let nw_proxy = self.proxy.clone();
        let dl_proxy = self.proxy.clone();
        let done_proxy = self.proxy.clone();
        let gatekeeper = self.gatekeeper.clone();

        let builder = WebViewBuilder::new()
            .with_initialization_script(TOOLBAR_JS)
            .with_ipc_handler(move |msg: wry::http::Request<String>| {
                let _ = ipc_proxy.send_event(UserEvent::Ipc {
                    window: window_id,
                    tab: ipc_tab.clone(),
                    body: msg.body().clone(),
                });
            })
            .with_on_page_load_handler(move |event, url| {
                if let PageLoadEvent::Finished = event {
                    let _ = load_proxy.send_event(UserEvent::PageLoaded {
                        window: window_id,
                        tab: load_tab.clone(),
                        address: url,
                    });
                }
            })
            .with_new_window_req_handler(move |url, _features| {
                if url.starts_with("http://") || url.starts_with("https://") {
                    let _ = nw_proxy.send_event(UserEvent::OpenInTab {
                        window: window_id,
                        address: url,
                    });
                }
                wry::NewWindowResponse::Deny
            })
            .with_download_started_handler(move |url: String, path: &mut PathBuf| {
                let suggested = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(str::to_string);
                let mut request = DownloadGatekeeper::request_for(&url, suggested.as_deref());
                let state = gatekeeper.review(&mut request, &NativeDialogs);
                let _ = dl_proxy.send_event(UserEvent::DownloadReviewed {
                    window: window_id,
                    file_name: request.file_name,
                    state,
                });
                state == DownloadState::Accepted
            })
            .with_download_completed_handler(move |url, _path, success| {
                let _ = done_proxy.send_event(UserEvent::DownloadFinished {
                    window: window_id,
                    address: url,
                    success,
                });
            })
            .with_devtools(cfg!(debug_assertions));

        #[cfg(target_os = "linux")]
        let webview = {
            use tao::platform::unix::WindowExtUnix;
            use wry::WebViewBuilderExtUnix;
            let vbox = self
                .window
                .default_vbox()
                .ok_or_else(|| SurfaceError::Window("no GTK container".to_string()))?;
            builder.build_gtk(vbox).map_err(engine_error)?
        };

        #[cfg(not(target_os = "linux"))]
        let webview = {
            let size = self.window.inner_size();
            builder
                .with_bounds(full_bounds(size.width, size.height))
                .build_as_child(&self.window)
                .map_err(engine_error)?
        };

        debug!(tab = %tab_id, "web view created");
        Ok(WebViewSurface {
            webview,
            address: String::new(),
            zoom: 1.0,
        })
    }
}
