//! Multi-window browser application using `wry` + `tao`.
//!
//! Architecture:
//! - One `tao` window per browser window, one `wry` web view per tab. Only the
//!   active tab's view is visible.
//! - `with_initialization_script(TOOLBAR_JS)` injects the toolbar (menus,
//!   navigation buttons, address bar, tab strip, status line) on every page.
//! - IPC from JS → Rust via `window.ipc.postMessage()`, forwarded to the event
//!   loop as a `UserEvent` and routed through `App::handle_ipc`.
//! - After every event the active view's toolbar is refreshed from the
//!   controller's `ChromeState`.

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy, EventLoopWindowTarget};
use tao::window::{WindowBuilder, WindowId};
use tracing::{info, warn};

use crate::app::App;
use crate::managers::shortcut_manager::ShortcutManagerTrait;
use crate::types::command::{Command, Outcome};
use crate::types::config::BrowserConfig;
use crate::types::download::DownloadState;
use crate::types::errors::{BrowserError, SurfaceError};
use crate::ui::native_dialogs::NativeDialogs;
use crate::ui::webview_surface::{UserEvent, WebViewFactory};

type BrowserApp = App<WindowId, WebViewFactory>;

fn open_window(
    target: &EventLoopWindowTarget<UserEvent>,
    proxy: &EventLoopProxy<UserEvent>,
    app: &mut BrowserApp,
) -> Result<WindowId, BrowserError> {
    let cfg = &app.config().window;
    let window = WindowBuilder::new()
        .with_title(&cfg.title)
        .with_position(tao::dpi::LogicalPosition::new(cfg.x, cfg.y))
        .with_inner_size(tao::dpi::LogicalSize::new(cfg.width, cfg.height))
        .build(target)
        .map_err(|e| SurfaceError::Window(e.to_string()))?;

    let factory = WebViewFactory::new(window, proxy.clone(), app.gatekeeper().clone());
    let id = factory.window_id();
    app.open_window(id, factory, Box::new(NativeDialogs))?;
    push_chrome(app, id);
    Ok(id)
}

/// Sends the window's toolbar state, menus and bound key chords to the
/// active tab's toolbar script.
fn push_chrome(app: &BrowserApp, id: WindowId) {
    let Ok(window) = app.window(id) else {
        return;
    };
    let Some(surface) = window.active_surface() else {
        return;
    };

    let state = serde_json::to_string(&window.chrome_state()).unwrap_or_default();
    let menus = serde_json::to_string(&app.menu_bar()).unwrap_or_default();
    let keys: Vec<&String> = app.shortcuts().list_shortcuts().values().collect();
    let keys = serde_json::to_string(&keys).unwrap_or_default();

    let js = format!("if(window.__tm_update)__tm_update({},{},{})", state, menus, keys);
    if let Err(e) = surface.evaluate(&js) {
        warn!(error = %e, "toolbar refresh failed");
    }
}

fn handle_user_event(
    target: &EventLoopWindowTarget<UserEvent>,
    proxy: &EventLoopProxy<UserEvent>,
    app: &mut BrowserApp,
    event: UserEvent,
) {
    let (id, result) = match event {
        UserEvent::Ipc { window, tab, body } => (window, app.handle_ipc(window, &tab, &body)),
        UserEvent::PageLoaded { window, tab, address } => {
            let result = app
                .window_mut(window)
                .and_then(|w| w.on_location_changed(&tab, &address))
                .map(|_| Outcome::Handled);
            (window, result)
        }
        UserEvent::OpenInTab { window, address } => {
            (window, app.dispatch(window, Command::Navigate(address)))
        }
        UserEvent::DownloadReviewed { window, file_name, state } => {
            let status = match state {
                DownloadState::Accepted => format!("Downloading {}", file_name),
                _ => format!("Download cancelled: {}", file_name),
            };
            let result = app.window_mut(window).map(|w| {
                w.set_status(status);
                Outcome::Handled
            });
            (window, result)
        }
        UserEvent::DownloadFinished { window, address, success } => {
            let status = if success {
                format!("Download finished: {}", address)
            } else {
                format!("Download failed: {}", address)
            };
            let result = app.window_mut(window).map(|w| {
                w.set_status(status);
                Outcome::Handled
            });
            (window, result)
        }
    };

    match result {
        Ok(Outcome::OpenWindow) => {
            if let Err(e) = open_window(target, proxy, app) {
                warn!(error = %e, "could not open window");
            }
        }
        Ok(Outcome::Handled) | Ok(Outcome::CloseWindow) => {}
        Err(e) => warn!(error = %e, "event not handled"),
    }
    push_chrome(app, id);
}

// ─── Main entry point ───

pub fn run() -> Result<(), BrowserError> {
    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let mut app: BrowserApp = App::new(BrowserConfig::default());
    open_window(&event_loop, &proxy, &mut app)?;
    info!("browser started");

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                window_id,
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if let Err(e) = app.request_close(window_id) {
                    warn!(error = %e, "close request failed");
                }
            }

            // GTK boxes resize their children on their own.
            #[cfg(not(target_os = "linux"))]
            Event::WindowEvent {
                window_id,
                event: WindowEvent::Resized(size),
                ..
            } => {
                if let Ok(window) = app.window_mut(window_id) {
                    window.for_each_surface(|surface| {
                        if let Err(e) = surface.fit(size.width, size.height) {
                            warn!(error = %e, "resize failed");
                        }
                    });
                }
            }

            Event::UserEvent(user_event) => {
                handle_user_event(target, &proxy, &mut app, user_event);
            }

            _ => {}
        }

        if app.is_empty() {
            info!("last window closed");
            *control_flow = ControlFlow::Exit;
        }
    });
}
