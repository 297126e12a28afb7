//! Tmeon UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The browser chrome is HTML/CSS/JS injected into every tab's page.
//! Communication between the Rust backend and the JS toolbar uses wry IPC.

pub mod native_dialogs;
pub mod webview_app;
pub mod webview_surface;
