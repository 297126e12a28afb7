//! Tmeon: a minimal tabbed desktop web browser shell.
//!
//! Entry point: opens the first browser window and runs the event loop.
//! When built without the `gui` feature, runs a console demo against an
//! in-memory rendering surface.

use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(feature = "gui")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    tmeon::ui::webview_app::run()?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    println!();
    println!("══════════════════════════════════════════════");
    println!("  Tmeon Browser v{} - Demo Mode", env!("CARGO_PKG_VERSION"));
    println!("══════════════════════════════════════════════");
    println!();

    demo::navigation()?;
    demo::tabs_and_zoom()?;
    demo::downloads();
    demo::windows()?;

    println!();
    println!("  Done.");
    Ok(())
}

#[cfg(not(feature = "gui"))]
mod demo {
    use tmeon::app::App;
    use tmeon::managers::tab_manager::TabManagerTrait;
    use tmeon::services::dialogs::ConsoleDialogs;
    use tmeon::services::download_gatekeeper::{DownloadGatekeeper, DownloadGatekeeperTrait};
    use tmeon::surface::headless::HeadlessFactory;
    use tmeon::types::command::{CloseDecision, Command, Outcome};
    use tmeon::types::config::BrowserConfig;
    use tmeon::types::errors::BrowserError;

    type DemoApp = App<u32, HeadlessFactory>;

    fn section(name: &str) {
        println!("──────────────────────────────────────────────");
        println!("  {}", name);
        println!("──────────────────────────────────────────────");
    }

    fn new_app() -> Result<DemoApp, BrowserError> {
        let mut app = App::new(BrowserConfig::default());
        app.open_window(1, HeadlessFactory::new(), Box::new(ConsoleDialogs))?;
        Ok(app)
    }

    pub fn navigation() -> Result<(), BrowserError> {
        section("Navigation");
        let mut app = new_app()?;

        println!("  Home: {}", app.window(1)?.address_field());
        app.dispatch(1, Command::Navigate("example.com".to_string()))?;
        println!("  Typed 'example.com' -> {}", app.window(1)?.address_field());
        app.dispatch(1, Command::Navigate("http://neverssl.com".to_string()))?;
        println!("  Typed 'http://neverssl.com' -> {}", app.window(1)?.address_field());
        app.dispatch(1, Command::Back)?;
        println!("  Back -> {}", app.window(1)?.address_field());
        app.dispatch(1, Command::Forward)?;
        println!("  Forward -> {}", app.window(1)?.address_field());
        app.dispatch(1, Command::Home)?;
        println!("  Home -> {}", app.window(1)?.address_field());
        println!();
        Ok(())
    }

    pub fn tabs_and_zoom() -> Result<(), BrowserError> {
        section("Tabs and zoom");
        let mut app = new_app()?;

        app.dispatch(1, Command::NewTab)?;
        app.dispatch(1, Command::Navigate("rust-lang.org".to_string()))?;
        let window = app.window(1)?;
        println!("  Tabs: {}", window.tabs().tab_count());
        for tab in window.tabs().get_all_tabs() {
            println!("    {} {}", &tab.id[..8], tab.address);
        }

        app.dispatch(1, Command::ZoomIn)?;
        app.dispatch(1, Command::ZoomIn)?;
        println!("  Zoom in x2: {:.1}", app.window(1)?.chrome_state().zoom);
        app.dispatch(1, Command::ZoomOut)?;
        println!("  Zoom out: {:.1}", app.window(1)?.chrome_state().zoom);
        app.dispatch(1, Command::ZoomReset)?;
        println!("  Reset: {:.1}", app.window(1)?.chrome_state().zoom);
        println!();
        Ok(())
    }

    pub fn downloads() {
        section("Download gatekeeper");
        let gatekeeper = DownloadGatekeeper::default();
        for address in ["https://host/report.pdf", "https://host/setup.EXE", "https://host/README"] {
            let mut request = DownloadGatekeeper::request_for(address, None);
            let state = gatekeeper.review(&mut request, &ConsoleDialogs);
            println!("  {} -> {:?}", request.file_name, state);
        }
        println!();
    }

    pub fn windows() -> Result<(), BrowserError> {
        section("Windows");
        let mut app = new_app()?;

        if app.dispatch(1, Command::NewWindow)? == Outcome::OpenWindow {
            app.open_window(2, HeadlessFactory::new(), Box::new(ConsoleDialogs))?;
        }
        println!("  Open windows: {}", app.window_count());

        match app.request_close(2)? {
            CloseDecision::Proceed => println!("  Window 2 closed"),
            CloseDecision::Vetoed => println!("  Window 2 stays open"),
        }
        println!("  Open windows: {}", app.window_count());
        Ok(())
    }
}
