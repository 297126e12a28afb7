use serde::{Deserialize, Serialize};

/// Every user action a window understands.
///
/// Toolbar buttons, menu items, keyboard shortcuts and IPC messages all end up
/// as one of these, and the window controller has exactly one handler per
/// variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", content = "arg", rename_all = "snake_case")]
pub enum Command {
    Back,
    Forward,
    Reload,
    Home,
    Navigate(String),
    NewTab,
    NewWindow,
    SwitchTab(String),
    CloseTab(String),
    CloseActiveTab,
    ZoomReset,
    ZoomIn,
    ZoomOut,
    Settings,
    DownloadManager,
    About,
    Exit,
}

impl Command {
    /// Stable action name used by the shortcut table and the menu model.
    /// Commands carrying an argument have no action name.
    pub fn action_name(&self) -> Option<&'static str> {
        let name = match self {
            Command::Back => "back",
            Command::Forward => "forward",
            Command::Reload => "reload",
            Command::Home => "home",
            Command::NewTab => "new_tab",
            Command::NewWindow => "new_window",
            Command::CloseActiveTab => "close_tab",
            Command::ZoomReset => "zoom_reset",
            Command::ZoomIn => "zoom_in",
            Command::ZoomOut => "zoom_out",
            Command::Settings => "settings",
            Command::DownloadManager => "download_manager",
            Command::About => "about",
            Command::Exit => "exit",
            Command::Navigate(_) | Command::SwitchTab(_) | Command::CloseTab(_) => return None,
        };
        Some(name)
    }

    /// Inverse of [`Command::action_name`].
    pub fn from_action_name(name: &str) -> Option<Command> {
        let cmd = match name {
            "back" => Command::Back,
            "forward" => Command::Forward,
            "reload" => Command::Reload,
            "home" => Command::Home,
            "new_tab" => Command::NewTab,
            "new_window" => Command::NewWindow,
            "close_tab" => Command::CloseActiveTab,
            "zoom_reset" => Command::ZoomReset,
            "zoom_in" => Command::ZoomIn,
            "zoom_out" => Command::ZoomOut,
            "settings" => Command::Settings,
            "download_manager" => Command::DownloadManager,
            "about" => Command::About,
            "exit" => Command::Exit,
            _ => return None,
        };
        Some(cmd)
    }
}

/// What the caller of a dispatched command has to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing beyond refreshing the toolbar.
    Handled,
    /// Create a new, independent window.
    OpenWindow,
    /// The user confirmed closing this window.
    CloseWindow,
}

/// Result of asking the user whether a window may close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Proceed,
    Vetoed,
}
