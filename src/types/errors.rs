use thiserror::Error;

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug, Error)]
pub enum TabError {
    /// Tab with the given ID was not found.
    #[error("Tab not found: {0}")]
    NotFound(String),
    /// The window has no tab to act on.
    #[error("No active tab")]
    NoActiveTab,
}

// === SurfaceError ===

/// Errors raised by the rendering engine or the window hosting it.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The web engine rejected an operation.
    #[error("Rendering engine error: {0}")]
    Engine(String),
    /// The native window could not be created or queried.
    #[error("Window error: {0}")]
    Window(String),
}

// === IpcError ===

/// Errors decoding messages posted by the toolbar script.
#[derive(Debug, Error)]
pub enum IpcError {
    /// The message was not a valid command object.
    #[error("Malformed IPC message: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A key chord with no bound command.
    #[error("No command bound to shortcut: {0}")]
    UnknownShortcut(String),
}

// === ShortcutError ===

/// Errors related to keyboard shortcut management.
#[derive(Debug, Error)]
pub enum ShortcutError {
    /// The key chord is already bound to another command.
    #[error("Shortcut conflict: {0}")]
    Conflict(String),
    /// The action has no binding.
    #[error("Shortcut not found: {0}")]
    NotFound(String),
    /// The key chord is empty or unparsable.
    #[error("Invalid shortcut keys: {0}")]
    InvalidKeys(String),
}

// === BrowserError ===

/// Umbrella error returned by the window controller and the app registry.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error(transparent)]
    Tab(#[from] TabError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error(transparent)]
    Ipc(#[from] IpcError),
    /// The event names a window that is no longer open.
    #[error("Window not found: {0}")]
    WindowNotFound(String),
}
