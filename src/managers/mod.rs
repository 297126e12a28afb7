// Tmeon state managers
// Managers handle stateful operations: tabs, windows, shortcuts.

pub mod shortcut_manager;
pub mod tab_manager;
pub mod window_controller;
