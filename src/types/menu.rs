use serde::{Deserialize, Serialize};

/// The window's menu bar, rendered by the toolbar script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuBar {
    pub menus: Vec<Menu>,
}

/// A top-level menu such as "File".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Menu {
    pub label: String,
    pub items: Vec<MenuItem>,
}

/// One entry of a menu. `action` is a [`Command`](super::command::Command)
/// action name; `shortcut` is the key chord label, if any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub action: String,
    pub shortcut: Option<String>,
}
