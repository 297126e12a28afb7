//! Static menu bar model.

use crate::managers::shortcut_manager::ShortcutManagerTrait;
use crate::types::command::Command;
use crate::types::menu::{Menu, MenuBar, MenuItem};

fn item(label: &str, command: Command, shortcuts: &dyn ShortcutManagerTrait) -> MenuItem {
    let action = command.action_name().unwrap_or_default();
    MenuItem {
        label: label.to_string(),
        action: action.to_string(),
        shortcut: shortcuts.get_shortcut(action).map(str::to_string),
    }
}

/// File / Edit / View / Help, labelled with the current shortcut bindings.
pub fn standard_menu_bar(shortcuts: &dyn ShortcutManagerTrait) -> MenuBar {
    MenuBar {
        menus: vec![
            Menu {
                label: "File".to_string(),
                items: vec![
                    item("New Tab", Command::NewTab, shortcuts),
                    item("New Window", Command::NewWindow, shortcuts),
                    item("Exit", Command::Exit, shortcuts),
                ],
            },
            Menu {
                label: "Edit".to_string(),
                items: vec![
                    item("Settings", Command::Settings, shortcuts),
                    item("Download Manager", Command::DownloadManager, shortcuts),
                ],
            },
            Menu {
                label: "View".to_string(),
                items: vec![
                    item("Zoom", Command::ZoomReset, shortcuts),
                    item("Zoom In", Command::ZoomIn, shortcuts),
                    item("Zoom Out", Command::ZoomOut, shortcuts),
                ],
            },
            Menu {
                label: "Help".to_string(),
                items: vec![item("About", Command::About, shortcuts)],
            },
        ],
    }
}
