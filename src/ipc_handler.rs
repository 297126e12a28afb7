//! IPC message decoding for the injected toolbar.
//!
//! The toolbar script posts JSON objects tagged by `cmd` through
//! `window.ipc.postMessage()`. This module turns them into either a window
//! [`Command`] or an engine-side notification, so the routing can be tested
//! without a web view.

use serde::Deserialize;

use crate::managers::shortcut_manager::ShortcutManagerTrait;
use crate::types::command::Command;
use crate::types::errors::IpcError;

/// Raw message shape posted by `toolbar.js`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum IpcMessage {
    UiReady,
    Navigate { url: String },
    Back,
    Forward,
    Reload,
    Home,
    NewTab,
    NewWindow,
    SwitchTab { id: String },
    CloseTab { id: String },
    ZoomReset,
    ZoomIn,
    ZoomOut,
    Settings,
    DownloadManager,
    About,
    Exit,
    Shortcut { keys: String },
    PageInfo { url: String, title: String },
}

/// What a decoded message asks the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum IpcAction {
    /// The toolbar just loaded and needs the full state and the menus.
    Refresh,
    Run(Command),
    PageInfo { url: String, title: String },
}

pub fn parse_message(body: &str) -> Result<IpcMessage, IpcError> {
    Ok(serde_json::from_str(body)?)
}

/// Decodes a message body, resolving key chords through `shortcuts`.
pub fn decode(body: &str, shortcuts: &dyn ShortcutManagerTrait) -> Result<IpcAction, IpcError> {
    let action = match parse_message(body)? {
        IpcMessage::UiReady => IpcAction::Refresh,
        IpcMessage::PageInfo { url, title } => IpcAction::PageInfo { url, title },
        IpcMessage::Shortcut { keys } => {
            let command = shortcuts
                .resolve(&keys)
                .ok_or(IpcError::UnknownShortcut(keys))?;
            IpcAction::Run(command)
        }
        IpcMessage::Navigate { url } => IpcAction::Run(Command::Navigate(url)),
        IpcMessage::SwitchTab { id } => IpcAction::Run(Command::SwitchTab(id)),
        IpcMessage::CloseTab { id } => IpcAction::Run(Command::CloseTab(id)),
        IpcMessage::Back => IpcAction::Run(Command::Back),
        IpcMessage::Forward => IpcAction::Run(Command::Forward),
        IpcMessage::Reload => IpcAction::Run(Command::Reload),
        IpcMessage::Home => IpcAction::Run(Command::Home),
        IpcMessage::NewTab => IpcAction::Run(Command::NewTab),
        IpcMessage::NewWindow => IpcAction::Run(Command::NewWindow),
        IpcMessage::ZoomReset => IpcAction::Run(Command::ZoomReset),
        IpcMessage::ZoomIn => IpcAction::Run(Command::ZoomIn),
        IpcMessage::ZoomOut => IpcAction::Run(Command::ZoomOut),
        IpcMessage::Settings => IpcAction::Run(Command::Settings),
        IpcMessage::DownloadManager => IpcAction::Run(Command::DownloadManager),
        IpcMessage::About => IpcAction::Run(Command::About),
        IpcMessage::Exit => IpcAction::Run(Command::Exit),
    };
    Ok(action)
}
