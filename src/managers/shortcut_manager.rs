//! Shortcut Manager for Tmeon.
//!
//! Maps key chords to window commands, with conflict detection
//! and platform-specific modifier key adaptation.

use std::collections::HashMap;

use crate::types::command::Command;
use crate::types::errors::ShortcutError;

/// Trait defining shortcut management operations.
pub trait ShortcutManagerTrait {
    fn register_shortcut(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError>;
    fn unregister_shortcut(&mut self, action: &str) -> Result<(), ShortcutError>;
    fn get_shortcut(&self, action: &str) -> Option<&str>;
    fn list_shortcuts(&self) -> &HashMap<String, String>;
    fn reset_to_defaults(&mut self);
    fn has_conflict(&self, keys: &str, exclude_action: Option<&str>) -> Option<String>;
    fn resolve(&self, keys: &str) -> Option<Command>;
}

/// Shortcut table held in memory; bindings are not persisted.
pub struct ShortcutManager {
    shortcuts: HashMap<String, String>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        Self {
            shortcuts: Self::default_shortcuts(),
        }
    }

    /// Adapts modifier keys for the current platform.
    pub fn adapt_for_platform(keys: &str) -> String {
        if cfg!(target_os = "macos") {
            keys.replace("Ctrl+", "Cmd+")
        } else {
            keys.to_string()
        }
    }

    pub fn default_shortcuts() -> HashMap<String, String> {
        let defaults = [
            ("new_tab", "Ctrl+T"),
            ("new_window", "Ctrl+N"),
            ("close_tab", "Ctrl+W"),
            ("reload", "Ctrl+R"),
            ("back", "Alt+Left"),
            ("forward", "Alt+Right"),
            ("home", "Alt+Home"),
            ("zoom_reset", "Ctrl+0"),
            ("zoom_in", "Ctrl+Plus"),
            ("zoom_out", "Ctrl+Minus"),
            ("exit", "Ctrl+Q"),
        ];

        defaults
            .into_iter()
            .map(|(a, k)| (a.to_string(), Self::adapt_for_platform(k)))
            .collect()
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutManagerTrait for ShortcutManager {
    fn register_shortcut(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError> {
        if keys.is_empty() {
            return Err(ShortcutError::InvalidKeys("Keys cannot be empty".to_string()));
        }
        if Command::from_action_name(action).is_none() {
            return Err(ShortcutError::NotFound(action.to_string()));
        }

        if let Some(conflicting_action) = self.has_conflict(keys, Some(action)) {
            return Err(ShortcutError::Conflict(format!(
                "'{}' is already bound to '{}'",
                keys, conflicting_action
            )));
        }

        let adapted = Self::adapt_for_platform(keys);
        self.shortcuts.insert(action.to_string(), adapted);
        Ok(())
    }

    fn unregister_shortcut(&mut self, action: &str) -> Result<(), ShortcutError> {
        self.shortcuts
            .remove(action)
            .map(|_| ())
            .ok_or_else(|| ShortcutError::NotFound(action.to_string()))
    }

    fn get_shortcut(&self, action: &str) -> Option<&str> {
        self.shortcuts.get(action).map(|s| s.as_str())
    }

    fn list_shortcuts(&self) -> &HashMap<String, String> {
        &self.shortcuts
    }

    fn reset_to_defaults(&mut self) {
        self.shortcuts = Self::default_shortcuts();
    }

    fn has_conflict(&self, keys: &str, exclude_action: Option<&str>) -> Option<String> {
        let adapted = Self::adapt_for_platform(keys);
        self.shortcuts
            .iter()
            .find(|(action, bound)| **bound == adapted && Some(action.as_str()) != exclude_action)
            .map(|(action, _)| action.clone())
    }

    fn resolve(&self, keys: &str) -> Option<Command> {
        let adapted = Self::adapt_for_platform(keys);
        self.shortcuts
            .iter()
            .find(|(_, bound)| **bound == adapted)
            .and_then(|(action, _)| Command::from_action_name(action))
    }
}
