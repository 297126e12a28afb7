use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::tab::{Tab, TabSummary};

/// Trait defining the tab management interface.
pub trait TabManagerTrait<S> {
    fn create_tab(&mut self, id: String, surface: S, address: &str, active: bool) -> String;
    fn close_tab(&mut self, tab_id: &str) -> Result<Tab<S>, TabError>;
    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab<S>>;
    fn get_tab_mut(&mut self, tab_id: &str) -> Option<&mut Tab<S>>;
    fn get_all_tabs(&self) -> Vec<&Tab<S>>;
    fn get_active_tab(&self) -> Option<&Tab<S>>;
    fn get_active_tab_mut(&mut self) -> Option<&mut Tab<S>>;
    fn active_tab_id(&self) -> Option<&str>;
    fn tab_count(&self) -> usize;
    fn update_tab_address(&mut self, tab_id: &str, address: &str) -> Result<(), TabError>;
    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError>;
}

/// In-memory tab collection of one window, in tab-strip order.
pub struct TabManager<S> {
    tabs: Vec<Tab<S>>,
    active_tab_id: Option<String>,
}

impl<S> TabManager<S> {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
        }
    }

    /// Fresh identifier for a tab about to be created.
    pub fn new_tab_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn summaries(&self) -> Vec<TabSummary> {
        self.tabs.iter().map(Tab::summary).collect()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tab<S>> {
        self.tabs.iter_mut()
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }
}

impl<S> Default for TabManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TabManagerTrait<S> for TabManager<S> {
    /// Add a tab at the end of the strip. The first tab always becomes active.
    fn create_tab(&mut self, id: String, surface: S, address: &str, active: bool) -> String {
        self.tabs.push(Tab {
            id: id.clone(),
            title: "New Tab".to_string(),
            address: address.to_string(),
            surface,
        });
        if active || self.active_tab_id.is_none() {
            self.active_tab_id = Some(id.clone());
        }
        id
    }

    /// Remove a tab and hand it back. If it was active, the neighbour that
    /// slides into its position (or the new last tab) becomes active.
    fn close_tab(&mut self, tab_id: &str) -> Result<Tab<S>, TabError> {
        let idx = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;

        let need_switch = self.active_tab_id.as_deref() == Some(tab_id);
        let removed = self.tabs.remove(idx);

        if self.tabs.is_empty() {
            self.active_tab_id = None;
        } else if need_switch {
            let new_idx = idx.min(self.tabs.len() - 1);
            self.active_tab_id = Some(self.tabs[new_idx].id.clone());
        }

        Ok(removed)
    }

    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id.to_string()));
        }
        self.active_tab_id = Some(tab_id.to_string());
        Ok(())
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab<S>> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_tab_mut(&mut self, tab_id: &str) -> Option<&mut Tab<S>> {
        self.tabs.iter_mut().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> Vec<&Tab<S>> {
        self.tabs.iter().collect()
    }

    fn get_active_tab(&self) -> Option<&Tab<S>> {
        let id = self.active_tab_id.as_deref()?;
        self.get_tab(id)
    }

    fn get_active_tab_mut(&mut self) -> Option<&mut Tab<S>> {
        let id = self.active_tab_id.clone()?;
        self.get_tab_mut(&id)
    }

    fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn update_tab_address(&mut self, tab_id: &str, address: &str) -> Result<(), TabError> {
        let tab = self
            .get_tab_mut(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        tab.address = address.to_string();
        Ok(())
    }

    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError> {
        let tab = self
            .get_tab_mut(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        tab.title = title.to_string();
        Ok(())
    }
}
