use serde::{Deserialize, Serialize};

/// A browser tab: display metadata plus the rendering surface it owns.
#[derive(Debug)]
pub struct Tab<S> {
    pub id: String,
    pub title: String,
    pub address: String,
    pub surface: S,
}

impl<S> Tab<S> {
    /// Lightweight view of the tab for the toolbar.
    pub fn summary(&self) -> TabSummary {
        TabSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            address: self.address.clone(),
        }
    }
}

/// Serializable tab metadata, without the surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabSummary {
    pub id: String,
    pub title: String,
    pub address: String,
}
