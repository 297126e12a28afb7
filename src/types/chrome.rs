use serde::{Deserialize, Serialize};

use super::tab::TabSummary;

/// Snapshot of a window's toolbar: tab strip, address field, status line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChromeState {
    pub tabs: Vec<TabSummary>,
    pub active_id: Option<String>,
    pub address: String,
    pub status: String,
    pub zoom: f64,
}
