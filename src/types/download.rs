use serde::{Deserialize, Serialize};

/// Decision state of a download request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DownloadState {
    PendingDecision,
    Accepted,
    Cancelled,
}

/// A download surfaced by the engine, alive only until it is decided.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    pub source_address: String,
    pub file_name: String,
    /// Lower-cased text after the last `.` of `file_name`.
    pub extension: Option<String>,
    state: DownloadState,
}

impl DownloadRequest {
    pub fn new(source_address: &str, file_name: &str) -> Self {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase());
        Self {
            source_address: source_address.to_string(),
            file_name: file_name.to_string(),
            extension,
            state: DownloadState::PendingDecision,
        }
    }

    pub fn state(&self) -> DownloadState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == DownloadState::PendingDecision
    }

    /// Let the download proceed. No effect once decided.
    pub fn accept(&mut self) {
        if self.is_pending() {
            self.state = DownloadState::Accepted;
        }
    }

    /// Drop the download. No effect once decided.
    pub fn cancel(&mut self) {
        if self.is_pending() {
            self.state = DownloadState::Cancelled;
        }
    }
}
