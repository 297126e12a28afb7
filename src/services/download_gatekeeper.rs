//! Download Gatekeeper for Tmeon.
//!
//! Decides whether a download surfaced by the web engine may proceed. Files
//! with an executable extension need an explicit "yes" from the user;
//! everything else is accepted without asking.

use std::collections::HashSet;

use tracing::info;
use url::Url;

use crate::services::dialogs::Dialogs;
use crate::types::config::BrowserConfig;
use crate::types::download::{DownloadRequest, DownloadState};

const PROMPT_TITLE: &str = "Warning";

/// Trait defining the download gatekeeping interface.
pub trait DownloadGatekeeperTrait {
    fn requires_confirmation(&self, request: &DownloadRequest) -> bool;
    fn review(&self, request: &mut DownloadRequest, dialogs: &dyn Dialogs) -> DownloadState;
}

/// Stateless extension-based gatekeeper.
#[derive(Debug, Clone)]
pub struct DownloadGatekeeper {
    executable_extensions: HashSet<String>,
}

impl DownloadGatekeeper {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            executable_extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &BrowserConfig) -> Self {
        Self::new(&config.executable_extensions)
    }

    /// Builds a pending request from the engine's download notification.
    ///
    /// The file name comes from the source address; the engine's suggested
    /// name is only used when the address has no usable last segment.
    pub fn request_for(source_address: &str, suggested_name: Option<&str>) -> DownloadRequest {
        let file_name = file_name_from_address(source_address)
            .or_else(|| {
                suggested_name
                    .filter(|n| !n.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| raw_last_segment(source_address).to_string());
        DownloadRequest::new(source_address, &file_name)
    }

    /// Prompt text naming the file, never the URL.
    pub fn prompt_message(file_name: &str) -> String {
        format!(
            "Are you sure you want to download '{}'? If it's executable, it might be a risk to your PC.",
            file_name
        )
    }
}

impl Default for DownloadGatekeeper {
    fn default() -> Self {
        Self::from_config(&BrowserConfig::default())
    }
}

impl DownloadGatekeeperTrait for DownloadGatekeeper {
    fn requires_confirmation(&self, request: &DownloadRequest) -> bool {
        request
            .extension
            .as_ref()
            .is_some_and(|ext| self.executable_extensions.contains(ext))
    }

    fn review(&self, request: &mut DownloadRequest, dialogs: &dyn Dialogs) -> DownloadState {
        if !request.is_pending() {
            return request.state();
        }

        if self.requires_confirmation(request) {
            let message = Self::prompt_message(&request.file_name);
            if dialogs.confirm(PROMPT_TITLE, &message) {
                request.accept();
            } else {
                request.cancel();
            }
        } else {
            request.accept();
        }

        info!(
            file = %request.file_name,
            state = ?request.state(),
            "download reviewed"
        );
        request.state()
    }
}

/// Last non-empty path segment of a parseable URL.
pub fn file_name_from_address(address: &str) -> Option<String> {
    let url = Url::parse(address).ok()?;
    url.path_segments()?
        .filter(|s| !s.is_empty())
        .last()
        .map(str::to_string)
}

fn raw_last_segment(address: &str) -> &str {
    address.rsplit('/').next().unwrap_or(address)
}
