use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use dialoguer::Input;
use tracing::{debug, warn};

use super::status_line::TerminalStatusLine;
use crate::domain::ports::PromptPort;

/// Opens the system browser and reads the PIN from the terminal.
pub struct BrowserPinPrompt {
    status_line: Arc<TerminalStatusLine>,
}

impl BrowserPinPrompt {
    /// Clears `status_line` before prompting.
    #[must_use]
    pub fn new(status_line: Arc<TerminalStatusLine>) -> Self {
        Self { status_line }
    }
}

#[async_trait]
impl PromptPort for BrowserPinPrompt {
    async fn open_url(&self, url: &str) -> io::Result<()> {
        let url = url.to_string();
        debug!(url = %url, "Opening authorization page");

        tokio::task::spawn_blocking(move || opener::open_browser(&url).map_err(io::Error::other))
            .await
            .map_err(io::Error::other)?
    }

    async fn prompt_pin(&self) -> Option<String> {
        if let Err(e) = self.status_line.clear_line(&mut io::stderr().lock()) {
            warn!(error = %e, "Failed to clear status line");
        }

        let result = tokio::task::spawn_blocking(|| {
            Input::<String>::new()
                .with_prompt("PIN code here")
                .allow_empty(true)
                .interact_text()
        })
        .await;

        match result {
            Ok(Ok(pin)) => Some(pin),
            Ok(Err(e)) => {
                debug!(error = %e, "PIN prompt cancelled");
                None
            }
            Err(e) => {
                warn!(error = %e, "PIN prompt task failed");
                None
            }
        }
    }
}
