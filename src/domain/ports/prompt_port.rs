//! Interactive prompts used during first-time authorization.

use async_trait::async_trait;

/// Port for browser hand-off and PIN entry.
#[async_trait]
pub trait PromptPort: Send + Sync {
    /// Opens `url` in the user's browser.
    async fn open_url(&self, url: &str) -> std::io::Result<()>;

    /// Asks the user for the PIN shown after signing in. `None` when cancelled.
    async fn prompt_pin(&self) -> Option<String>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;

    /// Mock prompt for testing.
    #[derive(Default)]
    pub struct MockPrompt {
        pin: Option<String>,
        fail_open: bool,
        opened: Mutex<Vec<String>>,
    }

    impl MockPrompt {
        /// User enters `pin`.
        pub fn with_pin(pin: &str) -> Self {
            Self {
                pin: Some(pin.to_string()),
                ..Self::default()
            }
        }

        /// User dismisses the prompt.
        pub fn cancelled() -> Self {
            Self::default()
        }

        /// No browser is available.
        pub fn without_browser(mut self) -> Self {
            self.fail_open = true;
            self
        }

        /// URLs opened so far.
        pub fn opened(&self) -> Vec<String> {
            self.opened.lock().clone()
        }
    }

    #[async_trait]
    impl PromptPort for MockPrompt {
        async fn open_url(&self, url: &str) -> std::io::Result<()> {
            if self.fail_open {
                return Err(std::io::Error::other("no browser"));
            }
            self.opened.lock().push(url.to_string());
            Ok(())
        }

        async fn prompt_pin(&self) -> Option<String> {
            self.pin.clone()
        }
    }
}
