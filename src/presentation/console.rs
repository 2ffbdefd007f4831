use std::io::{self, Write};
use std::sync::Arc;

use crossterm::style::Stylize;
use tracing::warn;

use super::status_line::TerminalStatusLine;
use crate::domain::ports::NotificationPort;
use crate::infrastructure::DesktopNotificationService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Error,
}

/// Prints messages on stderr and optionally mirrors them to the desktop.
pub struct ConsoleNotifier {
    status_line: Arc<TerminalStatusLine>,
    desktop: Option<DesktopNotificationService>,
}

impl ConsoleNotifier {
    /// Prints through `status_line` so messages never share its line.
    #[must_use]
    pub fn new(status_line: Arc<TerminalStatusLine>) -> Self {
        Self {
            status_line,
            desktop: None,
        }
    }

    /// Mirrors every message to `desktop` when it is enabled.
    #[must_use]
    pub fn with_desktop(mut self, desktop: DesktopNotificationService) -> Self {
        self.desktop = desktop.is_enabled().then_some(desktop);
        self
    }

    fn render<W: Write>(&self, out: &mut W, level: Level, message: &str) -> io::Result<()> {
        self.status_line.clear_line(out)?;

        let styled = self.status_line.is_interactive();
        match (level, styled) {
            (Level::Info, _) => writeln!(out, "{message}")?,
            (Level::Error, true) => writeln!(out, "{} {message}", "error:".red().bold())?,
            (Level::Error, false) => writeln!(out, "error: {message}")?,
        }
        out.flush()
    }

    fn show(&self, level: Level, message: &str) {
        if let Err(e) = self.render(&mut io::stderr().lock(), level, message) {
            warn!(error = %e, "Failed to print message");
        }

        if let Some(desktop) = &self.desktop {
            match level {
                Level::Info => desktop.info(message),
                Level::Error => desktop.error(message),
            }
        }
    }
}

impl NotificationPort for ConsoleNotifier {
    fn info(&self, message: &str) {
        self.show(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.show(Level::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> ConsoleNotifier {
        ConsoleNotifier::new(Arc::new(TerminalStatusLine::with_interactive(false)))
    }

    #[test]
    fn test_plain_messages() {
        let console = plain();
        let mut out = Vec::new();

        console
            .render(&mut out, Level::Info, "Copied object is not a image.")
            .unwrap();
        console
            .render(&mut out, Level::Error, "Failed to upload image to imgur: boom")
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Copied object is not a image.\nerror: Failed to upload image to imgur: boom\n"
        );
    }

    #[test]
    fn test_disabled_desktop_is_not_kept() {
        let console = plain().with_desktop(DesktopNotificationService::new(false));
        assert!(console.desktop.is_none());
    }
}
