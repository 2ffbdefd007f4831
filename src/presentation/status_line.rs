use std::io::{self, IsTerminal, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use parking_lot::Mutex;
use tracing::warn;

use crate::domain::ports::StatusDisplayPort;

/// Upload status rendered on the last line of stderr.
///
/// On a terminal the line is rewritten in place. Otherwise every
/// non-empty status is written on its own line.
pub struct TerminalStatusLine {
    interactive: bool,
    visible: Mutex<bool>,
}

impl Default for TerminalStatusLine {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalStatusLine {
    /// Detects whether stderr is a terminal.
    #[must_use]
    pub fn new() -> Self {
        Self::with_interactive(io::stderr().is_terminal())
    }

    /// Forces in-place rendering on or off.
    #[must_use]
    pub fn with_interactive(interactive: bool) -> Self {
        Self {
            interactive,
            visible: Mutex::new(false),
        }
    }

    /// Whether the line is rewritten in place.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Erases the status so other output starts on a clean line.
    ///
    /// # Errors
    /// Returns error if writing fails.
    pub fn clear_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut visible = self.visible.lock();
        if *visible {
            queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
            *visible = false;
        }
        out.flush()
    }

    fn render<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        let mut visible = self.visible.lock();
        if self.interactive {
            queue!(
                out,
                MoveToColumn(0),
                Clear(ClearType::CurrentLine),
                Print(text)
            )?;
            *visible = !text.is_empty();
        } else if !text.is_empty() {
            writeln!(out, "{text}")?;
        }
        out.flush()
    }

    fn render_finish<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut visible = self.visible.lock();
        if *visible {
            writeln!(out)?;
            *visible = false;
        }
        out.flush()
    }
}

impl StatusDisplayPort for TerminalStatusLine {
    fn set_text(&self, text: &str) {
        if let Err(e) = self.render(&mut io::stderr().lock(), text) {
            warn!(error = %e, "Failed to draw status line");
        }
    }

    fn finish(&self) {
        if let Err(e) = self.render_finish(&mut io::stderr().lock()) {
            warn!(error = %e, "Failed to finish status line");
        }
    }
}
