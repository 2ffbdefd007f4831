//! Terminal presentation: status line, console messages, prompts, and commands.

/// Command dispatch.
pub mod commands;
/// Console message output.
pub mod console;
/// Browser hand-off and PIN entry.
pub mod prompt;
/// Single-line upload status.
pub mod status_line;

pub use console::ConsoleNotifier;
pub use prompt::BrowserPinPrompt;
pub use status_line::TerminalStatusLine;
