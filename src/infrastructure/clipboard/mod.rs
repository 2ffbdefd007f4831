//! Clipboard image extractors.

mod native_clipboard;
mod script_clipboard;

pub use native_clipboard::NativeClipboard;
pub use script_clipboard::{Helper, ScriptClipboard, parse_helper_output};
