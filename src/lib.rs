//! imgpaste - paste clipboard images into text documents as Imgur links.
//!
//! The clipboard image is saved to a temporary file, a placeholder is
//! inserted at the cursor, the image is uploaded to Imgur (anonymously or
//! to an authorized account), and the placeholder is replaced with the
//! resulting link or removed on failure.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services, and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing terminal output and command dispatch.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "imgpaste";
