//! Editor adapters.

mod file_document;

pub use file_document::FileDocument;
