//! Application layer with use cases, services, and DTOs.

/// Application context wiring.
pub mod context;
/// Data transfer objects.
pub mod dto;
/// Status event bus and notifier.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use context::{AppContext, AppPorts};
pub use dto::{PasteOutcome, UploadClient, UploadMode, UploadSettings};
pub use services::{StatusEvents, StatusNotifier};
pub use use_cases::{CreateClientUseCase, PasteImageUseCase};
