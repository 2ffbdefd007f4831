//! Use case implementations.

mod create_client_use_case;
mod paste_image_use_case;

pub use create_client_use_case::CreateClientUseCase;
pub use paste_image_use_case::PasteImageUseCase;
