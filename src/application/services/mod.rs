//! Application services.

mod status_events;
mod status_notifier;

pub use status_events::StatusEvents;
pub use status_notifier::{CLEAR_DELAY, StatusNotifier};
