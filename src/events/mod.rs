pub mod client;
pub mod format;
pub mod models;
pub mod time;

pub use client::{EventSource, EventsClient};
pub use models::Event;
