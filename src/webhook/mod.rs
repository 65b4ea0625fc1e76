pub mod client;
pub mod models;

pub use client::{WebhookClient, WebhookPoster};
pub use models::{Embed, Message};
