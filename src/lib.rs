pub mod config;
pub mod error;
pub mod events;
pub mod publisher;
pub mod scheduler;
pub mod server;
pub mod shutdown;
pub mod startup;
pub mod webhook;
