// Module declarations
pub mod commands;
pub mod config;
pub mod gateway;
mod models;
pub mod routing;
pub mod server;
pub mod templates;

// Re-export models for use in commands
pub use models::*;
