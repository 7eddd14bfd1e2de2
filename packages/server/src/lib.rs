//! SMS auto-responder library.
//!
//! Receives inbound SMS webhooks, picks a reply with keyword rules and
//! answers with a TwiML document.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
