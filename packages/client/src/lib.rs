//! Interactive SMS simulator for the Veda webhook.
//!
//! Sends each typed line to `/sms` the way the messaging provider does and
//! prints the TwiML reply as plain text.

pub mod cli;
pub mod error;
pub mod sender;
pub mod twiml;

mod runner;

// Re-export entry points
pub use cli::ClientArgs;
pub use runner::run_client;
