//! Data transfer objects for the webhook transport.

pub mod http;
pub mod twiml;
