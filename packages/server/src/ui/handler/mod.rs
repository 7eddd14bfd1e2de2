//! Handler modules for HTTP endpoints.

pub mod http;
pub mod sms;

// Re-export HTTP handlers
pub use http::health_check;

// Re-export webhook handlers
pub use sms::sms_reply;
