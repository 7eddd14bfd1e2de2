//! Command-line arguments for the client binary.

use clap::{Parser, ValueEnum};

/// HTTP method used to deliver the webhook
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WebhookMethod {
    Post,
    Get,
}

/// Interactive SMS simulator for the Veda webhook
#[derive(Debug, Clone, Parser)]
#[command(name = "veda-client", version, about)]
pub struct ClientArgs {
    /// Webhook URL
    #[arg(long, default_value = "http://127.0.0.1:5000/sms")]
    pub url: String,

    /// Sender phone number sent as `From`
    #[arg(long, default_value = "+15555550100")]
    pub from: String,

    /// How to deliver the webhook
    #[arg(long, value_enum, default_value_t = WebhookMethod::Post)]
    pub method: WebhookMethod,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
