//! Command-line configuration for the server binary.

use std::path::PathBuf;

use clap::Parser;

use crate::infrastructure::model::file::DEFAULT_MODEL_PATH;

/// SMS auto-responder answering provider webhooks with TwiML
#[derive(Debug, Clone, Parser)]
#[command(name = "veda-server", version, about)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, default_value_t = 5000)]
    pub port: u16,

    /// Model artifact loaded once at startup
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    pub model_path: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "debug")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
