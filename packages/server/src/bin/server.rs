//! SMS auto-responder server.
//!
//! Answers provider webhooks on `/sms` with a TwiML reply.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin veda-server -- --port 5000
//! ```

use clap::Parser;
use veda_server::ServerConfig;
use veda_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = veda_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
