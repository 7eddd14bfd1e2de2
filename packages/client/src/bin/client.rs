//! Interactive SMS simulator.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin veda-client -- --url http://127.0.0.1:5000/sms
//! ```

use clap::Parser;
use veda_client::ClientArgs;
use veda_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = ClientArgs::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    if let Err(e) = veda_client::run_client(args).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
