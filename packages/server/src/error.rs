//! Server startup errors.

use thiserror::Error;

/// Errors that stop the server process
#[derive(Debug, Error)]
pub enum ServerError {
    /// Listener could not bind the configured address
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Serving loop failed
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
