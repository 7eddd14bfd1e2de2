//! Client error definitions.

use thiserror::Error;

/// Errors raised while delivering a message or reading input
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be sent or the body could not be read
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// Response contained no `<Message>` element
    #[error("reply contained no message")]
    EmptyReply,

    /// Line editor failure
    #[error("input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
