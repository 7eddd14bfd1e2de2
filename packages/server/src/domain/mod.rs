//! Domain layer for the SMS responder.
//!
//! This module contains the reply rules and value objects, independent of
//! the webhook transport (form DTOs, TwiML) and of how the model artifact is read.

pub mod entity;
pub mod error;
pub mod model;
pub mod responder;
pub mod value_object;

pub use entity::{InboundMessage, Reply};
pub use error::{ModelLoadError, ValueObjectError};
pub use model::{ModelArtifact, ModelLoader, ModelStatus};
pub use responder::KeywordResponder;
pub use value_object::{MessageBody, SenderId, Timestamp};
