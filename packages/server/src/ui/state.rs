//! Server state shared across requests.

use std::sync::Arc;

use crate::{domain::ModelStatus, usecase::ReplyToMessageUseCase};

/// Shared application state
///
/// Built once before serving begins and read-only afterwards.
pub struct AppState {
    /// Model availability decided at startup
    pub model_status: Arc<ModelStatus>,
}

impl AppState {
    pub fn new(model_status: ModelStatus) -> Self {
        Self {
            model_status: Arc::new(model_status),
        }
    }

    /// UseCase for computing a reply
    pub fn reply_usecase(&self) -> ReplyToMessageUseCase {
        ReplyToMessageUseCase::new(self.model_status.clone())
    }
}
