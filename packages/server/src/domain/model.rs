//! Model artifact loaded once at startup.
//!
//! The artifact's contents are never interpreted. Whether it loaded decides
//! the process-wide [`ModelStatus`], which stays fixed for the server's lifetime.

use async_trait::async_trait;

use super::error::ModelLoadError;

/// Metadata of a successfully loaded artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelArtifact {
    pub path: String,
    pub size_bytes: u64,
}

/// Availability of the responder, decided at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelStatus {
    Available(ModelArtifact),
    Unavailable { reason: String },
}

impl ModelStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Short label for health output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available(_) => "available",
            Self::Unavailable { .. } => "unavailable",
        }
    }
}

impl From<Result<ModelArtifact, ModelLoadError>> for ModelStatus {
    fn from(result: Result<ModelArtifact, ModelLoadError>) -> Self {
        match result {
            Ok(artifact) => Self::Available(artifact),
            Err(e) => Self::Unavailable {
                reason: e.to_string(),
            },
        }
    }
}

/// Source of the model artifact.
///
/// Implemented in the infrastructure layer; the usecase layer depends only
/// on this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelLoader: Send + Sync {
    /// Load the artifact, failing if it is missing, unreadable or empty
    async fn load(&self) -> Result<ModelArtifact, ModelLoadError>;
}
