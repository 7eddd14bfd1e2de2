//! ファイルシステムからモデルのアーティファクトを読み込む ModelLoader 実装
//!
//! アーティファクトの中身は解釈せず、読み込めたかどうかだけを判定します。

use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;

use crate::domain::{ModelArtifact, ModelLoadError, ModelLoader};

/// Default artifact path, relative to the working directory
pub const DEFAULT_MODEL_PATH: &str = "healthcare_chatbot_model.pkl";

/// ファイルベースの ModelLoader 実装
pub struct FileModelLoader {
    path: PathBuf,
}

impl FileModelLoader {
    /// 新しい FileModelLoader を作成
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ModelLoader for FileModelLoader {
    async fn load(&self) -> Result<ModelArtifact, ModelLoadError> {
        let display = self.path.display().to_string();

        let bytes = tokio::fs::read(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ModelLoadError::NotFound(display.clone()),
            _ => ModelLoadError::Io {
                path: display.clone(),
                message: e.to_string(),
            },
        })?;

        if bytes.is_empty() {
            return Err(ModelLoadError::Empty(display));
        }

        Ok(ModelArtifact {
            path: display,
            size_bytes: bytes.len() as u64,
        })
    }
}
