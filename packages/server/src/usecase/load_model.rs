//! UseCase: 起動時のモデル読み込み
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LoadModelUseCase::execute() メソッド
//! - ModelLoader の結果を ModelStatus に変換する処理
//!
//! ### なぜこのテストが必要か
//! - 読み込み失敗がプロセスの停止ではなく機能の縮退になることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：読み込み成功 → Available
//! - 異常系：ファイルなし、空ファイル、I/O エラー → Unavailable

use std::sync::Arc;

use crate::domain::{ModelLoader, ModelStatus};

/// モデル読み込みのユースケース
pub struct LoadModelUseCase {
    /// ModelLoader（アーティファクト読み込みの抽象化）
    loader: Arc<dyn ModelLoader>,
}

impl LoadModelUseCase {
    /// 新しい LoadModelUseCase を作成
    pub fn new(loader: Arc<dyn ModelLoader>) -> Self {
        Self { loader }
    }

    /// モデル読み込みを実行
    ///
    /// 失敗してもエラーは返さず、`ModelStatus::Unavailable` として記録する。
    pub async fn execute(&self) -> ModelStatus {
        let result = self.loader.load().await;
        match &result {
            Ok(artifact) => tracing::info!(
                "Chatbot model loaded successfully! ({}, {} bytes)",
                artifact.path,
                artifact.size_bytes
            ),
            Err(e) => tracing::warn!(
                "Model load failed: {}. Every message will get the unavailable reply.",
                e
            ),
        }
        ModelStatus::from(result)
    }
}
