//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{Reply, ValueObjectError};

/// 返信生成のエラー
///
/// どのエラーもユーザーに見える固定の返信に変換され、HTTP エラーにはならない。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplyError {
    /// Webhook に Body が含まれていない（または空）
    #[error("no message body received")]
    NoMessage,

    /// 起動時にモデルの読み込みに失敗している
    #[error("chatbot is unavailable: {0}")]
    Unavailable(String),

    /// 本文を処理できない
    #[error("malformed message body: {0}")]
    Malformed(ValueObjectError),
}

impl ReplyError {
    /// ユーザーに返す固定の返信
    pub fn to_reply(&self) -> Reply {
        match self {
            Self::NoMessage => Reply::no_message(),
            Self::Unavailable(_) => Reply::unavailable(),
            Self::Malformed(_) => Reply::unprocessable(),
        }
    }
}
