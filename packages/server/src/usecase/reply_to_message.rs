//! UseCase: 受信メッセージへの返信生成
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ReplyToMessageUseCase::execute() / reply() メソッド
//! - Body の有無チェック、モデル利用可否のゲート、キーワードルールの適用
//!
//! ### なぜこのテストが必要か
//! - 判定の順序（Body 欠落 → 利用不可 → キーワード）を保証する
//! - どの経路でも必ず 1 件の返信が得られることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：キーワードに応じた返信
//! - 異常系：Body 欠落、空の Body、モデル利用不可
//! - エッジケース：モデル利用不可でも Body 欠落のエラーが優先される、長い本文や NUL を含む本文もキーワードで判定される

use std::sync::Arc;

use crate::domain::{InboundMessage, KeywordResponder, MessageBody, ModelStatus, Reply};

use super::error::ReplyError;

/// 返信生成のユースケース
pub struct ReplyToMessageUseCase {
    /// 起動時に決定したモデルの状態（読み取り専用）
    model_status: Arc<ModelStatus>,
    responder: KeywordResponder,
}

impl ReplyToMessageUseCase {
    /// 新しい ReplyToMessageUseCase を作成
    pub fn new(model_status: Arc<ModelStatus>) -> Self {
        Self {
            model_status,
            responder: KeywordResponder::new(),
        }
    }

    /// 返信生成を実行
    ///
    /// # Arguments
    ///
    /// * `message` - 受信したメッセージ（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(Reply)` - キーワードルールによる返信
    /// * `Err(ReplyError)` - 固定の返信に変換されるエラー
    pub fn execute(&self, message: &InboundMessage) -> Result<Reply, ReplyError> {
        // 1. Body の有無
        let raw = match message.body.as_deref() {
            None | Some("") => return Err(ReplyError::NoMessage),
            Some(raw) => raw,
        };

        // 2. モデルの利用可否
        if let ModelStatus::Unavailable { reason } = self.model_status.as_ref() {
            return Err(ReplyError::Unavailable(reason.clone()));
        }

        // 3. 本文の検証とキーワードルール
        let body = MessageBody::new(raw.to_string()).map_err(ReplyError::Malformed)?;
        Ok(self.responder.respond(&body))
    }

    /// 返信生成を実行し、エラーも固定の返信に変換して返す
    pub fn reply(&self, message: &InboundMessage) -> Reply {
        match self.execute(message) {
            Ok(reply) => reply,
            Err(e) => {
                match &e {
                    ReplyError::NoMessage => {
                        tracing::warn!("No message body received in the webhook")
                    }
                    ReplyError::Unavailable(reason) => {
                        tracing::debug!("Chatbot unavailable: {}", reason)
                    }
                    ReplyError::Malformed(err) => {
                        tracing::error!("Error during chatbot response generation: {}", err)
                    }
                }
                e.to_reply()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ModelArtifact, SenderId, Timestamp,
        entity::{NO_MESSAGE_REPLY, UNAVAILABLE_REPLY},
        responder::{FALLBACK_REPLY, FEVER_FLU_REPLY, GREETING_REPLY, HEADACHE_REPLY},
    };

    fn available() -> Arc<ModelStatus> {
        Arc::new(ModelStatus::Available(ModelArtifact {
            path: "healthcare_chatbot_model.pkl".to_string(),
            size_bytes: 128,
        }))
    }

    fn unavailable() -> Arc<ModelStatus> {
        Arc::new(ModelStatus::Unavailable {
            reason: "model file 'healthcare_chatbot_model.pkl' was not found".to_string(),
        })
    }

    fn message(body: Option<&str>) -> InboundMessage {
        InboundMessage::new(
            body.map(str::to_string),
            SenderId::from_raw(Some("+15555550100".to_string())),
            Some("SM00000000000000000000000000000000".to_string()),
            Timestamp::new(0),
        )
    }

    #[test]
    fn test_execute_keyword_replies() {
        // テスト項目: モデルが利用可能なとき、キーワードに応じた返信が返る
        // given (前提条件):
        let usecase = ReplyToMessageUseCase::new(available());

        // when (操作) / then (期待する結果):
        let cases = [
            ("I have a headache and fever", FEVER_FLU_REPLY),
            ("bad headache", HEADACHE_REPLY),
            ("hi", GREETING_REPLY),
            ("my back hurts", FALLBACK_REPLY),
        ];
        for (body, expected) in cases {
            let reply = usecase.execute(&message(Some(body))).unwrap();
            assert_eq!(reply.text(), expected, "body: {body}");
        }
    }

    #[test]
    fn test_execute_missing_body() {
        // テスト項目: Body がない場合は NoMessage エラー
        // given (前提条件):
        let usecase = ReplyToMessageUseCase::new(available());

        // when (操作):
        let result = usecase.execute(&message(None));

        // then (期待する結果):
        assert_eq!(result, Err(ReplyError::NoMessage));
    }

    #[test]
    fn test_execute_empty_body() {
        // テスト項目: 空の Body も NoMessage エラーとして扱う
        // given (前提条件):
        let usecase = ReplyToMessageUseCase::new(available());

        // when (操作):
        let reply = usecase.reply(&message(Some("")));

        // then (期待する結果):
        assert_eq!(reply.text(), NO_MESSAGE_REPLY);
    }

    #[test]
    fn test_execute_unavailable() {
        // テスト項目: モデルが利用不可なら本文に関係なく利用不可の返信になる
        // given (前提条件):
        let usecase = ReplyToMessageUseCase::new(unavailable());

        // when (操作) / then (期待する結果):
        for body in ["fever", "headache", "hi", "anything else"] {
            assert!(matches!(
                usecase.execute(&message(Some(body))),
                Err(ReplyError::Unavailable(_))
            ));
            assert_eq!(usecase.reply(&message(Some(body))).text(), UNAVAILABLE_REPLY);
        }
    }

    #[test]
    fn test_missing_body_has_priority_over_unavailable() {
        // テスト項目: モデルが利用不可でも、Body 欠落のエラーが優先される
        // given (前提条件):
        let usecase = ReplyToMessageUseCase::new(unavailable());

        // when (操作):
        let reply = usecase.reply(&message(None));

        // then (期待する結果):
        assert_eq!(reply.text(), NO_MESSAGE_REPLY);
    }

    #[test]
    fn test_long_body_still_matches_keywords() {
        // テスト項目: 1601 文字の本文でも長さで拒否せず、"fever" を含めば発熱の返信になる
        // given (前提条件):
        let usecase = ReplyToMessageUseCase::new(available());
        let body = format!("I have a fever {}", "x".repeat(1586));
        assert_eq!(body.chars().count(), 1601);

        // when (操作):
        let result = usecase.execute(&message(Some(&body)));

        // then (期待する結果):
        assert_eq!(result.unwrap().text(), FEVER_FLU_REPLY);
        assert_eq!(usecase.reply(&message(Some(&body))).text(), FEVER_FLU_REPLY);
    }

    #[test]
    fn test_body_with_nul_still_matches_keywords() {
        // テスト項目: NUL 文字を含む本文もキーワードで判定される
        // given (前提条件):
        let usecase = ReplyToMessageUseCase::new(available());

        // when (操作):
        let reply = usecase.reply(&message(Some("fever\0")));

        // then (期待する結果):
        assert_eq!(reply.text(), FEVER_FLU_REPLY);
    }

    #[test]
    fn test_reply_is_idempotent() {
        // テスト項目: 同じ本文を 2 回送っても同じ返信になる
        // given (前提条件):
        let usecase = ReplyToMessageUseCase::new(available());
        let msg = message(Some("Help!"));

        // when (操作):
        let first = usecase.reply(&msg);
        let second = usecase.reply(&msg);

        // then (期待する結果):
        assert_eq!(first, second);
        assert_eq!(first.text(), GREETING_REPLY);
    }
}
