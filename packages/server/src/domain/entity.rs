//! Core domain models for the SMS responder.

use super::value_object::{SenderId, Timestamp};

/// Reply sent when the webhook carried no message body
pub const NO_MESSAGE_REPLY: &str = "An error occurred. No message received.";

/// Reply sent for every message when the model artifact failed to load
pub const UNAVAILABLE_REPLY: &str = "I am sorry, the chatbot is currently unavailable.";

/// Reply sent when the message body cannot be processed
pub const UNPROCESSABLE_REPLY: &str =
    "I am unable to process that message right now. Please try again later.";

/// An inbound SMS as delivered by the provider webhook.
///
/// Lives for a single request. `body` is kept raw; validation into a
/// [`MessageBody`](super::MessageBody) happens when the reply is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Raw `Body` field, `None` when the field was missing
    pub body: Option<String>,
    /// `From` field, informational only
    pub sender: Option<SenderId>,
    /// Provider message identifier (`MessageSid`), informational only
    pub message_sid: Option<String>,
    /// When the webhook was received
    pub received_at: Timestamp,
}

impl InboundMessage {
    pub fn new(
        body: Option<String>,
        sender: Option<SenderId>,
        message_sid: Option<String>,
        received_at: Timestamp,
    ) -> Self {
        Self {
            body,
            sender,
            message_sid,
            received_at,
        }
    }

    /// Sender for log output, `"unknown"` when absent
    pub fn sender_label(&self) -> &str {
        self.sender.as_ref().map_or("unknown", |s| s.as_str())
    }
}

/// The single outbound reply produced for an inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    text: String,
}

impl Reply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn no_message() -> Self {
        Self::new(NO_MESSAGE_REPLY)
    }

    pub fn unavailable() -> Self {
        Self::new(UNAVAILABLE_REPLY)
    }

    pub fn unprocessable() -> Self {
        Self::new(UNPROCESSABLE_REPLY)
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_label() {
        // テスト項目: 送信者がいればその ID、いなければ "unknown" を返す
        // given (前提条件):
        let with_sender = InboundMessage::new(
            Some("hi".to_string()),
            SenderId::from_raw(Some("+15555550100".to_string())),
            None,
            Timestamp::new(0),
        );
        let without_sender = InboundMessage::new(None, None, None, Timestamp::new(0));

        // then (期待する結果):
        assert_eq!(with_sender.sender_label(), "+15555550100");
        assert_eq!(without_sender.sender_label(), "unknown");
    }

    #[test]
    fn test_fixed_replies() {
        // テスト項目: 固定応答のコンストラクタが対応する文言を持つ
        // then (期待する結果):
        assert_eq!(Reply::no_message().text(), NO_MESSAGE_REPLY);
        assert_eq!(Reply::unavailable().text(), UNAVAILABLE_REPLY);
        assert_eq!(Reply::unprocessable().text(), UNPROCESSABLE_REPLY);
    }
}
