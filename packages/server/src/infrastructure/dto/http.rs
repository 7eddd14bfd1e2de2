//! HTTP request/response DTOs for the SMS responder.

use serde::{Deserialize, Serialize};

use crate::domain::{InboundMessage, SenderId, Timestamp};

/// Form fields the provider sends to the `/sms` webhook.
///
/// Only `Body` and `From` matter; the remaining fields are kept for logging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmsWebhookParams {
    #[serde(rename = "Body")]
    pub body: Option<String>,
    #[serde(rename = "From")]
    pub from: Option<String>,
    #[serde(rename = "To")]
    pub to: Option<String>,
    #[serde(rename = "MessageSid")]
    pub message_sid: Option<String>,
}

impl SmsWebhookParams {
    /// Fill fields missing here from `query`.
    ///
    /// Mirrors how the provider's fields are read from both the query string
    /// and the form body, with form values taking precedence.
    pub fn or_query(self, query: SmsWebhookParams) -> Self {
        Self {
            body: self.body.or(query.body),
            from: self.from.or(query.from),
            to: self.to.or(query.to),
            message_sid: self.message_sid.or(query.message_sid),
        }
    }

    /// Convert into the domain's inbound message
    pub fn into_inbound(self, received_at: Timestamp) -> InboundMessage {
        InboundMessage::new(
            self.body,
            SenderId::from_raw(self.from),
            self.message_sid,
            received_at,
        )
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    /// "available" or "unavailable"
    pub model: String,
}
