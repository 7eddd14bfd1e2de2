//! Delivers a message to the webhook the way the provider does.

use uuid::Uuid;

use crate::{cli::WebhookMethod, error::ClientError, twiml::extract_messages};

/// Provider-style message id: `SM` followed by 32 hex characters
pub fn generate_message_sid() -> String {
    format!("SM{}", Uuid::new_v4().simple())
}

/// Webhook sender bound to one URL and sender number
pub struct SmsSender {
    client: reqwest::Client,
    url: String,
    from: String,
    method: WebhookMethod,
}

impl SmsSender {
    pub fn new(url: impl Into<String>, from: impl Into<String>, method: WebhookMethod) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            from: from.into(),
            method,
        }
    }

    /// Form fields for one message
    pub fn params(&self, body: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Body", body.to_string()),
            ("From", self.from.clone()),
            ("MessageSid", generate_message_sid()),
        ]
    }

    /// Send one message and return the reply texts
    pub async fn send(&self, body: &str) -> Result<Vec<String>, ClientError> {
        let params = self.params(body);
        let request = match self.method {
            WebhookMethod::Post => self.client.post(&self.url).form(&params),
            WebhookMethod::Get => self.client.get(&self.url).query(&params),
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let xml = response.text().await?;
        tracing::debug!("Raw reply: {}", xml);

        let messages = extract_messages(&xml);
        if messages.is_empty() {
            return Err(ClientError::EmptyReply);
        }
        Ok(messages)
    }
}
