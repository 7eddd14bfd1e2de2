//! TwiML messaging response serialization.
//!
//! Produces the same document shape the provider's helper libraries emit:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?><Response><Message>text</Message></Response>
//! ```

use crate::domain::Reply;

/// Content type of a TwiML document
pub const TWIML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A `<Response>` document made of `<Message>` verbs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagingResponse {
    messages: Vec<String>,
}

impl MessagingResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one `<Message>` verb
    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.messages.push(text.into());
        self
    }

    /// Render the document
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(XML_DECLARATION);
        if self.messages.is_empty() {
            xml.push_str("<Response />");
            return xml;
        }
        xml.push_str("<Response>");
        for text in &self.messages {
            xml.push_str("<Message>");
            xml.push_str(&escape_xml(text));
            xml.push_str("</Message>");
        }
        xml.push_str("</Response>");
        xml
    }
}

impl From<&Reply> for MessagingResponse {
    fn from(reply: &Reply) -> Self {
        Self::new().message(reply.text())
    }
}

/// Escape text content for XML
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
