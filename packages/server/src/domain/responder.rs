//! Keyword rules that turn a message body into a reply.
//!
//! Rules are checked in order against the lower-cased body and the first
//! rule with any matching keyword wins. Matching is plain substring search,
//! so "hi" also matches inside "this" or "chills".

use super::{entity::Reply, value_object::MessageBody};

pub const FEVER_FLU_REPLY: &str = "A fever can be a sign of many things, including the flu. I am not a doctor. Please consult a healthcare professional for a proper diagnosis.";

pub const HEADACHE_REPLY: &str = "Headaches can have various causes. If it is severe or persistent, please seek medical advice.";

pub const GREETING_REPLY: &str =
    "Hello! I am Veda, your healthcare assistant. How can I help you today?";

pub const FALLBACK_REPLY: &str =
    "I can provide general information about common diseases. What are your symptoms?";

/// A single keyword rule
#[derive(Debug, Clone, Copy)]
struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

impl Rule {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k))
    }
}

/// Rules in priority order
const RULES: &[Rule] = &[
    Rule {
        keywords: &["fever", "flu"],
        reply: FEVER_FLU_REPLY,
    },
    Rule {
        keywords: &["headache"],
        reply: HEADACHE_REPLY,
    },
    Rule {
        keywords: &["help", "hi"],
        reply: GREETING_REPLY,
    },
];

/// Stateless keyword responder
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordResponder;

impl KeywordResponder {
    pub fn new() -> Self {
        Self
    }

    /// Pick the reply for a message body. Always returns a reply.
    pub fn respond(&self, body: &MessageBody) -> Reply {
        let normalized = body.normalized();
        let text = RULES
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map_or(FALLBACK_REPLY, |rule| rule.reply);
        Reply::new(text)
    }
}
