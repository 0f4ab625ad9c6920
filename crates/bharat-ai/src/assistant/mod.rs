//! Scripted chat assistant backed by a keyword table.

mod responses;
pub mod router;

pub use router::chat_router;

use crate::language::Language;
use responses::{Topic, FALLBACK, TOPICS};
use serde::Serialize;
use tracing::debug;

/// Message used to produce the assistant's opening line.
const GREETING_PROMPT: &str = "hello";

/// Keyword responder. Holds no conversation state; every call is independent.
#[derive(Debug, Clone)]
pub struct ChatAssistant {
    topics: &'static [Topic],
}

impl Default for ChatAssistant {
    fn default() -> Self {
        Self { topics: TOPICS }
    }
}

impl ChatAssistant {
    pub fn respond(&self, message: &str, language: Language) -> Result<ChatReply, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let normalized = message.to_lowercase();
        let topic = self.topics.iter().find(|topic| {
            topic
                .keywords
                .iter()
                .any(|keyword| normalized.contains(keyword))
        });

        let reply = match topic {
            Some(topic) => ChatReply {
                topic: Some(topic.key),
                language,
                text: topic.reply.text(language),
            },
            None => ChatReply {
                topic: None,
                language,
                text: FALLBACK.text(language),
            },
        };
        debug!(topic = reply.topic.unwrap_or("fallback"), language = language.code(), "chat reply selected");
        Ok(reply)
    }

    /// Opening message shown when a conversation starts.
    pub fn greeting(&self, language: Language) -> ChatReply {
        match self.respond(GREETING_PROMPT, language) {
            Ok(reply) => reply,
            Err(_) => ChatReply {
                topic: None,
                language,
                text: FALLBACK.text(language),
            },
        }
    }

    pub fn topic_keys(&self) -> Vec<&'static str> {
        self.topics.iter().map(|topic| topic.key).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    /// Matched topic, `None` for the fallback reply.
    pub topic: Option<&'static str>,
    pub language: Language,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("message must not be empty")]
    EmptyMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_topic_wins() {
        let assistant = ChatAssistant::default();
        // "scholarship scheme" mentions both topics; scholarship is listed first.
        let reply = assistant
            .respond("Tell me about a scholarship scheme", Language::English)
            .expect("reply");
        assert_eq!(reply.topic, Some("scholarship"));

        let reply = assistant
            .respond("which pension scheme suits me", Language::English)
            .expect("reply");
        assert_eq!(reply.topic, Some("pension"));
    }

    #[test]
    fn matching_ignores_case() {
        let reply = ChatAssistant::default()
            .respond("I am a FARMER from Punjab", Language::English)
            .expect("reply");
        assert_eq!(reply.topic, Some("farming"));
        assert!(reply.text.contains("PM-KISAN"));
    }

    #[test]
    fn hindi_reply_and_devanagari_keywords() {
        let assistant = ChatAssistant::default();
        let reply = assistant.respond("मुझे नौकरी चाहिए", Language::Hindi).expect("reply");
        assert_eq!(reply.topic, Some("career"));
        assert!(reply.text.contains("स्किल इंडिया"));
    }

    #[test]
    fn languages_without_text_use_english() {
        let reply = ChatAssistant::default()
            .respond("health card", Language::Tamil)
            .expect("reply");
        assert_eq!(reply.language, Language::Tamil);
        assert!(reply.text.starts_with("Ayushman Bharat"));
    }

    #[test]
    fn unknown_text_gets_fallback() {
        let reply = ChatAssistant::default()
            .respond("qwerty", Language::Hindi)
            .expect("reply");
        assert_eq!(reply.topic, None);
        assert_eq!(reply.text, FALLBACK.hindi);
    }

    #[test]
    fn blank_messages_are_rejected() {
        assert_eq!(
            ChatAssistant::default().respond("   \n", Language::English),
            Err(ChatError::EmptyMessage)
        );
    }

    #[test]
    fn plural_studies_reaches_study_topic() {
        let reply = ChatAssistant::default()
            .respond("I need help with my studies", Language::English)
            .expect("reply");
        assert_eq!(reply.topic, Some("study"));
    }

    #[test]
    fn greeting_uses_greeting_topic() {
        let greeting = ChatAssistant::default().greeting(Language::English);
        assert_eq!(greeting.topic, Some("greeting"));
        assert!(greeting.text.starts_with("Namaste!"));
    }
}
