pub mod chat;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use chat::{ChatSession, Submission};

use crate::responder::GREETING;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "you"),
            Sender::Bot => write!(f, "assistant"),
        }
    }
}

/// A single line of conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// Append-only conversation log. Ids start at 1 and increase by one per
/// message.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    /// A fresh conversation opened by the assistant greeting.
    pub fn new() -> Self {
        let mut transcript = Self::empty();
        transcript.push(Sender::Bot, GREETING);
        transcript
    }

    pub fn empty() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> &ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_transcript_starts_with_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.len(), 1);
        let first = &transcript.messages()[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.sender, Sender::Bot);
        assert_eq!(first.text, GREETING);
    }

    #[test]
    fn ids_increase_monotonically() {
        let mut transcript = Transcript::empty();
        transcript.push(Sender::User, "a");
        transcript.push(Sender::Bot, "b");
        transcript.push(Sender::User, "c");
        let ids: Vec<u64> = transcript.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn push_returns_appended_message() {
        let mut transcript = Transcript::new();
        let id = transcript.push(Sender::User, "hello").id;
        assert_eq!(id, 2);
        assert_eq!(transcript.last().unwrap().text, "hello");
    }

    #[test]
    fn timestamps_do_not_go_backwards() {
        let mut transcript = Transcript::empty();
        transcript.push(Sender::User, "a");
        transcript.push(Sender::Bot, "b");
        let m = transcript.messages();
        assert!(m[0].timestamp <= m[1].timestamp);
    }

    #[test]
    fn sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
    }
}
