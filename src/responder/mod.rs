pub mod mock;
pub mod rules;

pub use rules::{ChatRule, GREETING, RuleBook};

/// Produces the assistant's reply to a user utterance.
///
/// Replies are total: every utterance, including an empty one, gets a
/// string back.
pub trait Responder: Send + Sync {
    fn respond(&self, utterance: &str) -> String;
}
