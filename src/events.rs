//! Decoupled event bus for chat session updates.
//!
//! A [`ChatSession`](crate::session::ChatSession) emits events via
//! [`EventBus::emit`] and a front end subscribes via
//! [`EventBus::subscribe`]. Built on [`tokio::sync::broadcast`] so several
//! views can follow the same conversation.

use tokio::sync::broadcast;

use crate::session::ChatMessage;

/// Things that happen to a conversation.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// A message was added to the transcript.
    MessageAppended(ChatMessage),
    /// A reply has been scheduled.
    ComposingStarted,
    /// The scheduled reply was delivered.
    ComposingFinished,
    /// The scheduled reply was dropped before delivery.
    ReplyCancelled,
}

#[derive(Debug)]
pub struct EventBus {
    tx: broadcast::Sender<ChatEvent>,
}

impl EventBus {
    /// Create a new event bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to all current subscribers.
    /// Returns the number of receivers that will see it.
    pub fn emit(&self, event: ChatEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Subscribe to future events. Past ones are not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
