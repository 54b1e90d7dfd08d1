//! The conversation flow around the responder.
//!
//! Submitting a message appends it right away, then schedules the reply
//! after a fixed delay. Only one reply may be outstanding. Cancelling,
//! resetting or dropping the session guarantees the pending reply is never
//! appended.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use super::{ChatMessage, Sender, Transcript};
use crate::events::{ChatEvent, EventBus};
use crate::responder::Responder;

/// What happened to a submitted message.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Appended; a reply is now composing.
    Sent(ChatMessage),
    /// Blank input, nothing changed.
    Ignored,
    /// A reply is still composing, input rejected.
    Busy,
}

struct Shared {
    transcript: Transcript,
    composing: bool,
    /// Bumped on every cancel so a reply scheduled earlier can tell it is stale.
    epoch: u64,
}

/// A single conversation, owned by whatever front end shows it.
pub struct ChatSession {
    responder: Arc<dyn Responder>,
    delay: Duration,
    shared: Arc<Mutex<Shared>>,
    bus: Arc<EventBus>,
    pending: Option<JoinHandle<Option<ChatMessage>>>,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ChatSession {
    pub fn new(responder: Arc<dyn Responder>, delay: Duration) -> Self {
        Self {
            responder,
            delay,
            shared: Arc::new(Mutex::new(Shared {
                transcript: Transcript::new(),
                composing: false,
                epoch: 0,
            })),
            bus: Arc::new(EventBus::default()),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_composing(&self) -> bool {
        lock(&self.shared).composing
    }

    /// Snapshot of the conversation so far.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        lock(&self.shared).transcript.messages().to_vec()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.bus.subscribe()
    }

    /// Submit a user message. Must be called inside a tokio runtime.
    pub fn submit(&mut self, text: &str) -> Submission {
        if text.trim().is_empty() {
            return Submission::Ignored;
        }

        let (message, epoch) = {
            let mut shared = lock(&self.shared);
            if shared.composing {
                tracing::debug!("submit rejected, reply still composing");
                return Submission::Busy;
            }
            let message = shared.transcript.push(Sender::User, text).clone();
            shared.composing = true;
            (message, shared.epoch)
        };

        self.bus.emit(ChatEvent::MessageAppended(message.clone()));
        self.bus.emit(ChatEvent::ComposingStarted);
        tracing::debug!(id = message.id, delay_ms = self.delay.as_millis() as u64, "reply scheduled");

        let responder = Arc::clone(&self.responder);
        let shared = Arc::clone(&self.shared);
        let bus = Arc::clone(&self.bus);
        let delay = self.delay;
        let utterance = text.to_string();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if lock(&shared).epoch != epoch {
                return None;
            }
            let reply = responder.respond(&utterance);

            let appended = {
                let mut shared = lock(&shared);
                if shared.epoch != epoch {
                    return None;
                }
                let appended = shared.transcript.push(Sender::Bot, reply).clone();
                shared.composing = false;
                appended
            };

            bus.emit(ChatEvent::MessageAppended(appended.clone()));
            bus.emit(ChatEvent::ComposingFinished);
            Some(appended)
        }));

        Submission::Sent(message)
    }

    /// Wait for the outstanding reply. `None` if nothing was pending or the
    /// reply got cancelled.
    pub async fn wait_for_reply(&mut self) -> Option<ChatMessage> {
        let handle = self.pending.take()?;
        match handle.await {
            Ok(reply) => reply,
            Err(e) => {
                if !e.is_cancelled() {
                    tracing::warn!(error = %e, "reply task failed");
                }
                None
            }
        }
    }

    /// Drop the outstanding reply, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_composing = {
            let mut shared = lock(&self.shared);
            shared.epoch += 1;
            std::mem::replace(&mut shared.composing, false)
        };
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        if was_composing {
            tracing::debug!("pending reply cancelled");
            self.bus.emit(ChatEvent::ReplyCancelled);
        }
        was_composing
    }

    /// Start over with a fresh transcript.
    pub fn reset(&mut self) {
        self.cancel();
        let greeting = {
            let mut shared = lock(&self.shared);
            shared.transcript = Transcript::new();
            shared.transcript.last().cloned()
        };
        if let Some(greeting) = greeting {
            self.bus.emit(ChatEvent::MessageAppended(greeting));
        }
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        {
            let mut shared = lock(&self.shared);
            shared.epoch += 1;
            shared.composing = false;
        }
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
