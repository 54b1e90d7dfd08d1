use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Responder;

/// A scripted responder for tests. Returns pre-defined replies in order,
/// then repeats the last one. Records every utterance it was asked about.
pub struct ScriptedResponder {
    replies: Vec<String>,
    index: AtomicUsize,
    heard: Mutex<Vec<String>>,
}

impl ScriptedResponder {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|r| r.to_string()).collect(),
            index: AtomicUsize::new(0),
            heard: Mutex::new(Vec::new()),
        }
    }

    /// Utterances received so far, oldest first.
    pub fn heard(&self) -> Vec<String> {
        self.heard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Responder for ScriptedResponder {
    fn respond(&self, utterance: &str) -> String {
        self.heard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(utterance.to_string());
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        self.replies
            .get(i)
            .or_else(|| self.replies.last())
            .cloned()
            .unwrap_or_default()
    }
}
