//! Keyword rule table for canned assistant replies.
//!
//! Rules are evaluated top-down and the first one with a keyword contained
//! in the lowercased utterance wins. A catch-all entry is always pinned at
//! the end, so every scan produces a reply.
//!
//! Matching is plain substring containment, so `"hi"` also fires inside
//! `"this"` and `"cost"` inside `"coster"`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Responder;

/// One keyword rule as written in a rule file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRule {
    pub keywords: Vec<String>,
    pub response: String,
}

impl ChatRule {
    pub fn new(keywords: &[&str], response: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            response: response.to_string(),
        }
    }
}

/// On-disk shape of a rule table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleFile {
    pub rules: Vec<ChatRule>,
    pub fallback: String,
}

#[derive(Debug, Clone, PartialEq)]
enum Matcher {
    /// Any of these (lowercased) keywords appears in the utterance.
    AnyKeyword(Vec<String>),
    Always,
}

impl Matcher {
    fn matches(&self, utterance: &str) -> bool {
        match self {
            Matcher::AnyKeyword(keywords) => keywords.iter().any(|k| utterance.contains(k.as_str())),
            Matcher::Always => true,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    matcher: Matcher,
    response: String,
}

/// Ordered rule table with the fallback reply as its last entry.
#[derive(Debug, Clone)]
pub struct RuleBook {
    entries: Vec<Entry>,
}

pub const GREETING: &str = "Hi! I'm your events assistant. How can I help you today? ✨";

pub const FIND_REPLY: &str = "I can help you find amazing events! 🎉 Use the search and filter options on the homepage to discover events by location or keyword. What type of event interests you?";
pub const TICKET_REPLY: &str = "To purchase tickets, simply click on any event card to view details and use the 'Get Tickets' button. 🎫 All our events have secure checkout!";
pub const LOCATION_REPLY: &str = "Our events are located in amazing cities including New York, San Francisco, Los Angeles, Chicago, and more! 🌎 Use the location filter to find events near you.";
pub const PRICE_REPLY: &str = "Event prices vary from free community events to premium experiences! 💰 You can see the price for each event on both the main page and detailed event pages.";
pub const HELLO_REPLY: &str = "Hello there! 👋 I'm excited to help you discover your next amazing event experience. What can I help you with today?";
pub const FALLBACK_REPLY: &str = "Thanks for your question! 🤔 I'm here to help with event discovery, tickets, locations, and pricing. Feel free to ask me anything about our events!";

impl RuleBook {
    /// Build a table from ordered rules and a fallback reply.
    ///
    /// Keywords are lowercased and blank ones dropped; surrounding spaces
    /// are kept and take part in matching. A rule left with no keywords can
    /// never fire.
    pub fn new(rules: Vec<ChatRule>, fallback: impl Into<String>) -> Self {
        let mut entries: Vec<Entry> = rules
            .into_iter()
            .map(|rule| Entry {
                matcher: Matcher::AnyKeyword(
                    rule.keywords
                        .iter()
                        .filter(|k| !k.trim().is_empty())
                        .map(|k| k.to_lowercase())
                        .collect(),
                ),
                response: rule.response,
            })
            .collect();
        entries.push(Entry {
            matcher: Matcher::Always,
            response: fallback.into(),
        });
        Self { entries }
    }

    /// The stock events-assistant table.
    pub fn builtin() -> Self {
        Self::new(
            vec![
                ChatRule::new(&["event", "find"], FIND_REPLY),
                ChatRule::new(&["ticket", "buy"], TICKET_REPLY),
                ChatRule::new(&["location", "where"], LOCATION_REPLY),
                ChatRule::new(&["price", "cost"], PRICE_REPLY),
                ChatRule::new(&["hello", "hi"], HELLO_REPLY),
            ],
            FALLBACK_REPLY,
        )
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: RuleFile = serde_json::from_str(json)?;
        Ok(Self::new(file.rules, file.fallback))
    }

    /// Load a rule table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read rules {}", path.display()))?;
        let book =
            Self::from_json(&json).with_context(|| format!("invalid rules {}", path.display()))?;
        tracing::info!(path = %path.display(), rules = book.rule_count(), "rule table loaded");
        Ok(book)
    }

    /// Number of keyword rules, not counting the fallback.
    pub fn rule_count(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn fallback(&self) -> &str {
        // new() always pushes the Always entry last
        self.entries
            .last()
            .map(|e| e.response.as_str())
            .unwrap_or_default()
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Responder for RuleBook {
    fn respond(&self, utterance: &str) -> String {
        let input = utterance.to_lowercase();
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.matcher.matches(&input) {
                tracing::debug!(rule = index, fallback = entry.matcher == Matcher::Always, "responder matched");
                return entry.response.clone();
            }
        }
        unreachable!("rule book always ends with a catch-all entry")
    }
}
