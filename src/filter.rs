//! Search and location filtering over the catalog.

use std::fmt;

use crate::catalog::Event;

/// What the user is currently looking for.
///
/// `term` matches case-insensitively against title or description.
/// `location` must match exactly; empty means any location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub term: String,
    pub location: String,
}

impl Query {
    pub fn new(term: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            location: location.into(),
        }
    }

    /// True when neither field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.term.is_empty() && self.location.is_empty()
    }

    pub fn with_term(&self, term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            location: self.location.clone(),
        }
    }

    pub fn with_location(&self, location: impl Into<String>) -> Self {
        Self {
            term: self.term.clone(),
            location: location.into(),
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.matches_term(event) && self.matches_location(event)
    }

    fn matches_term(&self, event: &Event) -> bool {
        if self.term.is_empty() {
            return true;
        }
        let term = self.term.to_lowercase();
        event.title.to_lowercase().contains(&term)
            || event.description.to_lowercase().contains(&term)
    }

    fn matches_location(&self, event: &Event) -> bool {
        self.location.is_empty() || event.location == self.location
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let term = if self.term.is_empty() {
            "(any)"
        } else {
            &self.term
        };
        let location = if self.location.is_empty() {
            "All Locations"
        } else {
            &self.location
        };
        write!(f, "search: {term}  location: {location}")
    }
}

/// Keep the events that match `query`, in their original order.
///
/// Accepts a catalog slice or the output of a previous call, so filters
/// can be stacked.
pub fn filter<'a, I>(events: I, query: &Query) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let matched: Vec<&Event> = events.into_iter().filter(|e| query.matches(e)).collect();
    tracing::debug!(term = %query.term, location = %query.location, matched = matched.len(), "filter");
    matched
}
