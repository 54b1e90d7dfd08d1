//! The read-only event catalog.
//!
//! A [`Catalog`] is loaded once at startup, either from the seed dataset
//! compiled into the binary or from a JSON file, and never mutated after.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Seed dataset shipped with the binary.
const SEED: &str = include_str!("seed.json");

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub category: String,
    pub location: String,
    pub organizer: String,
    pub duration: String,
    pub date: String,
    pub price: f64,
    pub attendees: u32,
}

/// Ordered collection of events with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Validate and wrap a list of events. Order is kept as given.
    pub fn new(events: Vec<Event>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id) {
                bail!("duplicate event id {}", event.id);
            }
            if !event.price.is_finite() || event.price < 0.0 {
                bail!("event {} has invalid price {}", event.id, event.price);
            }
        }
        tracing::debug!(events = events.len(), "catalog validated");
        Ok(Self { events })
    }

    /// The built-in seed dataset.
    pub fn seed() -> Result<Self> {
        Self::from_json(SEED).context("failed to parse built-in catalog")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        Self::new(events)
    }

    /// Load a catalog from a JSON file containing an array of events.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let catalog = Self::from_json(&json)
            .with_context(|| format!("invalid catalog {}", path.display()))?;
        tracing::info!(path = %path.display(), events = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Look up a single event for the detail view.
    pub fn get(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Distinct locations, sorted, for the location picker.
    pub fn locations(&self) -> Vec<&str> {
        let mut locations: Vec<&str> = self.events.iter().map(|e| e.location.as_str()).collect();
        locations.sort_unstable();
        locations.dedup();
        locations
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build an event with only the fields a test cares about.
    pub(crate) fn event(id: u32, title: &str, location: &str) -> Event {
        Event {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            full_description: String::new(),
            category: "Music".to_string(),
            location: location.to_string(),
            organizer: "Organizer".to_string(),
            duration: "2 hours".to_string(),
            date: "2025-01-01".to_string(),
            price: 10.0,
            attendees: 100,
        }
    }

    #[test]
    fn seed_parses() {
        let catalog = Catalog::seed().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn seed_ids_are_unique() {
        let catalog = Catalog::seed().unwrap();
        let ids: HashSet<u32> = catalog.events().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = Catalog::new(vec![event(1, "a", "NYC"), event(1, "b", "SF")]).unwrap_err();
        assert!(err.to_string().contains("duplicate event id 1"));
    }

    #[test]
    fn negative_price_rejected() {
        let mut bad = event(3, "c", "NYC");
        bad.price = -1.0;
        assert!(Catalog::new(vec![bad]).is_err());
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.locations().is_empty());
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::new(vec![event(1, "a", "NYC"), event(7, "b", "SF")]).unwrap();
        assert_eq!(catalog.get(7).unwrap().title, "b");
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn locations_sorted_and_distinct() {
        let catalog = Catalog::new(vec![
            event(1, "a", "SF"),
            event(2, "b", "Austin"),
            event(3, "c", "SF"),
            event(4, "d", "NYC"),
        ])
        .unwrap();
        assert_eq!(catalog.locations(), vec!["Austin", "NYC", "SF"]);
    }

    #[test]
    fn camel_case_full_description() {
        let json = r#"[{"id":1,"title":"t","description":"d","fullDescription":"long",
            "category":"c","location":"l","organizer":"o","duration":"1h",
            "date":"2025-01-01","price":0,"attendees":0}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.events()[0].full_description, "long");
    }
}
