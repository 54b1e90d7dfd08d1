use marquee::catalog::{Catalog, Event};
use marquee::filter::{Query, filter};

fn event(id: u32, title: &str, description: &str, location: &str) -> Event {
    Event {
        id,
        title: title.to_string(),
        description: description.to_string(),
        full_description: String::new(),
        category: "Music".to_string(),
        location: location.to_string(),
        organizer: "Org".to_string(),
        duration: "2 hours".to_string(),
        date: "2025-05-01".to_string(),
        price: 20.0,
        attendees: 50,
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        event(1, "Jazz Night", "Smooth sounds downtown", "NYC"),
        event(2, "Tech Conf", "Talks about Rust and JAZZ-age computing", "SF"),
        event(3, "Rock Show", "Loud guitars", "NYC"),
        event(4, "Jazz Brunch", "Pancakes and trios", "SF"),
    ])
    .unwrap()
}

fn ids(events: &[&Event]) -> Vec<u32> {
    events.iter().map(|e| e.id).collect()
}

#[test]
fn unconstrained_query_returns_whole_catalog() {
    let catalog = catalog();
    let query = Query::default();
    assert!(query.is_unconstrained());
    assert_eq!(ids(&filter(catalog.events(), &query)), vec![1, 2, 3, 4]);
}

#[test]
fn jazz_example() {
    let catalog = Catalog::new(vec![
        event(1, "Jazz Night", "", "NYC"),
        event(2, "Tech Conf", "", "SF"),
    ])
    .unwrap();
    assert_eq!(ids(&filter(catalog.events(), &Query::new("jazz", ""))), vec![1]);
    assert_eq!(ids(&filter(catalog.events(), &Query::new("", "SF"))), vec![2]);
}

#[test]
fn result_is_sound_and_complete() {
    let catalog = catalog();
    let queries = [
        Query::new("jazz", ""),
        Query::new("JAZZ", "SF"),
        Query::new("", "NYC"),
        Query::new("o", "NYC"),
        Query::new("nothing", ""),
    ];
    for query in &queries {
        let result = filter(catalog.events(), query);
        for event in catalog.events() {
            let included = result.iter().any(|e| e.id == event.id);
            assert_eq!(included, query.matches(event), "{query} on #{}", event.id);
        }
    }
}

#[test]
fn catalog_order_is_preserved() {
    let catalog = catalog();
    let result = filter(catalog.events(), &Query::new("jazz", ""));
    assert_eq!(ids(&result), vec![1, 2, 4]);
}

#[test]
fn stacking_filters_equals_conjunction() {
    let catalog = catalog();
    let by_term = filter(catalog.events(), &Query::new("jazz", ""));
    let narrowed = filter(by_term, &Query::new("", "SF"));
    let combined = filter(catalog.events(), &Query::new("jazz", "SF"));
    assert_eq!(ids(&narrowed), ids(&combined));
    assert_eq!(ids(&combined), vec![2, 4]);
}

#[test]
fn filtering_is_idempotent() {
    let catalog = catalog();
    let query = Query::new("jazz", "SF");
    let once = filter(catalog.events(), &query);
    let twice = filter(once.clone(), &query);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn no_match_is_an_empty_result_not_an_error() {
    let catalog = catalog();
    assert!(filter(catalog.events(), &Query::new("", "Atlantis")).is_empty());
}

#[test]
fn seed_catalog_filters() {
    let catalog = Catalog::seed().unwrap();
    let music_in_new_york = filter(catalog.events(), &Query::new("jazz", "New York"));
    assert_eq!(ids(&music_in_new_york), vec![1]);
    assert_eq!(
        catalog.locations(),
        vec!["Austin", "Chicago", "Los Angeles", "New York", "San Francisco", "Seattle"]
    );
}
