//! Plain-text views of events and messages.

use crate::catalog::Event;
use crate::consts::format_number;
use crate::session::ChatMessage;

/// Shown instead of a list when nothing matches.
pub const NO_RESULTS: &str = "  no events found. try a different search or location.";

/// `$45`, `$29.99`, `$0`.
pub fn format_price(price: f64) -> String {
    format!("${price}")
}

/// Compact listing entry: header line plus the short description.
pub fn event_card(event: &Event) -> String {
    format!(
        "  #{:<3} {}  [{}]\n        {} · {} · {} · {} attending\n        {}",
        event.id,
        event.title,
        event.category,
        event.date,
        event.location,
        format_price(event.price),
        format_number(u64::from(event.attendees)),
        event.description,
    )
}

/// Full detail view for a single event.
pub fn event_detail(event: &Event) -> String {
    let rows = [
        ("date", event.date.clone()),
        ("duration", event.duration.clone()),
        ("location", event.location.clone()),
        (
            "attendees",
            format!("{} registered", format_number(u64::from(event.attendees))),
        ),
        ("price", format_price(event.price)),
        ("organizer", event.organizer.clone()),
        ("category", event.category.clone()),
    ];

    let mut out = format!("  {}\n  {}\n\n", event.title, event.description);
    for (label, value) in &rows {
        out.push_str(&format!("  {label:<10} {value}\n"));
    }
    if !event.full_description.is_empty() {
        out.push_str(&format!("\n  {}\n", event.full_description));
    }
    out
}

/// Listing for a filter result, or the empty state.
pub fn results(events: &[&Event]) -> String {
    if events.is_empty() {
        return NO_RESULTS.to_string();
    }
    let noun = if events.len() == 1 { "event" } else { "events" };
    let mut out = format!("  {} {noun}\n", events.len());
    for event in events {
        out.push('\n');
        out.push_str(&event_card(event));
        out.push('\n');
    }
    out
}

/// One transcript line.
pub fn message(message: &ChatMessage) -> String {
    format!(
        "  [{}] {:>9}: {}",
        message.timestamp.format("%H:%M:%S"),
        message.sender.to_string(),
        message.text
    )
}
