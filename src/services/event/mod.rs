//! In-memory event store.
//! Holds the widget's events in insertion order; nothing here is persisted.

pub mod ids;

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::utils::date::parse_event_date;

/// Ordered list of events owned by a single widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Append an event at the end; no deduplication is performed
    pub fn append(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Remove the first event with `id`, returning it. Missing ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Option<Event> {
        let index = self.events.iter().position(|event| event.id == id)?;
        Some(self.events.remove(index))
    }

    /// Set the date of the first event with `id`. Returns whether one matched.
    pub fn move_to(&mut self, id: &str, date: impl Into<String>) -> bool {
        match self.events.iter_mut().find(|event| event.id == id) {
            Some(event) => {
                event.date = date.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn list_all(&self) -> &[Event] {
        &self.events
    }

    /// Events whose date string falls on `date`, in store order.
    ///
    /// Events whose date does not parse (a cleared or mistyped dialog date)
    /// stay in the store and in `list_all`, but never match any day, so the
    /// grid does not draw them.
    pub fn events_on(&self, date: NaiveDate) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(move |event| parse_event_date(&event.date) == Some(date))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::seed_events;
    use pretty_assertions::assert_eq;

    fn seeded() -> EventStore {
        EventStore::from_events(seed_events())
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = seeded();
        store.append(Event::new("3", "later", "2019-03-01"));

        let ids: Vec<&str> = store.list_all().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_delete_removes_first_match_only() {
        let mut store = seeded();
        store.append(Event::new("1", "duplicate", "2019-04-09"));

        let removed = store.delete("1");

        assert_eq!(removed, Some(Event::new("1", "event 1", "2019-04-01")));
        assert_eq!(store.len(), 2);
        assert_eq!(store.list_all()[1].title, "duplicate");
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = seeded();
        assert_eq!(store.delete("missing"), None);
        assert_eq!(store, seeded());
    }

    #[test]
    fn test_move_to_changes_only_target_date() {
        let mut store = seeded();
        assert!(store.move_to("2", "2019-04-20"));
        assert_eq!(store.get("2").map(|e| e.date.as_str()), Some("2019-04-20"));
        assert_eq!(store.get("1").map(|e| e.date.as_str()), Some("2019-04-01"));
        assert!(!store.move_to("9", "2019-04-20"));
    }

    #[test]
    fn test_events_on_skips_unparsable_dates() {
        let mut store = seeded();
        store.append(Event::empty());
        store.append(Event::new("4", "timed", "2019-04-01T10:00:00"));

        let date = NaiveDate::from_ymd_opt(2019, 4, 1).unwrap();
        let titles: Vec<&str> = store.events_on(date).map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["event 1", "timed"]);
    }
}
