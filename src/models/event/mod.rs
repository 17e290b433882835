// Event module
// Calendar entries, drop payloads and external chips

use serde::{Deserialize, Serialize};

/// A titled, dated calendar entry.
///
/// `date` is kept as the string the calendar handed over (normally
/// `YYYY-MM-DD`); it is never normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
}

impl Event {
    /// Create an event from its three fields
    ///
    /// # Examples
    /// ```
    /// use calendar_widget::models::event::Event;
    ///
    /// let event = Event::new("7", "Retro", "2024-05-10");
    /// assert_eq!(event.date, "2024-05-10");
    /// ```
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
        }
    }

    /// The cleared draft: `{id: "", title: "", date: ""}`
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.title.is_empty() && self.date.is_empty()
    }
}

/// The two records every widget starts with
pub fn seed_events() -> Vec<Event> {
    vec![
        Event::new("1", "event 1", "2019-04-01"),
        Event::new("2", "event 2", "2019-04-02"),
    ]
}

/// What the month view reports after an external chip is released on a day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropPayload {
    pub title: String,
    pub start_date: String,
}

impl DropPayload {
    pub fn new(title: impl Into<String>, start_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            start_date: start_date.into(),
        }
    }
}

/// A draggable chip in the external events panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalEvent {
    pub id: String,
    pub title: String,
}

impl ExternalEvent {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_event_has_blank_fields() {
        let event = Event::empty();
        assert!(event.is_empty());
        assert_eq!(event, Event::new("", "", ""));
    }

    #[test]
    fn test_seed_events() {
        let seeds = seed_events();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0], Event::new("1", "event 1", "2019-04-01"));
        assert_eq!(seeds[1], Event::new("2", "event 2", "2019-04-02"));
    }

    #[test]
    fn test_event_with_only_title_is_not_empty() {
        let event = Event::new("", "Demo", "");
        assert!(!event.is_empty());
    }
}
