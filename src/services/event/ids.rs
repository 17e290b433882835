//! Event id allocation.

use uuid::Uuid;

use crate::models::event::Event;
use crate::models::ui::IdStrategy;

/// Source of fresh event ids
pub trait IdAllocator: std::fmt::Debug {
    fn next_id(&mut self) -> String;
}

/// Monotonic counter rendered as decimal strings
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Start one past the largest numeric id in `events`
    pub fn after(events: &[Event]) -> Self {
        let highest = events
            .iter()
            .filter_map(|event| event.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self::starting_at(highest.saturating_add(1))
    }
}

impl IdAllocator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id.to_string()
    }
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Default)]
pub struct UuidIds;

impl IdAllocator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

pub fn allocator_for(strategy: IdStrategy, seeds: &[Event]) -> Box<dyn IdAllocator> {
    match strategy {
        IdStrategy::Sequential => Box::new(SequentialIds::after(seeds)),
        IdStrategy::Uuid => Box::new(UuidIds),
    }
}
