//! Widget state record and its transition function.

use super::command::{DraftField, WidgetCommand};
use crate::models::event::{seed_events, Event};
use crate::services::event::ids::IdAllocator;
use crate::services::event::EventStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Editing,
}

/// Everything the widget remembers between frames
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub store: EventStore,
    pub draft: Event,
    pub modal: ModalState,
}

impl WidgetState {
    pub fn new(store: EventStore) -> Self {
        Self {
            store,
            draft: Event::empty(),
            modal: ModalState::Closed,
        }
    }

    /// State with the two seed records and the dialog closed
    pub fn seeded() -> Self {
        Self::new(EventStore::from_events(seed_events()))
    }

    pub fn is_editing(&self) -> bool {
        self.modal == ModalState::Editing
    }

    /// Apply one command and return the next state.
    ///
    /// Every command is accepted; there is no failure path. A date click
    /// while the dialog is open is ignored, since the overlay covers the grid.
    pub fn apply(mut self, command: WidgetCommand, ids: &mut dyn IdAllocator) -> Self {
        match command {
            WidgetCommand::DateClicked(date) => {
                if self.modal == ModalState::Closed {
                    self.draft = Event::new(ids.next_id(), String::new(), date);
                    self.modal = ModalState::Editing;
                }
            }
            WidgetCommand::ExternalDropped(payload) => {
                self.store
                    .append(Event::new(ids.next_id(), payload.title, payload.start_date));
            }
            WidgetCommand::DraftFieldChanged { field, value } => match field {
                DraftField::Title => self.draft.title = value,
                DraftField::Date => self.draft.date = value,
            },
            WidgetCommand::CommitDraft { .. } => {
                let draft = std::mem::take(&mut self.draft);
                self.store.append(draft);
                self.modal = ModalState::Closed;
            }
            WidgetCommand::CancelDraft { .. } => {
                self.draft = Event::empty();
                self.modal = ModalState::Closed;
            }
            WidgetCommand::DeleteEvent { id } => {
                self.store.delete(&id);
            }
            WidgetCommand::MoveEvent { id, date } => {
                self.store.move_to(&id, date);
            }
        }
        self
    }
}
