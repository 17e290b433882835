//! Calendar widget core.
//!
//! `CalendarWidget` owns the event store, the draft and the dialog state
//! and is the only thing that changes them. The egui layer reads
//! [`WidgetState`] to draw and hands back [`WidgetCommand`]s.

pub mod command;
pub mod state;

pub use command::{CancelTrigger, CommitTrigger, DraftField, WidgetCommand};
pub use state::{ModalState, WidgetState};

use crate::models::settings::Settings;
use crate::services::event::ids::{allocator_for, IdAllocator};

/// Which engine interactions are switched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetOptions {
    pub drop_target_enabled: bool,
    pub events_editable: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            drop_target_enabled: true,
            events_editable: true,
        }
    }
}

impl From<&Settings> for WidgetOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            drop_target_enabled: settings.drop_target_enabled,
            events_editable: settings.events_editable,
        }
    }
}

#[derive(Debug)]
pub struct CalendarWidget {
    state: WidgetState,
    ids: Box<dyn IdAllocator>,
    options: WidgetOptions,
}

impl CalendarWidget {
    pub fn new(state: WidgetState, ids: Box<dyn IdAllocator>, options: WidgetOptions) -> Self {
        Self {
            state,
            ids,
            options,
        }
    }

    /// Seeded widget configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        let state = WidgetState::seeded();
        let ids = allocator_for(settings.id_strategy, state.store.list_all());
        Self::new(state, ids, WidgetOptions::from(settings))
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn is_allowed(&self, command: &WidgetCommand) -> bool {
        match command {
            WidgetCommand::ExternalDropped(_) => self.options.drop_target_enabled,
            WidgetCommand::MoveEvent { .. } => self.options.events_editable,
            _ => true,
        }
    }

    pub fn dispatch(&mut self, command: WidgetCommand) {
        if !self.is_allowed(&command) {
            log::debug!("Ignoring {} (disabled by options)", command.name());
            return;
        }

        log::debug!("Dispatching {:?}", command);
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(command, self.ids.as_mut());
    }

    pub fn dispatch_all(&mut self, commands: impl IntoIterator<Item = WidgetCommand>) {
        for command in commands {
            self.dispatch(command);
        }
    }
}
