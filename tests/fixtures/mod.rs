// Test fixtures - reusable test data
// Provides consistent widgets and commands across all test files
#![allow(dead_code)]

use calendar_widget::models::event::{DropPayload, Event};
use calendar_widget::services::event::ids::SequentialIds;
use calendar_widget::services::widget::{
    CalendarWidget, CancelTrigger, CommitTrigger, DraftField, WidgetCommand, WidgetOptions,
    WidgetState,
};

/// Seeded widget whose next allocated id is "3"
pub fn seeded_widget() -> CalendarWidget {
    CalendarWidget::new(
        WidgetState::seeded(),
        Box::new(SequentialIds::starting_at(3)),
        WidgetOptions::default(),
    )
}

pub fn seed_store() -> Vec<Event> {
    vec![
        Event::new("1", "event 1", "2019-04-01"),
        Event::new("2", "event 2", "2019-04-02"),
    ]
}

/// Sample commands for testing
pub mod commands {
    use super::*;

    pub fn click(date: &str) -> WidgetCommand {
        WidgetCommand::DateClicked(date.to_string())
    }

    pub fn type_title(value: &str) -> WidgetCommand {
        WidgetCommand::DraftFieldChanged {
            field: DraftField::Title,
            value: value.to_string(),
        }
    }

    pub fn type_date(value: &str) -> WidgetCommand {
        WidgetCommand::DraftFieldChanged {
            field: DraftField::Date,
            value: value.to_string(),
        }
    }

    pub fn add_button() -> WidgetCommand {
        WidgetCommand::CommitDraft {
            trigger: CommitTrigger::AddButton,
        }
    }

    pub fn enter_key() -> WidgetCommand {
        WidgetCommand::CommitDraft {
            trigger: CommitTrigger::EnterKey,
        }
    }

    pub fn cancel(trigger: CancelTrigger) -> WidgetCommand {
        WidgetCommand::CancelDraft { trigger }
    }

    pub fn drop_chip(title: &str, date: &str) -> WidgetCommand {
        WidgetCommand::ExternalDropped(DropPayload::new(title, date))
    }

    pub fn delete(id: &str) -> WidgetCommand {
        WidgetCommand::DeleteEvent { id: id.to_string() }
    }
}
