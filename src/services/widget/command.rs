// Widget commands
//
// Every calendar callback and dialog interaction is turned into one of
// these and fed through `WidgetState::apply`.

use crate::models::event::DropPayload;

/// Draft field edited by the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Date,
}

/// What committed the draft. Both paths behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    AddButton,
    EnterKey,
}

/// What dismissed the dialog without saving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelTrigger {
    CancelButton,
    /// Click on the dimmed area outside the form
    Overlay,
    EscapeKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetCommand {
    /// A day cell was clicked; carries the cell's date string
    DateClicked(String),
    /// An external chip was released over a day cell
    ExternalDropped(DropPayload),
    DraftFieldChanged { field: DraftField, value: String },
    CommitDraft { trigger: CommitTrigger },
    CancelDraft { trigger: CancelTrigger },
    DeleteEvent { id: String },
    /// An existing event was dragged onto another day
    MoveEvent { id: String, date: String },
}

impl WidgetCommand {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::DateClicked(_) => "date_clicked",
            Self::ExternalDropped(_) => "external_dropped",
            Self::DraftFieldChanged { .. } => "draft_field_changed",
            Self::CommitDraft { .. } => "commit_draft",
            Self::CancelDraft { .. } => "cancel_draft",
            Self::DeleteEvent { .. } => "delete_event",
            Self::MoveEvent { .. } => "move_event",
        }
    }
}
