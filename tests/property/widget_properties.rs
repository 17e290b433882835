// Property-based tests for the widget reducer
// Random command sequences must keep the store invariants

#[path = "../fixtures/mod.rs"]
mod fixtures;

use calendar_widget::models::event::Event;
use calendar_widget::services::event::ids::{IdAllocator, SequentialIds};
use calendar_widget::services::widget::{ModalState, WidgetState};
use fixtures::commands::*;
use fixtures::seeded_widget;
use proptest::prelude::*;
use std::collections::HashSet;

fn date_strategy() -> impl Strategy<Value = String> {
    (2019..2026i32, 1..=12u32, 1..=28u32)
        .prop_map(|(year, month, day)| format!("{year:04}-{month:02}-{day:02}"))
}

proptest! {
    /// Property: every commit grows the store by one and appends the draft verbatim
    #[test]
    fn prop_commit_appends_exact_draft(
        drafts in prop::collection::vec(("[a-zA-Z ]{0,12}", date_strategy()), 1..10),
    ) {
        let mut widget = seeded_widget();

        for (title, date) in drafts {
            let before = widget.state().store.len();
            widget.dispatch(click(&date));
            widget.dispatch(type_title(&title));
            let draft = widget.state().draft.clone();

            widget.dispatch(add_button());

            prop_assert_eq!(widget.state().store.len(), before + 1);
            prop_assert_eq!(widget.state().store.list_all().last(), Some(&draft));
            prop_assert_eq!(widget.state().modal, ModalState::Closed);
            prop_assert!(widget.state().draft.is_empty());
        }
    }

    /// Property: deleting an existing id removes one record and keeps the rest in order
    #[test]
    fn prop_delete_keeps_relative_order(
        titles in prop::collection::vec("[a-z]{1,8}", 1..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut widget = seeded_widget();
        for title in &titles {
            widget.dispatch(drop_chip(title, "2024-05-12"));
        }

        let before: Vec<Event> = widget.state().store.list_all().to_vec();
        let target = before[pick.index(before.len())].id.clone();

        widget.dispatch(delete(&target));

        let expected: Vec<Event> = before.into_iter().filter(|e| e.id != target).collect();
        prop_assert_eq!(widget.state().store.list_all(), expected.as_slice());
    }

    /// Property: deleting an unknown id never changes the state
    #[test]
    fn prop_delete_unknown_is_noop(id in "[a-z]{4,10}") {
        let mut widget = seeded_widget();
        let before = widget.state().clone();

        widget.dispatch(delete(&id));

        prop_assert_eq!(widget.state(), &before);
    }

    /// Property: allocated ids are unique across drops and drafts
    #[test]
    fn prop_allocated_ids_are_unique(dates in prop::collection::vec(date_strategy(), 1..20)) {
        let mut widget = seeded_widget();
        for (index, date) in dates.iter().enumerate() {
            if index % 2 == 0 {
                widget.dispatch(drop_chip("chip", date));
            } else {
                widget.dispatch(click(date));
                widget.dispatch(enter_key());
            }
        }

        let ids: HashSet<&str> = widget.state().store.list_all().iter().map(|e| e.id.as_str()).collect();
        prop_assert_eq!(ids.len(), widget.state().store.len());
    }

    /// Property: sequential ids are strictly increasing
    #[test]
    fn prop_sequential_ids_increase(start in 0..1_000_000u64, count in 1..50usize) {
        let mut ids = SequentialIds::starting_at(start);
        let generated: Vec<u64> = (0..count).map(|_| ids.next_id().parse().unwrap()).collect();
        prop_assert!(generated.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_cancel_from_fresh_state_is_harmless() {
        let base = WidgetState::seeded();
        let mut widget = seeded_widget();
        widget.dispatch(cancel(calendar_widget::services::widget::CancelTrigger::Overlay));
        assert_eq!(widget.state(), &base);
    }
}
