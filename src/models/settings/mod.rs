// Settings module
// Widget configuration loaded from settings.toml

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::event::ExternalEvent;
use crate::models::ui::{IdStrategy, ThemeKind, ViewType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub initial_view: ViewType,
    pub weekends_visible: bool,
    pub events_editable: bool,
    pub drop_target_enabled: bool,
    /// 0 = Sunday, 1 = Monday, ...
    pub first_day_of_week: u8,
    /// Month shown at start-up; today when unset
    pub initial_date: Option<NaiveDate>,
    pub theme: ThemeKind,
    pub id_strategy: IdStrategy,
    pub external_events: Vec<ExternalEvent>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_view: ViewType::MonthGrid,
            weekends_visible: true,
            events_editable: true,
            drop_target_enabled: true,
            first_day_of_week: 0, // Sunday
            initial_date: None,
            theme: ThemeKind::Light,
            id_strategy: IdStrategy::Sequential,
            external_events: vec![
                ExternalEvent::new("chip-standup", "Standup"),
                ExternalEvent::new("chip-review", "Review"),
                ExternalEvent::new("chip-lunch", "Team lunch"),
            ],
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be between 0 and 6, got {}",
                self.first_day_of_week
            ));
        }

        let mut seen = HashSet::new();
        for chip in &self.external_events {
            if chip.id.trim().is_empty() {
                return Err(format!("External event \"{}\" has an empty id", chip.title));
            }
            if !seen.insert(chip.id.as_str()) {
                return Err(format!("Duplicate external event id \"{}\"", chip.id));
            }
        }

        Ok(())
    }
}
