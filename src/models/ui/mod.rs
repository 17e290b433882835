// UI models module
// View selection and theme identifiers carried in settings

use serde::{Deserialize, Serialize};

/// Calendar layout shown at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewType {
    #[default]
    #[serde(rename = "month-grid")]
    MonthGrid,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MonthGrid => "month-grid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

/// How new event ids are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
}
