// Models module
// Plain data carried between the widget state and the egui layer

pub mod event;
pub mod settings;
pub mod ui;
