use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PickerMode {
    #[default]
    Date,
    CustomRange,
}

impl fmt::Display for PickerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerMode::Date => write!(f, "DATE"),
            PickerMode::CustomRange => write!(f, "CUSTOM_RANGE"),
        }
    }
}

/// Immutable snapshot of the picker.
///
/// A new value replaces the old one on every accepted transition; nothing
/// mutates a snapshot after it has been handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerState {
    pub mode: PickerMode,
    /// (start, end). `end` is `None` for a single date or an open range.
    pub selected: (Option<NaiveDate>, Option<NaiveDate>),
    /// Always the first day of its month.
    pub visible_month: NaiveDate,
}

impl PickerState {
    pub fn start(&self) -> Option<NaiveDate> {
        self.selected.0
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.selected.1
    }

    pub fn with_mode(self, mode: PickerMode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_selection(self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            selected: (start, end),
            ..self
        }
    }

    pub fn with_visible_month(self, visible_month: NaiveDate) -> Self {
        Self {
            visible_month,
            ..self
        }
    }
}
