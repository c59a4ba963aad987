use serde::{Deserialize, Serialize};

use super::ViewMode;
use crate::model::filter::CategoryFilter;

/// a discrete user input. every action is valid in every state.
///
/// serialized with an `action` tag, e.g.
/// `{ "action": "toggle_area", "area": "Belltown" }`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BrowserAction {
    /// view mode button
    SetViewMode { mode: ViewMode },
    /// category filter button
    SetCategory { category: CategoryFilter },
    /// area button. pressing the selected area again clears the selection.
    ToggleArea { area: String },
    /// price slider. clamped into the slider's range.
    SetPriceCeiling { value: i64 },
}

impl std::fmt::Display for BrowserAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrowserAction::SetViewMode { mode } => write!(f, "set view mode {mode}"),
            BrowserAction::SetCategory { category } => write!(f, "set category {category}"),
            BrowserAction::ToggleArea { area } => write!(f, "toggle area '{area}'"),
            BrowserAction::SetPriceCeiling { value } => write!(f, "set price ceiling {value}"),
        }
    }
}
