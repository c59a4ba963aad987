use serde::{Deserialize, Serialize};

use super::{BrowserAction, ViewMode};
use crate::model::{
    area::Area,
    filter::{CategoryFilter, HotelFilter, HotelPredicate, PriceCeiling},
};

/// everything the user has selected. the visible hotels and stats are a
/// pure function of this state and the dataset, see [`crate::model::view::HotelView`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BrowserState {
    pub view_mode: ViewMode,
    /// area name as pressed. names outside the area table are kept but do
    /// not filter or move the camera.
    pub selected_area: Option<String>,
    pub category: CategoryFilter,
    pub max_price: PriceCeiling,
}

impl BrowserState {
    /// the state after one user action. no action is ever rejected.
    pub fn apply(&self, action: &BrowserAction) -> BrowserState {
        let next = self.clone();
        match action {
            BrowserAction::SetViewMode { mode } => next.set_view_mode(*mode),
            BrowserAction::SetCategory { category } => next.set_category(*category),
            BrowserAction::ToggleArea { area } => next.toggle_area(area),
            BrowserAction::SetPriceCeiling { value } => next.set_price_ceiling(*value),
        }
    }

    pub fn set_view_mode(self, view_mode: ViewMode) -> Self {
        log::info!("switched to {view_mode} view");
        Self { view_mode, ..self }
    }

    pub fn set_category(self, category: CategoryFilter) -> Self {
        log::info!("applied {category} filter");
        Self { category, ..self }
    }

    /// selects the area, or clears the selection if it is already selected.
    /// an empty name always clears.
    pub fn toggle_area(self, area: &str) -> Self {
        let selected_area = match self.selected_area.as_deref() {
            _ if area.is_empty() => None,
            Some(current) if current == area => {
                log::info!("deselected {area}");
                None
            }
            _ => {
                log::info!("navigating to {area}");
                Some(area.to_string())
            }
        };
        Self {
            selected_area,
            ..self
        }
    }

    pub fn set_price_ceiling(self, value: i64) -> Self {
        let max_price = PriceCeiling::new(value);
        log::info!("set max price to {max_price}");
        Self { max_price, ..self }
    }

    /// the selected area if its name is in the area table
    pub fn area(&self) -> Option<Area> {
        self.selected_area.as_deref().and_then(Area::from_name)
    }

    /// the conjunction of the area, category and price ceiling selections.
    /// the price ceiling is always part of the filter.
    pub fn filter(&self) -> HotelFilter {
        let mut predicates = Vec::with_capacity(3);
        match (self.selected_area.as_deref(), self.area()) {
            (_, Some(area)) => predicates.push(HotelPredicate::InArea { area }),
            (Some(name), None) if !name.is_empty() => {
                log::debug!("selected area '{name}' is not a known area, not filtering by area")
            }
            _ => {}
        }
        if self.category != CategoryFilter::All {
            predicates.push(HotelPredicate::Category {
                category: self.category,
            });
        }
        predicates.push(HotelPredicate::PriceCeiling {
            ceiling: self.max_price,
        });
        HotelFilter::new(predicates)
    }
}
