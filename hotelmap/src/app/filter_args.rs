use std::path::Path;

use clap::Args;
use hotelmap_core::model::{
    filter::{CategoryFilter, HotelFilter, HotelPredicate},
    hotel::HotelDataset,
    state::{BrowserState, ViewMode},
};
use serde::{Deserialize, Serialize};

use super::{HotelMapAppError, HotelMapConfig};

/// selection flags shared by every subcommand. flags override values read
/// from the configuration file.
#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterArgs {
    /// TOML configuration file with dataset location and initial selections
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// hotel dataset JSON file. if not provided, use the configured file or
    /// the bundled Seattle dataset.
    #[arg(short, long)]
    pub dataset_file: Option<String>,

    /// area name, e.g. "Capitol Hill"
    #[arg(short, long)]
    pub area: Option<String>,

    /// category filter
    #[arg(long, value_enum)]
    pub category: Option<CategoryFilter>,

    /// maximum nightly price, clamped to [0, 2000]
    #[arg(short, long, allow_hyphen_values(true))]
    pub max_price: Option<i64>,

    /// map view mode
    #[arg(long, value_enum)]
    pub view_mode: Option<ViewMode>,

    /// keep hotels with any of these amenity labels. may be repeated.
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,
}

/// the dataset and starting state resolved from configuration and flags.
pub struct Session {
    pub config: HotelMapConfig,
    pub dataset: HotelDataset,
    pub state: BrowserState,
    pub amenities: Vec<String>,
}

impl Session {
    /// the state's filter plus the amenity label filter, if any labels were given.
    pub fn filter(&self) -> HotelFilter {
        let filter = self.state.filter();
        if self.amenities.is_empty() {
            filter
        } else {
            filter.with_predicate(HotelPredicate::HasAnyAmenity {
                labels: self.amenities.clone(),
            })
        }
    }
}

impl FilterArgs {
    pub fn load_session(&self) -> Result<Session, HotelMapAppError> {
        let mut config = match &self.config_file {
            Some(file) => HotelMapConfig::from_file(Path::new(file))?,
            None => HotelMapConfig::default(),
        };
        if let Some(file) = &self.dataset_file {
            config.dataset_file = Some(file.clone());
        }
        let dataset = config.load_dataset()?;
        let state = self.apply_overrides(config.initial_state.clone());
        log::info!(
            "starting from view {}, area {}, category {}, max price {}",
            state.view_mode,
            state.selected_area.as_deref().unwrap_or("(none)"),
            state.category,
            state.max_price
        );
        Ok(Session {
            config,
            dataset,
            state,
            amenities: self.amenities.clone(),
        })
    }

    /// flags are applied as direct sets, not toggles, so `--area` always
    /// selects the named area.
    pub fn apply_overrides(&self, state: BrowserState) -> BrowserState {
        let mut state = state;
        if let Some(mode) = self.view_mode {
            state = state.set_view_mode(mode);
        }
        if let Some(area) = &self.area {
            state.selected_area = Some(area.clone()).filter(|a| !a.is_empty());
        }
        if let Some(category) = self.category {
            state = state.set_category(category);
        }
        if let Some(max_price) = self.max_price {
            state = state.set_price_ceiling(max_price);
        }
        state
    }
}
