use std::path::Path;

use config::{Config, File};
use hotelmap_core::model::{hotel::HotelDataset, state::BrowserState};
use serde::{Deserialize, Serialize};

use super::HotelMapAppError;

/// TOML configuration for a hotelmap session.
///
/// ```toml
/// dataset_file = "data/seattle_hotels.json"
/// output_directory = "out"
///
/// [initial_state]
/// view_mode = "satellite"
/// category = "budget"
/// max_price = 900
/// selected_area = "Belltown"
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HotelMapConfig {
    /// hotel JSON array. if not provided, the bundled Seattle dataset is used.
    #[serde(default)]
    pub dataset_file: Option<String>,
    /// starting selections. any missing key takes its default.
    #[serde(default)]
    pub initial_state: BrowserState,
    /// where file-writing map surfaces put their output
    #[serde(default)]
    pub output_directory: Option<String>,
}

impl HotelMapConfig {
    pub fn from_file(path: &Path) -> Result<Self, HotelMapAppError> {
        let config = Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| HotelMapAppError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        config
            .try_deserialize::<HotelMapConfig>()
            .map_err(|e| HotelMapAppError::Config {
                path: path.to_path_buf(),
                message: format!("invalid configuration: {e}"),
            })
    }

    pub fn load_dataset(&self) -> Result<HotelDataset, HotelMapAppError> {
        let dataset = match &self.dataset_file {
            Some(file) => HotelDataset::from_json_file(Path::new(file))?,
            None => HotelDataset::seattle()?,
        };
        Ok(dataset)
    }
}
