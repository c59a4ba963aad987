use std::collections::HashSet;
use std::path::Path;

use super::{Hotel, HotelDatasetError, HotelRecord};

const SEATTLE_HOTELS_JSON: &str = include_str!("seattle_hotels.json");

/// the fixed collection of hotels a browser session works over. built once
/// before the first render and read-only afterwards.
#[derive(Clone, Debug)]
pub struct HotelDataset {
    hotels: Box<[Hotel]>,
}

impl HotelDataset {
    /// the Seattle hotel dataset bundled with this crate.
    pub fn seattle() -> Result<Self, HotelDatasetError> {
        Self::from_json_str(SEATTLE_HOTELS_JSON, "bundled seattle_hotels.json")
    }

    /// reads a JSON array of hotel records from a file.
    pub fn from_json_file(path: &Path) -> Result<Self, HotelDatasetError> {
        let contents = std::fs::read_to_string(path).map_err(|e| HotelDatasetError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&contents, &path.to_string_lossy())
    }

    /// parses a JSON array of hotel records. `source_name` only appears in
    /// error and log messages.
    pub fn from_json_str(json: &str, source_name: &str) -> Result<Self, HotelDatasetError> {
        let records: Vec<HotelRecord> =
            serde_json::from_str(json).map_err(|e| HotelDatasetError::Parse {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
        let dataset = Self::from_records(records);
        log::info!(
            "loaded {} hotels from {source_name}",
            dataset.hotels.len()
        );
        Ok(dataset)
    }

    pub fn from_records(records: Vec<HotelRecord>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        for record in records.iter() {
            if !seen.insert(record.hotel_id) {
                log::warn!(
                    "hotel id {} appears more than once, marker clicks resolve to the first",
                    record.hotel_id
                );
            }
        }
        let hotels = records.into_iter().map(Hotel::from).collect();
        Self { hotels }
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hotel> {
        self.hotels.iter()
    }

    /// finds the first hotel with this id.
    pub fn get(&self, hotel_id: u64) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.hotel_id == hotel_id)
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

impl From<Vec<Hotel>> for HotelDataset {
    fn from(hotels: Vec<Hotel>) -> Self {
        Self {
            hotels: hotels.into_boxed_slice(),
        }
    }
}

impl<'a> IntoIterator for &'a HotelDataset {
    type Item = &'a Hotel;
    type IntoIter = std::slice::Iter<'a, Hotel>;

    fn into_iter(self) -> Self::IntoIter {
        self.hotels.iter()
    }
}
