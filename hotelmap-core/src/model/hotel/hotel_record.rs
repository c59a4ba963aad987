use serde::{Deserialize, Serialize};

use super::RawPrice;

/// a hotel row exactly as it appears in a dataset file. the only field that
/// needs cleaning before use is `price_per_night`, see [`super::Hotel`].
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HotelRecord {
    pub hotel_id: u64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    /// hotel class, 1-5
    pub star_rating: u8,
    pub price_per_night: RawPrice,
    pub currency: String,
    /// guest rating on a 0-10 scale
    pub rating: f64,
    pub review_count: u32,
    pub image_url: String,
    pub room_type: String,
    pub amenities: Vec<String>,
    /// absent is the same as false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_cancellation: Option<bool>,
}
