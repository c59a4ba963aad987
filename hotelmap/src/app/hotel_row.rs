use hotelmap_core::model::{area::Area, hotel::Hotel};
use serde::{Deserialize, Serialize};

/// one flat CSV row per hotel. an unknown price is written as an empty cell.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HotelRow {
    pub hotel_id: u64,
    pub name: String,
    /// first named area whose bounds contain the hotel, if any
    pub area: Option<String>,
    pub price_per_night: Option<f64>,
    pub currency: String,
    pub rating: f64,
    pub star_rating: u8,
    pub review_count: u32,
    pub room_type: String,
    pub amenity_count: usize,
    pub free_cancellation: bool,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Hotel> for HotelRow {
    fn from(hotel: &Hotel) -> Self {
        let area = Area::ALL
            .iter()
            .find(|a| a.contains(hotel.latitude, hotel.longitude))
            .map(|a| a.name().to_string());
        Self {
            hotel_id: hotel.hotel_id,
            name: hotel.name.clone(),
            area,
            price_per_night: hotel.price_per_night,
            currency: hotel.currency.clone(),
            rating: hotel.rating,
            star_rating: hotel.star_rating,
            review_count: hotel.review_count,
            room_type: hotel.room_type.clone(),
            amenity_count: hotel.amenity_count(),
            free_cancellation: hotel.free_cancellation,
            latitude: hotel.latitude,
            longitude: hotel.longitude,
        }
    }
}
