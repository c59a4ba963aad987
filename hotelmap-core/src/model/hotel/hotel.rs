use geo::Point;
use serde::{Deserialize, Serialize};

use super::HotelRecord;

/// a hotel with its price resolved to a single numeric representation.
/// every filter and aggregate in this crate reads prices through
/// [`Hotel::price_per_night`] so the same record is never compared two ways.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Hotel {
    pub hotel_id: u64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub star_rating: u8,
    /// normalized nightly price. None when the source value had no numeric
    /// reading, in which case the hotel fails every price predicate and is
    /// left out of price averages.
    pub price_per_night: Option<f64>,
    pub currency: String,
    pub rating: f64,
    pub review_count: u32,
    pub image_url: String,
    pub room_type: String,
    pub amenities: Vec<String>,
    pub free_cancellation: bool,
}

impl Hotel {
    /// hotel position with x = longitude, y = latitude.
    pub fn location(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    pub fn amenity_count(&self) -> usize {
        self.amenities.len()
    }

    pub fn has_amenity(&self, label: &str) -> bool {
        self.amenities.iter().any(|a| a == label)
    }
}

impl From<HotelRecord> for Hotel {
    fn from(record: HotelRecord) -> Self {
        let price_per_night = record.price_per_night.normalize();
        if price_per_night.is_none() {
            log::warn!(
                "hotel {} '{}' has non-numeric price {}, treating price as unknown",
                record.hotel_id,
                record.name,
                record.price_per_night
            );
        }
        Self {
            hotel_id: record.hotel_id,
            name: record.name,
            latitude: record.latitude,
            longitude: record.longitude,
            address: record.address,
            star_rating: record.star_rating,
            price_per_night,
            currency: record.currency,
            rating: record.rating,
            review_count: record.review_count,
            image_url: record.image_url,
            room_type: record.room_type,
            amenities: record.amenities,
            free_cancellation: record.free_cancellation.unwrap_or_default(),
        }
    }
}
