use serde::{Deserialize, Serialize};

use crate::{model::hotel::Hotel, util::price_format::format_amount};

pub const UNKNOWN_PRICE_LABEL: &str = "Price on request";

/// marker popup content, derived from hotel fields alone.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HotelPopup {
    pub name: String,
    pub address: String,
    /// e.g. `$1,450/night`
    pub price_label: String,
    /// guest rating, e.g. `9.2★`
    pub rating_label: String,
    pub room_type: String,
    pub amenity_count: usize,
    pub amenities: Vec<String>,
    /// e.g. `5★ Hotel`
    pub star_class: String,
    /// e.g. `1843 reviews`
    pub reviews_label: String,
}

impl From<&Hotel> for HotelPopup {
    fn from(hotel: &Hotel) -> Self {
        let price_label = match hotel.price_per_night {
            Some(price) => format!("${}/night", format_amount(price)),
            None => UNKNOWN_PRICE_LABEL.to_string(),
        };
        Self {
            name: hotel.name.clone(),
            address: hotel.address.clone(),
            price_label,
            rating_label: format!("{}★", hotel.rating),
            room_type: hotel.room_type.clone(),
            amenity_count: hotel.amenity_count(),
            amenities: hotel.amenities.clone(),
            star_class: format!("{}★ Hotel", hotel.star_rating),
            reviews_label: format!("{} reviews", hotel.review_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::hotel::{test_utils::mock_hotel, Hotel};

    #[test]
    fn test_popup_labels() {
        let hotel = Hotel {
            name: String::from("Four Seasons Hotel Seattle"),
            price_per_night: Some(1450.0),
            rating: 9.4,
            star_rating: 5,
            review_count: 2210,
            ..mock_hotel(1004)
        };
        let popup = HotelPopup::from(&hotel);
        assert_eq!(popup.name, "Four Seasons Hotel Seattle");
        assert_eq!(popup.price_label, "$1,450/night");
        assert_eq!(popup.rating_label, "9.4★");
        assert_eq!(popup.star_class, "5★ Hotel");
        assert_eq!(popup.reviews_label, "2210 reviews");
        assert_eq!(popup.amenity_count, 3);
        assert_eq!(popup.amenities, hotel.amenities);
    }

    #[test]
    fn test_unknown_price_label() {
        let hotel = Hotel {
            price_per_night: None,
            ..mock_hotel(1)
        };
        assert_eq!(HotelPopup::from(&hotel).price_label, UNKNOWN_PRICE_LABEL);
    }
}
