use super::Hotel;

/// a hotel positioned outside every predefined area, priced at 500 with a
/// guest rating of 8.0, three amenities and no free cancellation. tests
/// override the fields they care about.
pub fn mock_hotel(hotel_id: u64) -> Hotel {
    Hotel {
        hotel_id,
        name: format!("Hotel {hotel_id}"),
        latitude: 47.6,
        longitude: -122.3,
        address: format!("{hotel_id} Test Ave, Seattle, WA 98101"),
        star_rating: 3,
        price_per_night: Some(500.0),
        currency: String::from("USD"),
        rating: 8.0,
        review_count: 100,
        image_url: format!("https://images.hotelmap.dev/{hotel_id}.jpg"),
        room_type: String::from("Queen Room"),
        amenities: amenities(3),
        free_cancellation: false,
    }
}

/// `n` distinct amenity labels
pub fn amenities(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Amenity {i}")).collect()
}

pub fn priced(hotel_id: u64, price: Option<f64>) -> Hotel {
    Hotel {
        price_per_night: price,
        ..mock_hotel(hotel_id)
    }
}

pub fn located(hotel_id: u64, latitude: f64, longitude: f64) -> Hotel {
    Hotel {
        latitude,
        longitude,
        ..mock_hotel(hotel_id)
    }
}

pub fn ids(hotels: &[&Hotel]) -> Vec<u64> {
    hotels.iter().map(|h| h.hotel_id).collect()
}
