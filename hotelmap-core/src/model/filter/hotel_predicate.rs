use serde::{Deserialize, Serialize};

use super::{CategoryFilter, PriceCeiling};
use crate::model::{area::Area, hotel::Hotel};

/// one conjunctive term of a [`super::HotelFilter`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HotelPredicate {
    /// hotel coordinates lie in the area's bounding box
    InArea { area: Area },
    /// hotel passes the category
    Category { category: CategoryFilter },
    /// hotel price is at or under the ceiling
    PriceCeiling { ceiling: PriceCeiling },
    /// hotel offers at least one of the labels. an empty list matches everything.
    HasAnyAmenity { labels: Vec<String> },
}

impl HotelPredicate {
    pub fn matches(&self, hotel: &Hotel) -> bool {
        match self {
            HotelPredicate::InArea { area } => area.contains(hotel.latitude, hotel.longitude),
            HotelPredicate::Category { category } => category.matches(hotel),
            HotelPredicate::PriceCeiling { ceiling } => ceiling.admits(hotel.price_per_night),
            HotelPredicate::HasAnyAmenity { labels } => {
                labels.is_empty() || labels.iter().any(|l| hotel.has_amenity(l))
            }
        }
    }
}

impl std::fmt::Display for HotelPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HotelPredicate::InArea { area } => write!(f, "area={area}"),
            HotelPredicate::Category { category } => write!(f, "category={category}"),
            HotelPredicate::PriceCeiling { ceiling } => write!(f, "price<={ceiling}"),
            HotelPredicate::HasAnyAmenity { labels } => {
                write!(f, "amenity in [{}]", labels.join(", "))
            }
        }
    }
}
