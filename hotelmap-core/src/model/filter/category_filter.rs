use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::model::hotel::Hotel;

/// guest rating at or above which a hotel counts as top rated
pub const TOP_RATED_MIN_RATING: f64 = 8.5;
/// a hotel must have strictly more amenities than this to match [`CategoryFilter::Amenities`]
pub const AMENITY_COUNT_THRESHOLD: usize = 5;
/// highest nightly price in the budget band
pub const BUDGET_MAX_PRICE: f64 = 800.0;
/// lowest nightly price in the luxury band
pub const LUXURY_MIN_PRICE: f64 = 1000.0;

/// the single active category button. exactly one is selected at a time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// no category restriction
    #[default]
    #[serde(alias = "none")]
    #[value(alias = "none")]
    All,
    /// guest rating of 8.5 or more
    Rating,
    /// six or more amenities
    Amenities,
    /// price of 800 or less
    Budget,
    /// price of 1000 or more
    Luxury,
    /// free cancellation offered
    Cancellation,
}

impl CategoryFilter {
    /// whether a hotel passes this category. hotels with an unknown price
    /// never pass the budget or luxury bands.
    pub fn matches(&self, hotel: &Hotel) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Rating => hotel.rating >= TOP_RATED_MIN_RATING,
            CategoryFilter::Amenities => hotel.amenity_count() > AMENITY_COUNT_THRESHOLD,
            CategoryFilter::Budget => hotel
                .price_per_night
                .map(|p| p <= BUDGET_MAX_PRICE)
                .unwrap_or_default(),
            CategoryFilter::Luxury => hotel
                .price_per_night
                .map(|p| p >= LUXURY_MIN_PRICE)
                .unwrap_or_default(),
            CategoryFilter::Cancellation => hotel.free_cancellation,
        }
    }

    /// true for the two categories defined by price alone
    pub fn is_price_band(&self) -> bool {
        matches!(self, CategoryFilter::Budget | CategoryFilter::Luxury)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Rating => "rating",
            CategoryFilter::Amenities => "amenities",
            CategoryFilter::Budget => "budget",
            CategoryFilter::Luxury => "luxury",
            CategoryFilter::Cancellation => "cancellation",
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" | "none" => Ok(CategoryFilter::All),
            "rating" => Ok(CategoryFilter::Rating),
            "amenities" => Ok(CategoryFilter::Amenities),
            "budget" => Ok(CategoryFilter::Budget),
            "luxury" => Ok(CategoryFilter::Luxury),
            "cancellation" => Ok(CategoryFilter::Cancellation),
            _ => Err(format!("unknown category filter '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::hotel::test_utils::{amenities, mock_hotel, priced};
    use crate::model::hotel::Hotel;

    #[test]
    fn test_rating_boundary_is_inclusive() {
        let at = Hotel {
            rating: 8.5,
            ..mock_hotel(1)
        };
        let below = Hotel {
            rating: 8.4,
            ..mock_hotel(2)
        };
        assert!(CategoryFilter::Rating.matches(&at));
        assert!(!CategoryFilter::Rating.matches(&below));
    }

    #[test]
    fn test_amenities_is_strictly_more_than_five() {
        let five = Hotel {
            amenities: amenities(5),
            ..mock_hotel(1)
        };
        let six = Hotel {
            amenities: amenities(6),
            ..mock_hotel(2)
        };
        assert!(!CategoryFilter::Amenities.matches(&five));
        assert!(CategoryFilter::Amenities.matches(&six));
    }

    #[test]
    fn test_price_bands() {
        assert!(CategoryFilter::Budget.matches(&priced(1, Some(800.0))));
        assert!(!CategoryFilter::Budget.matches(&priced(2, Some(800.5))));
        assert!(CategoryFilter::Luxury.matches(&priced(3, Some(1000.0))));
        assert!(!CategoryFilter::Luxury.matches(&priced(4, Some(999.0))));
        let in_between = priced(5, Some(900.0));
        assert!(!CategoryFilter::Budget.matches(&in_between));
        assert!(!CategoryFilter::Luxury.matches(&in_between));
    }

    #[test]
    fn test_unknown_price_fails_price_bands() {
        let unknown = priced(1, None);
        assert!(!CategoryFilter::Budget.matches(&unknown));
        assert!(!CategoryFilter::Luxury.matches(&unknown));
        assert!(CategoryFilter::All.matches(&unknown));
    }

    #[test]
    fn test_cancellation() {
        let free = Hotel {
            free_cancellation: true,
            ..mock_hotel(1)
        };
        assert!(CategoryFilter::Cancellation.matches(&free));
        assert!(!CategoryFilter::Cancellation.matches(&mock_hotel(2)));
    }

    #[test]
    fn test_parse_accepts_none_as_all() {
        assert_eq!("none".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("luxury".parse::<CategoryFilter>(), Ok(CategoryFilter::Luxury));
        assert!("cheap".parse::<CategoryFilter>().is_err());
        let from_json: CategoryFilter = serde_json::from_str(r#""none""#).unwrap();
        assert_eq!(from_json, CategoryFilter::All);
    }
}
