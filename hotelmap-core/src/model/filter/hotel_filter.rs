use itertools::Itertools;

use super::HotelPredicate;
use crate::model::hotel::Hotel;

/// a logical AND over [`HotelPredicate`]s. predicates are independent, so the
/// order they are listed in never changes which hotels pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HotelFilter(Vec<HotelPredicate>);

impl HotelFilter {
    pub fn new(predicates: Vec<HotelPredicate>) -> Self {
        Self(predicates)
    }

    pub fn with_predicate(mut self, predicate: HotelPredicate) -> Self {
        self.0.push(predicate);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HotelPredicate> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// true if the hotel passes every predicate. an empty filter passes everything.
    pub fn matches(&self, hotel: &Hotel) -> bool {
        self.iter().all(|p| p.matches(hotel))
    }

    /// the hotels that pass, in input order.
    pub fn apply<'a, I>(&self, hotels: I) -> Vec<&'a Hotel>
    where
        I: IntoIterator<Item = &'a Hotel>,
    {
        hotels.into_iter().filter(|h| self.matches(h)).collect()
    }
}

impl From<Vec<HotelPredicate>> for HotelFilter {
    fn from(predicates: Vec<HotelPredicate>) -> Self {
        Self(predicates)
    }
}

impl std::fmt::Display for HotelFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "(no filter)")
        } else {
            write!(f, "{}", self.0.iter().join(" AND "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        area::Area,
        filter::{CategoryFilter, PriceCeiling},
        hotel::{
            test_utils::{amenities, ids, located, mock_hotel},
            Hotel,
        },
    };

    fn fixture() -> Vec<Hotel> {
        vec![
            // capitol hill, cheap, top rated
            Hotel {
                rating: 9.1,
                price_per_night: Some(300.0),
                ..located(1, 47.612, -122.32)
            },
            // capitol hill, pricey, top rated
            Hotel {
                rating: 8.9,
                price_per_night: Some(1200.0),
                ..located(2, 47.613, -122.318)
            },
            // capitol hill, cheap, low rated
            Hotel {
                rating: 7.5,
                price_per_night: Some(250.0),
                ..located(3, 47.614, -122.321)
            },
            // outside any area, cheap, top rated
            Hotel {
                rating: 9.5,
                price_per_night: Some(200.0),
                amenities: amenities(8),
                ..mock_hotel(4)
            },
        ]
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let hotels = fixture();
        let result = HotelFilter::default().apply(&hotels);
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let hotels = fixture();
        let filter = HotelFilter::default()
            .with_predicate(HotelPredicate::InArea {
                area: Area::CapitolHill,
            })
            .with_predicate(HotelPredicate::Category {
                category: CategoryFilter::Rating,
            })
            .with_predicate(HotelPredicate::PriceCeiling {
                ceiling: PriceCeiling::new(1000),
            });
        assert_eq!(ids(&filter.apply(&hotels)), vec![1]);
    }

    #[test]
    fn test_predicate_order_does_not_matter() {
        let hotels = fixture();
        let area = HotelPredicate::InArea {
            area: Area::CapitolHill,
        };
        let category = HotelPredicate::Category {
            category: CategoryFilter::Budget,
        };
        let ceiling = HotelPredicate::PriceCeiling {
            ceiling: PriceCeiling::new(280),
        };
        let orders = [
            vec![area.clone(), category.clone(), ceiling.clone()],
            vec![ceiling.clone(), area.clone(), category.clone()],
            vec![category.clone(), ceiling.clone(), area.clone()],
        ];
        for order in orders {
            let result = HotelFilter::new(order).apply(&hotels);
            assert_eq!(ids(&result), vec![3]);
        }
    }

    #[test]
    fn test_any_amenity() {
        let hotels = fixture();
        let filter = HotelFilter::from(vec![HotelPredicate::HasAnyAmenity {
            labels: vec![String::from("Amenity 7"), String::from("Sauna")],
        }]);
        assert_eq!(ids(&filter.apply(&hotels)), vec![4]);
        let empty = HotelFilter::from(vec![HotelPredicate::HasAnyAmenity { labels: vec![] }]);
        assert_eq!(empty.apply(&hotels).len(), 4);
    }

    #[test]
    fn test_display() {
        let filter = HotelFilter::default()
            .with_predicate(HotelPredicate::InArea {
                area: Area::Belltown,
            })
            .with_predicate(HotelPredicate::PriceCeiling {
                ceiling: PriceCeiling::new(900),
            });
        assert_eq!(filter.to_string(), "area=Belltown AND price<=$900");
    }
}
