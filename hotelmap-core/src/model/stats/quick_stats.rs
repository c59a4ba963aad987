use serde::Serialize;

use super::{StatValue, NOT_APPLICABLE};
use crate::model::hotel::Hotel;

/// the summary block shown beside the map for the visible hotels.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct QuickStats {
    /// number of hotels
    pub total_hotels: usize,
    /// mean nightly price rounded to the nearest integer, over hotels with a known price
    pub avg_price: StatValue<i64>,
    /// highest guest rating
    pub top_rated: StatValue<f64>,
}

impl QuickStats {
    pub fn from_hotels<'a, I>(hotels: I) -> Self
    where
        I: IntoIterator<Item = &'a Hotel>,
    {
        let mut acc = QuickStatsAcc::default();
        for hotel in hotels {
            acc.add(hotel);
        }
        acc.finish()
    }

    /// average price for display, e.g. `$600` or `N/A`
    pub fn avg_price_label(&self) -> String {
        match self.avg_price {
            StatValue::Value(p) => format!("${p}"),
            StatValue::NotApplicable => NOT_APPLICABLE.to_string(),
        }
    }

    /// top guest rating to one decimal place, e.g. `9.4`, or `N/A`.
    /// ties round up, so 8.25 reads `8.3`.
    pub fn top_rated_label(&self) -> String {
        match self.top_rated {
            StatValue::Value(r) => format!("{:.1}", (r * 10.0).round() / 10.0),
            StatValue::NotApplicable => NOT_APPLICABLE.to_string(),
        }
    }
}

impl<'a> FromIterator<&'a Hotel> for QuickStats {
    fn from_iter<I: IntoIterator<Item = &'a Hotel>>(iter: I) -> Self {
        QuickStats::from_hotels(iter)
    }
}

impl std::fmt::Display for QuickStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let top_rated = match self.top_rated {
            StatValue::Value(_) => format!("{}★", self.top_rated_label()),
            StatValue::NotApplicable => NOT_APPLICABLE.to_string(),
        };
        writeln!(f, "Total Hotels  {}", self.total_hotels)?;
        writeln!(f, "Avg. Price    {}", self.avg_price_label())?;
        write!(f, "Top Rated     {top_rated}")
    }
}

#[derive(Default)]
struct QuickStatsAcc {
    count: usize,
    priced_count: usize,
    price_sum: f64,
    top_rating: Option<f64>,
}

impl QuickStatsAcc {
    fn add(&mut self, hotel: &Hotel) {
        self.count += 1;
        if let Some(price) = hotel.price_per_night {
            self.priced_count += 1;
            self.price_sum += price;
        }
        self.top_rating = Some(match self.top_rating {
            Some(top) => top.max(hotel.rating),
            None => hotel.rating,
        });
    }

    fn finish(self) -> QuickStats {
        let avg_price = if self.priced_count == 0 {
            StatValue::NotApplicable
        } else {
            let mean = self.price_sum / self.priced_count as f64;
            StatValue::Value(mean.round() as i64)
        };
        QuickStats {
            total_hotels: self.count,
            avg_price,
            top_rated: self.top_rating.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::hotel::{
        test_utils::{mock_hotel, priced},
        Hotel,
    };

    #[test]
    fn test_empty_is_not_applicable() {
        let empty: Vec<Hotel> = vec![];
        let stats = QuickStats::from_hotels(&empty);
        assert_eq!(stats.total_hotels, 0);
        assert_eq!(stats.avg_price, StatValue::NotApplicable);
        assert_eq!(stats.top_rated, StatValue::NotApplicable);
        assert_eq!(stats.avg_price_label(), "N/A");
        assert_eq!(stats.top_rated_label(), "N/A");
    }

    #[test]
    fn test_average_of_two() {
        let hotels = vec![priced(1, Some(500.0)), priced(2, Some(700.0))];
        let stats = QuickStats::from_hotels(&hotels);
        assert_eq!(stats.total_hotels, 2);
        assert_eq!(stats.avg_price, StatValue::Value(600));
        assert_eq!(stats.avg_price_label(), "$600");
    }

    #[test]
    fn test_average_rounds_to_nearest() {
        let hotels = vec![
            priced(1, Some(100.0)),
            priced(2, Some(100.0)),
            priced(3, Some(101.0)),
        ];
        // 100.33 -> 100
        assert_eq!(QuickStats::from_hotels(&hotels).avg_price, StatValue::Value(100));
        let hotels = vec![priced(1, Some(100.0)), priced(2, Some(101.0))];
        // 100.5 -> 101
        assert_eq!(QuickStats::from_hotels(&hotels).avg_price, StatValue::Value(101));
    }

    #[test]
    fn test_top_rated_formats_one_decimal() {
        let hotels = vec![
            Hotel {
                rating: 8.25,
                ..mock_hotel(1)
            },
            Hotel {
                rating: 9.0,
                ..mock_hotel(2)
            },
        ];
        let stats: QuickStats = hotels.iter().collect();
        assert_eq!(stats.top_rated, StatValue::Value(9.0));
        assert_eq!(stats.top_rated_label(), "9.0");
    }

    #[test]
    fn test_top_rated_ties_round_up() {
        for (rating, label) in [(8.25, "8.3"), (9.25, "9.3"), (7.25, "7.3"), (8.75, "8.8")] {
            let hotels = vec![
                Hotel {
                    rating,
                    ..mock_hotel(1)
                },
                Hotel {
                    rating: 6.0,
                    ..mock_hotel(2)
                },
            ];
            let stats = QuickStats::from_hotels(&hotels);
            assert_eq!(stats.top_rated, StatValue::Value(rating));
            assert_eq!(stats.top_rated_label(), label, "rating {rating}");
        }
    }

    #[test]
    fn test_unknown_prices_are_skipped_in_average() {
        let hotels = vec![priced(1, Some(400.0)), priced(2, None)];
        let stats = QuickStats::from_hotels(&hotels);
        assert_eq!(stats.total_hotels, 2);
        assert_eq!(stats.avg_price, StatValue::Value(400));

        let only_unknown = vec![priced(1, None)];
        let stats = QuickStats::from_hotels(&only_unknown);
        assert_eq!(stats.avg_price, StatValue::NotApplicable);
        assert!(stats.top_rated.is_applicable());
    }

    #[test]
    fn test_serialized_sentinel_differs_from_zero() {
        let empty: Vec<Hotel> = vec![];
        let json = serde_json::to_value(QuickStats::from_hotels(&empty)).unwrap();
        assert_eq!(json["total_hotels"], 0);
        assert_eq!(json["avg_price"], "N/A");
        assert_eq!(json["top_rated"], "N/A");

        let zero = vec![priced(1, Some(0.0))];
        let json = serde_json::to_value(QuickStats::from_hotels(&zero)).unwrap();
        assert_eq!(json["avg_price"], 0);
    }

    #[test]
    fn test_display() {
        let hotels = vec![priced(1, Some(500.0)), priced(2, Some(700.0))];
        let text = QuickStats::from_hotels(&hotels).to_string();
        assert_eq!(
            text,
            "Total Hotels  2\nAvg. Price    $600\nTop Rated     8.0★"
        );
    }
}
