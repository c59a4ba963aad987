mod category_filter;
mod hotel_filter;
mod hotel_predicate;
mod price_ceiling;

pub mod filter_ops;

pub use category_filter::{
    CategoryFilter, AMENITY_COUNT_THRESHOLD, BUDGET_MAX_PRICE, LUXURY_MIN_PRICE,
    TOP_RATED_MIN_RATING,
};
pub use hotel_filter::HotelFilter;
pub use hotel_predicate::HotelPredicate;
pub use price_ceiling::PriceCeiling;
