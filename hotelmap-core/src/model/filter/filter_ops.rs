//! single-purpose hotel filters. each takes any iterator of hotel references
//! and returns the passing hotels in input order, so calls can be chained in
//! any order with the same final result.

use super::{CategoryFilter, PriceCeiling};
use crate::model::{area::Area, hotel::Hotel};

/// hotels inside the named area's bounding box. an empty or unrecognized
/// name does not filter at all.
pub fn filter_by_area<'a, I>(hotels: I, area_name: &str) -> Vec<&'a Hotel>
where
    I: IntoIterator<Item = &'a Hotel>,
{
    match Area::from_name(area_name) {
        Some(area) => hotels
            .into_iter()
            .filter(|h| area.contains(h.latitude, h.longitude))
            .collect(),
        None => {
            if !area_name.is_empty() {
                log::debug!("unknown area '{area_name}', not filtering by area");
            }
            hotels.into_iter().collect()
        }
    }
}

pub fn filter_by_category<'a, I>(hotels: I, category: CategoryFilter) -> Vec<&'a Hotel>
where
    I: IntoIterator<Item = &'a Hotel>,
{
    hotels.into_iter().filter(|h| category.matches(h)).collect()
}

/// applies only the budget and luxury bands; any other category passes
/// everything through.
pub fn filter_by_price_band<'a, I>(hotels: I, category: CategoryFilter) -> Vec<&'a Hotel>
where
    I: IntoIterator<Item = &'a Hotel>,
{
    if category.is_price_band() {
        filter_by_category(hotels, category)
    } else {
        hotels.into_iter().collect()
    }
}

pub fn filter_by_rating<'a, I>(hotels: I) -> Vec<&'a Hotel>
where
    I: IntoIterator<Item = &'a Hotel>,
{
    filter_by_category(hotels, CategoryFilter::Rating)
}

pub fn filter_by_amenity_count<'a, I>(hotels: I) -> Vec<&'a Hotel>
where
    I: IntoIterator<Item = &'a Hotel>,
{
    filter_by_category(hotels, CategoryFilter::Amenities)
}

/// hotels offering at least one of the labels. no labels, no filtering.
pub fn filter_by_amenities<'a, I, S>(hotels: I, labels: &[S]) -> Vec<&'a Hotel>
where
    I: IntoIterator<Item = &'a Hotel>,
    S: AsRef<str>,
{
    if labels.is_empty() {
        return hotels.into_iter().collect();
    }
    hotels
        .into_iter()
        .filter(|h| labels.iter().any(|l| h.has_amenity(l.as_ref())))
        .collect()
}

pub fn filter_by_price_ceiling<'a, I>(hotels: I, ceiling: PriceCeiling) -> Vec<&'a Hotel>
where
    I: IntoIterator<Item = &'a Hotel>,
{
    hotels
        .into_iter()
        .filter(|h| ceiling.admits(h.price_per_night))
        .collect()
}
