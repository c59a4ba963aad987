mod dataset_error;
#[allow(clippy::module_inception)]
mod hotel;
mod hotel_dataset;
mod hotel_record;
mod raw_price;

#[cfg(test)]
pub mod test_utils;

pub use dataset_error::HotelDatasetError;
pub use hotel::Hotel;
pub use hotel_dataset::HotelDataset;
pub use hotel_record::HotelRecord;
pub use raw_price::{parse_leading_integer, RawPrice};
