mod app_config;
mod app_error;
mod filter_args;
mod hotel_row;
mod hotelmap_app;
pub mod list;
pub mod markers;
pub mod replay;

pub use app_config::HotelMapConfig;
pub use app_error::HotelMapAppError;
pub use filter_args::{FilterArgs, Session};
pub use hotel_row::HotelRow;
pub use hotelmap_app::{HotelMapApp, HotelMapOperation};
pub use replay::ReplayStep;
