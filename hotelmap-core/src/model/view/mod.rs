mod camera_target;
mod hotel_marker;
mod hotel_popup;
mod hotel_view;

pub use camera_target::{CameraTarget, AREA_ZOOM, CITY_CENTER, CITY_ZOOM, FLY_DURATION_MS};
pub use hotel_marker::{marker_collection, HotelMarker};
pub use hotel_popup::{HotelPopup, UNKNOWN_PRICE_LABEL};
pub use hotel_view::HotelView;
