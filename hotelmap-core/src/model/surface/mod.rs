mod error;
mod hotel_browser;
mod map_surface;

pub use error::MapSurfaceError;
pub use hotel_browser::HotelBrowser;
pub use map_surface::{MapFrame, MapSurface, SurfaceEvent};
