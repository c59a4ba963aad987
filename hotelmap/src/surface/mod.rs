mod geojson_surface;
mod log_surface;
mod view_document;

pub use geojson_surface::{GeoJsonSurface, MARKERS_FILENAME, VIEW_FILENAME};
pub use log_surface::LogSurface;
pub use view_document::ViewDocument;
