use hotelmap_core::model::{surface::MapFrame, view::CameraTarget};
use serde::{Deserialize, Serialize};

/// the non-marker part of a rendered frame: map style, selection and camera.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ViewDocument {
    pub view_mode: String,
    pub style_id: String,
    pub selected_area: Option<String>,
    /// absent when the camera stays where it is
    pub camera: Option<CameraTarget>,
    pub hotel_count: usize,
}

impl From<&MapFrame<'_>> for ViewDocument {
    fn from(frame: &MapFrame<'_>) -> Self {
        Self {
            view_mode: frame.view_mode.as_str().to_string(),
            style_id: frame.view_mode.style_id().to_string(),
            selected_area: frame.selected_area.map(String::from),
            camera: frame.camera,
            hotel_count: frame.hotels.len(),
        }
    }
}
