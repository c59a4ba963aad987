use serde::{Deserialize, Serialize};

use super::MapSurfaceError;
use crate::model::{
    hotel::Hotel,
    state::ViewMode,
    view::{CameraTarget, HotelMarker},
};

/// everything a rendering surface needs to draw one state of the browser.
#[derive(Clone, Debug)]
pub struct MapFrame<'a> {
    pub view_mode: ViewMode,
    pub hotels: &'a [&'a Hotel],
    pub selected_area: Option<&'a str>,
    /// None when the camera should stay where it is
    pub camera: Option<CameraTarget>,
}

impl MapFrame<'_> {
    pub fn markers(&self) -> Vec<HotelMarker> {
        self.hotels.iter().map(|h| HotelMarker::from(*h)).collect()
    }
}

/// the map rendering collaborator. it owns its own map handle, tiles and
/// styles; the browser only hands it frames and receives [`SurfaceEvent`]s
/// back through [`super::HotelBrowser::handle_event`].
pub trait MapSurface {
    /// redraw for a new frame: switch style if the view mode changed, replace
    /// all markers, and move the camera if a target is given.
    fn render(&mut self, frame: &MapFrame<'_>) -> Result<(), MapSurfaceError>;
}

/// notifications a surface reports back to the browser.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SurfaceEvent {
    /// the surface finished loading and can show markers
    Loaded,
    /// the user activated the marker for this hotel
    MarkerActivated { hotel_id: u64 },
}

impl<S: MapSurface + ?Sized> MapSurface for Box<S> {
    fn render(&mut self, frame: &MapFrame<'_>) -> Result<(), MapSurfaceError> {
        (**self).render(frame)
    }
}
