use geo::Point;
use serde::{Deserialize, Serialize};

use crate::model::{area::Area, state::BrowserState};

/// city center used when no area is selected, x = longitude, y = latitude
pub const CITY_CENTER: (f64, f64) = (-122.3321, 47.6062);
pub const CITY_ZOOM: f64 = 12.0;
pub const AREA_ZOOM: f64 = 16.0;
pub const FLY_DURATION_MS: u64 = 2000;

/// where the map camera should fly to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CameraTarget {
    pub center: Point<f64>,
    pub zoom: f64,
    /// degrees
    pub pitch: f64,
    pub duration_ms: u64,
}

impl CameraTarget {
    /// camera for the current selection: the area center when an area is
    /// selected, otherwise the whole city. returns None when the selected
    /// name is not a known area, in which case the camera stays put.
    pub fn for_state(state: &BrowserState) -> Option<CameraTarget> {
        let pitch = state.view_mode.pitch();
        match (state.selected_area.as_deref(), state.area()) {
            (_, Some(area)) => Some(Self::for_area(area, pitch)),
            (None, None) => Some(Self::city(pitch)),
            (Some(_), None) => None,
        }
    }

    pub fn for_area(area: Area, pitch: f64) -> CameraTarget {
        CameraTarget {
            center: area.center(),
            zoom: AREA_ZOOM,
            pitch,
            duration_ms: FLY_DURATION_MS,
        }
    }

    pub fn city(pitch: f64) -> CameraTarget {
        let (lng, lat) = CITY_CENTER;
        CameraTarget {
            center: Point::new(lng, lat),
            zoom: CITY_ZOOM,
            pitch,
            duration_ms: FLY_DURATION_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::state::ViewMode;

    #[test]
    fn test_default_state_shows_city() {
        let camera = CameraTarget::for_state(&BrowserState::default()).unwrap();
        assert_eq!(camera.center, Point::new(-122.3321, 47.6062));
        assert_eq!(camera.zoom, 12.0);
        assert_eq!(camera.pitch, 60.0);
        assert_eq!(camera.duration_ms, 2000);
    }

    #[test]
    fn test_area_selection_flies_to_area_center() {
        let state = BrowserState::default()
            .toggle_area("South Lake Union")
            .set_view_mode(ViewMode::Satellite);
        let camera = CameraTarget::for_state(&state).unwrap();
        assert_eq!(camera.center, Point::new(-122.33, 47.62));
        assert_eq!(camera.zoom, 16.0);
        assert_eq!(camera.pitch, 0.0);
    }

    #[test]
    fn test_second_press_returns_to_city() {
        let state = BrowserState::default()
            .toggle_area("Capitol Hill")
            .toggle_area("Capitol Hill");
        let camera = CameraTarget::for_state(&state).unwrap();
        assert_eq!(camera.zoom, CITY_ZOOM);
    }

    #[test]
    fn test_unknown_area_keeps_camera() {
        let state = BrowserState::default().toggle_area("Fremont");
        assert_eq!(CameraTarget::for_state(&state), None);
    }
}
