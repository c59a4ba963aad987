use std::path::Path;

use hotelmap_core::model::{
    surface::{MapFrame, MapSurface},
    view::CameraTarget,
};

use super::{HotelMapAppError, Session};
use crate::surface::GeoJsonSurface;

/// renders the session's visible hotels once to a [`GeoJsonSurface`] in
/// `output_directory`.
pub fn run(session: &Session, output_directory: &Path) -> Result<(), HotelMapAppError> {
    let filter = session.filter();
    let hotels = filter.apply(&session.dataset);
    log::info!(
        "{} of {} hotels pass {filter}",
        hotels.len(),
        session.dataset.len()
    );
    let frame = MapFrame {
        view_mode: session.state.view_mode,
        hotels: &hotels,
        selected_area: session.state.selected_area.as_deref(),
        camera: CameraTarget::for_state(&session.state),
    };
    let mut surface = GeoJsonSurface::new(output_directory);
    surface.render(&frame)?;
    log::info!("map output written to {}", output_directory.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::FilterArgs,
        surface::{ViewDocument, MARKERS_FILENAME, VIEW_FILENAME},
    };
    use geojson::FeatureCollection;

    #[test]
    fn test_amenity_labels_narrow_markers() {
        let args = FilterArgs {
            amenities: vec![String::from("Garden"), String::from("Golf Simulator")],
            ..Default::default()
        };
        let session = args.load_session().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        run(&session, tmp.path()).unwrap();

        let markers = std::fs::read_to_string(tmp.path().join(MARKERS_FILENAME))
            .unwrap()
            .parse::<FeatureCollection>()
            .unwrap();
        assert_eq!(markers.features.len(), 2);
        let view: ViewDocument = serde_json::from_str(
            &std::fs::read_to_string(tmp.path().join(VIEW_FILENAME)).unwrap(),
        )
        .unwrap();
        assert_eq!(view.style_id, "dark-v11");
        assert_eq!(view.hotel_count, 2);
        assert_eq!(view.camera.map(|c| c.pitch), Some(60.0));
    }
}
