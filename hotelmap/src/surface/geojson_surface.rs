use std::path::{Path, PathBuf};

use hotelmap_core::model::{
    surface::{MapFrame, MapSurface, MapSurfaceError},
    view::marker_collection,
};

use super::ViewDocument;
use crate::util::fs::{create_dirs, write_json};

pub const MARKERS_FILENAME: &str = "markers.geojson";
pub const VIEW_FILENAME: &str = "view.json";

/// a map surface that writes each frame to disk: markers as a GeoJSON
/// FeatureCollection and the style, selection and camera as a JSON document.
/// every render replaces the previous files.
pub struct GeoJsonSurface {
    output_directory: PathBuf,
    frames_rendered: usize,
}

impl GeoJsonSurface {
    pub fn new<P: AsRef<Path>>(output_directory: P) -> Self {
        Self {
            output_directory: output_directory.as_ref().to_path_buf(),
            frames_rendered: 0,
        }
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }
}

impl MapSurface for GeoJsonSurface {
    fn render(&mut self, frame: &MapFrame<'_>) -> Result<(), MapSurfaceError> {
        create_dirs(&self.output_directory)?;
        let collection = marker_collection(&frame.markers())?;
        let markers_path = self.output_directory.join(MARKERS_FILENAME);
        write_json(&collection, &markers_path)?;
        let view_path = self.output_directory.join(VIEW_FILENAME);
        write_json(&ViewDocument::from(frame), &view_path)?;
        self.frames_rendered += 1;
        log::debug!(
            "frame {} with {} markers written to {}",
            self.frames_rendered,
            collection.features.len(),
            self.output_directory.display()
        );
        Ok(())
    }
}
