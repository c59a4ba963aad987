use hotelmap_core::model::surface::{MapFrame, MapSurface, MapSurfaceError};
use itertools::Itertools;

/// a map surface that only logs what it would draw.
#[derive(Default)]
pub struct LogSurface {
    frames_rendered: usize,
}

impl LogSurface {
    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }
}

impl MapSurface for LogSurface {
    fn render(&mut self, frame: &MapFrame<'_>) -> Result<(), MapSurfaceError> {
        self.frames_rendered += 1;
        let camera = match &frame.camera {
            Some(c) => format!(
                "fly to ({:.4}, {:.4}) zoom {} pitch {}",
                c.center.y(),
                c.center.x(),
                c.zoom,
                c.pitch
            ),
            None => String::from("camera unchanged"),
        };
        log::info!(
            "frame {}: style {}, area {}, {}, {} markers",
            self.frames_rendered,
            frame.view_mode.style_id(),
            frame.selected_area.unwrap_or("(none)"),
            camera,
            frame.hotels.len()
        );
        log::debug!(
            "markers: [{}]",
            frame.hotels.iter().map(|h| h.hotel_id).join(", ")
        );
        Ok(())
    }
}
