use std::path::Path;

use hotelmap_core::model::{
    hotel::Hotel,
    state::BrowserAction,
    stats::QuickStats,
    surface::{HotelBrowser, MapSurface, SurfaceEvent},
    view::HotelPopup,
};
use serde::{Deserialize, Serialize};

use super::{HotelMapAppError, Session};

/// one entry of a replay script: a user action or a surface notification.
///
/// ```json
/// [
///   { "action": "toggle_area", "area": "Belltown" },
///   { "event": "marker_activated", "hotel_id": 1009 },
///   { "action": "set_price_ceiling", "value": 400 }
/// ]
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ReplayStep {
    Action(BrowserAction),
    Event(SurfaceEvent),
}

impl std::fmt::Display for ReplayStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayStep::Action(action) => write!(f, "{action}"),
            ReplayStep::Event(SurfaceEvent::Loaded) => write!(f, "map loaded"),
            ReplayStep::Event(SurfaceEvent::MarkerActivated { hotel_id }) => {
                write!(f, "marker {hotel_id} activated")
            }
        }
    }
}

pub fn read_steps(actions_file: &Path) -> Result<Vec<ReplayStep>, HotelMapAppError> {
    let contents =
        std::fs::read_to_string(actions_file).map_err(|e| HotelMapAppError::ReadError {
            path: actions_file.to_path_buf(),
            message: e.to_string(),
        })?;
    serde_json::from_str(&contents).map_err(|e| {
        HotelMapAppError::InvalidUserInput(format!(
            "file '{}' is not a JSON array of actions and events: {e}",
            actions_file.display()
        ))
    })
}

/// drives a [`HotelBrowser`] through the steps. the surface is reported as
/// loaded before the first step. returns the stats after each step.
pub fn run<S: MapSurface>(
    session: Session,
    steps: &[ReplayStep],
    surface: S,
) -> Result<Vec<QuickStats>, HotelMapAppError> {
    if !session.amenities.is_empty() {
        log::warn!("amenity labels are not part of browser state and are ignored during replay");
    }
    let mut browser = HotelBrowser::new(session.dataset, session.state, surface)
        .on_hotel_click(|hotel: &Hotel| print_popup(hotel));
    browser.handle_event(&SurfaceEvent::Loaded)?;

    let mut history = Vec::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        log::info!("step {}: {step}", index + 1);
        match step {
            ReplayStep::Action(action) => {
                browser.dispatch(action)?;
            }
            ReplayStep::Event(event) => browser.handle_event(event)?,
        }
        history.push(browser.view().stats);
    }
    Ok(history)
}

fn print_popup(hotel: &Hotel) {
    let popup = HotelPopup::from(hotel);
    println!(
        "{} ({}) {} {} {}",
        popup.name, popup.star_class, popup.price_label, popup.rating_label, popup.reviews_label
    );
    println!("  {}", popup.address);
    println!("  {}, {} amenities", popup.room_type, popup.amenity_count);
}
