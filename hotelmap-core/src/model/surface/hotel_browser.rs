use super::{MapFrame, MapSurface, MapSurfaceError, SurfaceEvent};
use crate::model::{
    hotel::{Hotel, HotelDataset},
    state::{BrowserAction, BrowserState},
    stats::QuickStats,
    view::HotelView,
};

type LoadHook = Box<dyn FnMut()>;
type HotelClickHook = Box<dyn FnMut(&Hotel)>;

/// the event loop glue between user actions, the dataset and a map surface.
///
/// each action replaces the state and, once the surface has reported
/// [`SurfaceEvent::Loaded`], re-derives the visible hotels and pushes a new
/// [`MapFrame`]. nothing derived is cached between actions.
pub struct HotelBrowser<S: MapSurface> {
    dataset: HotelDataset,
    state: BrowserState,
    surface: S,
    loaded: bool,
    on_load: Option<LoadHook>,
    on_hotel_click: Option<HotelClickHook>,
}

impl<S: MapSurface> HotelBrowser<S> {
    pub fn new(dataset: HotelDataset, state: BrowserState, surface: S) -> Self {
        Self {
            dataset,
            state,
            surface,
            loaded: false,
            on_load: None,
            on_hotel_click: None,
        }
    }

    /// called once when the surface reports it has loaded
    pub fn on_load(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_load = Some(Box::new(hook));
        self
    }

    /// called with the hotel whenever its marker is activated
    pub fn on_hotel_click(mut self, hook: impl FnMut(&Hotel) + 'static) -> Self {
        self.on_hotel_click = Some(Box::new(hook));
        self
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn dataset(&self) -> &HotelDataset {
        &self.dataset
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// the visible hotels and stats for the current state
    pub fn view(&self) -> HotelView<'_> {
        HotelView::derive(&self.dataset, &self.state)
    }

    /// applies a user action and, if the surface is ready, redraws it.
    /// returns the stats for the new state.
    pub fn dispatch(&mut self, action: &BrowserAction) -> Result<QuickStats, MapSurfaceError> {
        log::debug!("dispatching {action}");
        self.state = self.state.apply(action);
        if self.loaded {
            render_frame(&mut self.surface, &self.dataset, &self.state)
        } else {
            log::debug!("map surface not loaded yet, deferring render");
            Ok(self.view().stats)
        }
    }

    /// routes a notification from the surface. a load triggers the first
    /// render; a marker click resolves the hotel and calls the click hook.
    pub fn handle_event(&mut self, event: &SurfaceEvent) -> Result<(), MapSurfaceError> {
        match event {
            SurfaceEvent::Loaded => {
                if self.loaded {
                    log::debug!("map surface reported load more than once");
                    return Ok(());
                }
                log::info!("map loaded successfully");
                self.loaded = true;
                if let Some(hook) = self.on_load.as_mut() {
                    hook();
                }
                render_frame(&mut self.surface, &self.dataset, &self.state).map(|_| ())
            }
            SurfaceEvent::MarkerActivated { hotel_id } => {
                match self.dataset.get(*hotel_id) {
                    Some(hotel) => {
                        log::info!("hotel clicked: {}", hotel.name);
                        if let Some(hook) = self.on_hotel_click.as_mut() {
                            hook(hotel);
                        }
                    }
                    None => log::warn!("marker for unknown hotel id {hotel_id} was activated"),
                }
                Ok(())
            }
        }
    }
}

fn render_frame<S: MapSurface>(
    surface: &mut S,
    dataset: &HotelDataset,
    state: &BrowserState,
) -> Result<QuickStats, MapSurfaceError> {
    let view = HotelView::derive(dataset, state);
    let frame = MapFrame {
        view_mode: state.view_mode,
        hotels: &view.hotels,
        selected_area: state.selected_area.as_deref(),
        camera: view.camera,
    };
    surface.render(&frame)?;
    Ok(view.stats)
}
