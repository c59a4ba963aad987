use super::{CameraTarget, HotelMarker};
use crate::model::{
    hotel::{Hotel, HotelDataset},
    state::BrowserState,
    stats::QuickStats,
};

/// the visible hotels and their stats for one browser state. always built
/// fresh from (dataset, state), never patched incrementally.
#[derive(Clone, Debug)]
pub struct HotelView<'a> {
    pub hotels: Vec<&'a Hotel>,
    pub stats: QuickStats,
    pub camera: Option<CameraTarget>,
}

impl<'a> HotelView<'a> {
    pub fn derive(dataset: &'a HotelDataset, state: &BrowserState) -> HotelView<'a> {
        let filter = state.filter();
        let hotels = filter.apply(dataset);
        let stats = QuickStats::from_hotels(hotels.iter().copied());
        log::debug!(
            "{} of {} hotels pass {filter}",
            hotels.len(),
            dataset.len()
        );
        HotelView {
            hotels,
            stats,
            camera: CameraTarget::for_state(state),
        }
    }

    pub fn markers(&self) -> Vec<HotelMarker> {
        self.hotels.iter().map(|h| HotelMarker::from(*h)).collect()
    }
}
