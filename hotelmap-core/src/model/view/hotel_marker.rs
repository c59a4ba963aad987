use geo::Point;
use geojson::{feature::Id, Feature, FeatureCollection, Geometry};
use serde_json::Value;

use super::HotelPopup;
use crate::model::{hotel::Hotel, surface::MapSurfaceError};

/// a point marker for one visible hotel, carrying its popup.
#[derive(Clone, Debug, PartialEq)]
pub struct HotelMarker {
    pub hotel_id: u64,
    /// x = longitude, y = latitude
    pub location: Point<f64>,
    pub popup: HotelPopup,
}

impl HotelMarker {
    /// GeoJSON point feature whose id is the hotel id and whose properties
    /// are the popup fields.
    pub fn to_feature(&self) -> Result<Feature, MapSurfaceError> {
        let properties = match serde_json::to_value(&self.popup) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(MapSurfaceError::Serialize(format!(
                "popup for hotel {} did not serialize to an object: {other}",
                self.hotel_id
            ))),
            Err(e) => Err(MapSurfaceError::Serialize(format!(
                "failure serializing popup for hotel {}: {e}",
                self.hotel_id
            ))),
        }?;
        Ok(Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::from(&self.location))),
            id: Some(Id::Number(self.hotel_id.into())),
            properties: Some(properties),
            foreign_members: None,
        })
    }
}

impl From<&Hotel> for HotelMarker {
    fn from(hotel: &Hotel) -> Self {
        Self {
            hotel_id: hotel.hotel_id,
            location: hotel.location(),
            popup: HotelPopup::from(hotel),
        }
    }
}

/// collects markers into a single GeoJSON FeatureCollection.
pub fn marker_collection(markers: &[HotelMarker]) -> Result<FeatureCollection, MapSurfaceError> {
    let features = markers
        .iter()
        .map(HotelMarker::to_feature)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
