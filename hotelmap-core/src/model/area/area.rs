use std::str::FromStr;

use geo::{coord, Point, Rect};
use serde::{Deserialize, Serialize};

/// the named neighborhoods a user can jump to. each has a bounding box used
/// for hotel membership and a center point used as the camera target.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Area {
    #[serde(rename = "Pike Place Market")]
    PikePlaceMarket,
    #[serde(rename = "Belltown")]
    Belltown,
    #[serde(rename = "South Lake Union")]
    SouthLakeUnion,
    #[serde(rename = "Capitol Hill")]
    CapitolHill,
    #[serde(rename = "Downtown")]
    Downtown,
}

impl Area {
    /// all areas in the order they are offered to the user
    pub const ALL: [Area; 5] = [
        Area::PikePlaceMarket,
        Area::Belltown,
        Area::SouthLakeUnion,
        Area::CapitolHill,
        Area::Downtown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Area::PikePlaceMarket => "Pike Place Market",
            Area::Belltown => "Belltown",
            Area::SouthLakeUnion => "South Lake Union",
            Area::CapitolHill => "Capitol Hill",
            Area::Downtown => "Downtown",
        }
    }

    /// exact, case-sensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Area> {
        Area::ALL.into_iter().find(|a| a.name() == name)
    }

    /// bounding box with x = longitude, y = latitude.
    pub fn bounds(&self) -> Rect<f64> {
        let ((lat_min, lat_max), (lng_min, lng_max)) = match self {
            Area::PikePlaceMarket => ((47.608, 47.611), (-122.345, -122.335)),
            Area::Belltown => ((47.612, 47.618), (-122.35, -122.34)),
            Area::SouthLakeUnion => ((47.615, 47.62), (-122.34, -122.33)),
            Area::CapitolHill => ((47.61, 47.615), (-122.325, -122.315)),
            Area::Downtown => ((47.605, 47.615), (-122.345, -122.33)),
        };
        Rect::new(
            coord! { x: lng_min, y: lat_min },
            coord! { x: lng_max, y: lat_max },
        )
    }

    /// camera target for this area, x = longitude, y = latitude.
    pub fn center(&self) -> Point<f64> {
        match self {
            Area::PikePlaceMarket => Point::new(-122.3421, 47.6097),
            Area::Belltown => Point::new(-122.35, 47.615),
            Area::SouthLakeUnion => Point::new(-122.33, 47.62),
            Area::CapitolHill => Point::new(-122.32, 47.615),
            Area::Downtown => Point::new(-122.3321, 47.6062),
        }
    }

    /// true if the coordinate lies in the bounding box. both axes are
    /// inclusive, so a hotel sitting exactly on an edge belongs to the area.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        let bounds = self.bounds();
        let (min, max) = (bounds.min(), bounds.max());
        min.y <= latitude && latitude <= max.y && min.x <= longitude && longitude <= max.x
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Area {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Area::from_name(s).ok_or_else(|| {
            let names = Area::ALL.iter().map(|a| a.name()).collect::<Vec<_>>();
            format!("unknown area '{s}', expected one of {}", names.join(", "))
        })
    }
}
