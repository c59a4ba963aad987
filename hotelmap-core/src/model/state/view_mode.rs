use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// base map display mode. street is the default.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    #[serde(alias = "map")]
    #[value(alias = "map")]
    Street,
    Satellite,
    Terrain,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Street => "street",
            ViewMode::Satellite => "satellite",
            ViewMode::Terrain => "terrain",
        }
    }

    /// base style requested from the tile provider
    pub fn style_id(&self) -> &'static str {
        match self {
            ViewMode::Street => "dark-v11",
            ViewMode::Satellite => "satellite-v9",
            ViewMode::Terrain => "outdoors-v11",
        }
    }

    /// camera pitch in degrees. street mode tilts to show extruded buildings.
    pub fn pitch(&self) -> f64 {
        match self {
            ViewMode::Street => 60.0,
            ViewMode::Satellite | ViewMode::Terrain => 0.0,
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "street" | "map" => Ok(ViewMode::Street),
            "satellite" => Ok(ViewMode::Satellite),
            "terrain" => Ok(ViewMode::Terrain),
            _ => Err(format!("unknown view mode '{s}'")),
        }
    }
}
