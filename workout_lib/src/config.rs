//! Settings for the map, the markers and the derived workout fields.
//!
//! Every field has a default so a config file only needs to name what it changes.

use serde::{Deserialize, Serialize};

use crate::{derived::DerivationRules, error::ConfigError};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub map: MapConfig,
    pub marker: MarkerIconConfig,
    pub popup: PopupConfig,
    pub derivation: DerivationRules,
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Zoom used both for the first render and when jumping to a workout
    pub zoom: f64,
    pub max_zoom: f64,
    pub tile_url: String,
    pub attribution: String,
    /// Length of the pan animation when jumping to a workout
    pub pan_duration_secs: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: 15.,
            max_zoom: 19.,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                .into(),
            pan_duration_secs: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerIconConfig {
    pub icon_url: String,
    pub icon_size: [f64; 2],
    pub icon_anchor: [f64; 2],
    pub popup_anchor: [f64; 2],
    pub shadow_url: String,
    pub shadow_size: [f64; 2],
}

impl Default for MarkerIconConfig {
    fn default() -> Self {
        Self {
            icon_url: "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png".into(),
            icon_size: [25., 41.],
            icon_anchor: [12., 41.],
            popup_anchor: [1., -34.],
            shadow_url: "https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png".into(),
            shadow_size: [41., 41.],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub max_width: f64,
    pub max_height: f64,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            max_width: 300.,
            max_height: 75.,
        }
    }
}
