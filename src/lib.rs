mod error;
pub mod query;
pub mod region;
pub mod render;
pub mod search;

#[cfg(not(target_arch = "wasm32"))]
pub mod api;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod proxy;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

use serde::{Deserialize, Serialize};

pub use error::ApiError;
pub use query::{FilterCriteria, FormFields, build_query};
pub use region::{REGIONS, Region};
pub use render::{Link, ProviderItem, TrailCard, TrailList, count_label, render_providers, render_trails};
pub use search::{
    ProvidersDisplay, ProvidersView, SearchController, SearchOutcome, TrailsApi, TrailsDisplay,
    TrailsView,
};

pub const TRAILS_PATH: &str = "/api/trails";
pub const PROVIDERS_PATH: &str = "/api/providers";

/// A single route record as returned by `GET /api/trails`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub location: String,
    pub distance_km: f64,
    #[serde(default)]
    pub elevation_m: Option<f64>,
    pub difficulty: String,
    pub provider: String,
    pub dog_policy: String,
    #[serde(default)]
    pub dog_notes: Option<String>,
    pub surface: String,
    pub map_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub api_status: String,
    pub notes: String,
    pub website: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bbox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl Bbox {
    pub fn to_query(&self) -> [(&'static str, String); 4] {
        [
            ("min_lat", self.min_lat.to_string()),
            ("min_lon", self.min_lon.to_string()),
            ("max_lat", self.max_lat.to_string()),
            ("max_lon", self.max_lon.to_string()),
        ]
    }
}
