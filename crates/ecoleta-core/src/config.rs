//! Application Configuration
//!
//! Endpoints and map defaults. Values can be overridden at build time.

use serde::{Deserialize, Serialize};

use crate::models::LatLng;

/// Local items/points API
pub const DEFAULT_API_URL: &str = "http://localhost:3333";
/// Argentine georef service
pub const DEFAULT_GEOREF_URL: &str = "https://apis.datos.gob.ar/georef/api";
/// Upper bound of municipios requested per province
pub const DEFAULT_CITIES_MAX: u32 = 5000;
/// Map center used until the device position is known
pub const DEFAULT_CENTER: LatLng = LatLng::new(23.1247713, -82.3856771);
pub const DEFAULT_MAP_ZOOM: u8 = 13;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub georef_url: String,
    pub cities_max: u32,
    pub default_center: LatLng,
    pub map_zoom: u8,
    /// Send `POST points` on submit (off: submission stays local)
    pub persist_points: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            georef_url: DEFAULT_GEOREF_URL.to_string(),
            cities_max: DEFAULT_CITIES_MAX,
            default_center: DEFAULT_CENTER,
            map_zoom: DEFAULT_MAP_ZOOM,
            persist_points: false,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `ECOLETA_*` variables captured at compile time
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("ECOLETA_API_URL"),
            option_env!("ECOLETA_GEOREF_URL"),
            option_env!("ECOLETA_PERSIST_POINTS"),
        )
    }

    fn with_overrides(
        api_url: Option<&str>,
        georef_url: Option<&str>,
        persist_points: Option<&str>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.filter(|u| !u.is_empty()) {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = georef_url.filter(|u| !u.is_empty()) {
            config.georef_url = url.trim_end_matches('/').to_string();
        }
        if let Some(flag) = persist_points {
            config.persist_points = matches!(flag.trim(), "1" | "true" | "yes");
        }
        config
    }
}
