//! Application Context
//!
//! Configuration provided via Leptos Context API.

use leptos::prelude::*;

use ecoleta_core::api::{HttpGeoRefApi, HttpItemsApi};
use ecoleta_core::AppConfig;

/// App-wide settings shared by every page
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Client for the local items/points API
    pub fn items_api(&self) -> HttpItemsApi {
        HttpItemsApi::from_config(&self.config)
    }

    /// Client for the georef service
    pub fn georef_api(&self) -> HttpGeoRefApi {
        HttpGeoRefApi::from_config(&self.config)
    }
}

/// Get the app context (provided by `App`)
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
