//! HTTP Implementations
//!
//! reqwest-backed collaborators. On wasm32 reqwest goes through `fetch`.

use async_trait::async_trait;
use reqwest::Client;

use super::traits::{GeoRefApi, ItemsApi};
use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::georef::{self, MunicipiosResponse, ProvinciasResponse};
use crate::models::{City, Item, PointPayload, Province};

/// Client of the local items/points API
#[derive(Clone)]
pub struct HttpItemsApi {
    client: Client,
    base_url: String,
}

impl HttpItemsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl ItemsApi for HttpItemsApi {
    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        let items = self.client
            .get(self.url("items"))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Item>>()
            .await?;
        log::debug!("[API] Loaded {} items", items.len());
        Ok(items)
    }

    async fn create_point(&self, payload: &PointPayload) -> ApiResult<()> {
        self.client
            .post(self.url("points"))
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Client of the datos.gob.ar georef service
#[derive(Clone)]
pub struct HttpGeoRefApi {
    client: Client,
    base_url: String,
    cities_max: u32,
}

impl HttpGeoRefApi {
    pub fn new(base_url: impl Into<String>, cities_max: u32) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            cities_max,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.georef_url.clone(), config.cities_max)
    }
}

#[async_trait(?Send)]
impl GeoRefApi for HttpGeoRefApi {
    async fn list_provinces(&self) -> ApiResult<Vec<Province>> {
        let response = self.client
            .get(georef::provinces_url(&self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<ProvinciasResponse>()
            .await?;
        Ok(response.into_provinces())
    }

    async fn list_cities(&self, province_id: &str) -> ApiResult<Vec<City>> {
        let response = self.client
            .get(georef::cities_url(&self.base_url))
            .query(&georef::cities_query(province_id, self.cities_max))
            .send()
            .await?
            .error_for_status()?
            .json::<MunicipiosResponse>()
            .await?;
        Ok(response.into_cities(province_id))
    }
}
