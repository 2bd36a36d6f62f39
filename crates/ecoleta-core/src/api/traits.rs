//! API Layer - Collaborator Traits
//!
//! Abstract interfaces of the two HTTP collaborators.
//! The browser build uses [`super::HttpItemsApi`] / [`super::HttpGeoRefApi`];
//! tests plug in in-memory fakes.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{City, Item, PointPayload, Province};

/// Local items/points API
///
/// Futures are not `Send`: in the browser they run on the single JS event loop.
#[async_trait(?Send)]
pub trait ItemsApi {
    /// Selectable material categories
    async fn list_items(&self) -> ApiResult<Vec<Item>>;

    /// Register a collection point
    async fn create_point(&self, payload: &PointPayload) -> ApiResult<()>;
}

/// Geographic reference service
#[async_trait(?Send)]
pub trait GeoRefApi {
    async fn list_provinces(&self) -> ApiResult<Vec<Province>>;

    /// Cities belonging to the province with `province_id`
    async fn list_cities(&self, province_id: &str) -> ApiResult<Vec<City>>;
}
