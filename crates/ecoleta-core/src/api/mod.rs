//! API Layer
//!
//! Collaborator traits and their HTTP implementations.

mod traits;
mod http;

pub use traits::{GeoRefApi, ItemsApi};
pub use http::{HttpGeoRefApi, HttpItemsApi};
