//! EcoLeta Core
//!
//! Layered like the frontend it serves:
//! - models: entities shared with the APIs and the UI
//! - georef: datos.gob.ar wire format
//! - api: collaborator traits and their reqwest implementations
//! - state: the CreatePoint page state machine
//! - config: endpoints and map defaults

pub mod api;
pub mod config;
pub mod error;
pub mod georef;
pub mod models;
pub mod state;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult};
pub use models::{City, FormData, FormField, Item, LatLng, PointPayload, Province, NONE_SELECTED};
pub use state::{CitiesRequest, CreatePointState, FetchOutcome, ItemSelection, LocationStage};
