//! Georef Wire Format
//!
//! Response shapes of the datos.gob.ar georef service and their
//! conversion into [`Province`] / [`City`].

use serde::Deserialize;

use crate::models::{City, LatLng, Province};

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Centroide {
    pub lat: f64,
    pub lon: f64,
}

impl From<Centroide> for LatLng {
    fn from(c: Centroide) -> Self {
        LatLng::new(c.lat, c.lon)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvinciaRecord {
    pub id: String,
    pub nombre: String,
}

/// `GET /provincias`
#[derive(Debug, Clone, Deserialize)]
pub struct ProvinciasResponse {
    #[serde(default)]
    pub provincias: Vec<ProvinciaRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MunicipioRecord {
    pub id: String,
    pub nombre: String,
    pub centroide: Centroide,
    /// Owning province, when the service includes it
    #[serde(default, alias = "provincias")]
    pub provincia: Option<ProvinciaRecord>,
}

/// `GET /municipios?provincia=<id>&max=<n>`
#[derive(Debug, Clone, Deserialize)]
pub struct MunicipiosResponse {
    #[serde(default)]
    pub municipios: Vec<MunicipioRecord>,
}

impl ProvinciasResponse {
    pub fn into_provinces(self) -> Vec<Province> {
        self.provincias
            .into_iter()
            .map(|p| Province { id: p.id, name: p.nombre })
            .collect()
    }
}

impl MunicipiosResponse {
    /// Cities of `province_id`; records tagged with another province are dropped
    pub fn into_cities(self, province_id: &str) -> Vec<City> {
        self.municipios
            .into_iter()
            .filter(|m| m.provincia.as_ref().map_or(true, |p| p.id == province_id))
            .map(|m| City {
                id: m.id,
                name: m.nombre,
                position: m.centroide.into(),
            })
            .collect()
    }
}

pub fn provinces_url(base: &str) -> String {
    format!("{}/provincias", base.trim_end_matches('/'))
}

pub fn cities_url(base: &str) -> String {
    format!("{}/municipios", base.trim_end_matches('/'))
}

/// Query pairs of the municipios request
pub fn cities_query(province_id: &str, max: u32) -> [(&'static str, String); 2] {
    [("provincia", province_id.to_string()), ("max", max.to_string())]
}
