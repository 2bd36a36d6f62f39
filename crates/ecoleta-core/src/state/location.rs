//! Location Selection
//!
//! Province → city cascade plus the two map coordinates:
//! `focus` recenters the viewport, `selected_position` is the pin.

use crate::error::ApiResult;
use crate::models::{City, LatLng, Province, NONE_SELECTED};

use super::FetchOutcome;

/// Where the cascade currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationStage {
    NoProvince,
    ProvinceSelected,
    CitySelected,
}

/// City lookup issued by a province change
///
/// The generation ties the response back to the selection that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitiesRequest {
    pub province_id: String,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct LocationSelection {
    provinces: Vec<Province>,
    cities: Vec<City>,
    selected_province: Option<Province>,
    selected_city: Option<String>,
    focus: LatLng,
    selected_position: LatLng,
    /// Set once the user clicked the map
    pinned: bool,
    cities_generation: u64,
    cities_pending: bool,
}

impl LocationSelection {
    pub fn new(center: LatLng) -> Self {
        Self {
            provinces: Vec::new(),
            cities: Vec::new(),
            selected_province: None,
            selected_city: None,
            focus: center,
            selected_position: center,
            pinned: false,
            cities_generation: 0,
            cities_pending: false,
        }
    }

    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn selected_province(&self) -> Option<&Province> {
        self.selected_province.as_ref()
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.selected_city.as_deref()
    }

    pub fn focus(&self) -> LatLng {
        self.focus
    }

    pub fn selected_position(&self) -> LatLng {
        self.selected_position
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn cities_loading(&self) -> bool {
        self.cities_pending
    }

    pub fn stage(&self) -> LocationStage {
        match (&self.selected_province, &self.selected_city) {
            (None, _) => LocationStage::NoProvince,
            (Some(_), None) => LocationStage::ProvinceSelected,
            (Some(_), Some(_)) => LocationStage::CitySelected,
        }
    }

    /// Store the province list; a failure leaves it empty
    pub fn receive_provinces(&mut self, result: ApiResult<Vec<Province>>) -> FetchOutcome {
        match result {
            Ok(provinces) => {
                let count = provinces.len();
                self.provinces = provinces;
                FetchOutcome::Loaded(count)
            }
            Err(err) => {
                self.provinces.clear();
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Select a province by display name.
    ///
    /// Returns the city lookup to run, if any. The previous city selection and
    /// list are dropped immediately. The sentinel or an unknown name goes back
    /// to [`LocationStage::NoProvince`]; picking the current province again is
    /// a no-op.
    pub fn select_province(&mut self, name: &str) -> Option<CitiesRequest> {
        let found = if name == NONE_SELECTED {
            None
        } else {
            self.provinces.iter().find(|p| p.name == name).cloned()
        };

        if let (Some(new), Some(current)) = (&found, &self.selected_province) {
            if new.id == current.id {
                return None;
            }
        }

        // Any in-flight lookup is now stale
        self.cities_generation += 1;
        self.cities.clear();
        self.selected_city = None;

        match found {
            Some(province) => {
                let request = CitiesRequest {
                    province_id: province.id.clone(),
                    generation: self.cities_generation,
                };
                self.selected_province = Some(province);
                self.cities_pending = true;
                Some(request)
            }
            None => {
                self.selected_province = None;
                self.cities_pending = false;
                None
            }
        }
    }

    /// Apply a city lookup result unless a newer province selection superseded it
    pub fn receive_cities(&mut self, request: &CitiesRequest, result: ApiResult<Vec<City>>) -> FetchOutcome {
        if request.generation != self.cities_generation {
            return FetchOutcome::Stale;
        }
        self.cities_pending = false;
        match result {
            Ok(cities) => {
                let count = cities.len();
                self.cities = cities;
                FetchOutcome::Loaded(count)
            }
            Err(err) => {
                self.cities.clear();
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Select a city by name; focus follows it when it is in the current list
    pub fn select_city(&mut self, name: &str) {
        if name == NONE_SELECTED {
            self.selected_city = None;
            return;
        }
        self.selected_city = Some(name.to_string());
        if let Some(city) = self.cities.iter().find(|c| c.name == name) {
            self.focus = city.position;
        }
    }

    pub fn click_map(&mut self, position: LatLng) {
        self.selected_position = position;
        self.pinned = true;
    }

    /// Device position: always recenters, moves the pin only before the user set one
    pub fn apply_device_position(&mut self, position: LatLng) {
        self.focus = position;
        if !self.pinned {
            self.selected_position = position;
        }
    }
}
