//! CreatePoint Page State
//!
//! One explicit state object for the registration form, changed only through
//! its transition methods. Network results come back in as `ApiResult`s and
//! each application reports a [`FetchOutcome`].

mod items;
mod location;

#[cfg(test)]
mod tests;

pub use items::ItemSelection;
pub use location::{CitiesRequest, LocationSelection, LocationStage};

use crate::error::{ApiError, ApiResult};
use crate::models::{City, FormData, FormField, Item, LatLng, PointPayload, Province, NONE_SELECTED};

/// What happened when a lookup result was applied
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// List replaced, with this many entries
    Loaded(usize),
    /// Superseded by a newer request and ignored
    Stale,
    /// Lookup failed; the list was left empty
    Failed(ApiError),
}

impl FetchOutcome {
    /// Log the outcome under `what`; failures go to the error log only
    pub fn log(&self, what: &str) {
        match self {
            FetchOutcome::Loaded(count) => log::info!("[CreatePoint] Loaded {} {}", count, what),
            FetchOutcome::Stale => log::debug!("[CreatePoint] Dropped stale {} response", what),
            FetchOutcome::Failed(err) => log::error!("[CreatePoint] It was not possible to get the {}: {}", what, err),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePointState {
    items: Vec<Item>,
    selection: ItemSelection,
    form: FormData,
    location: LocationSelection,
}

impl CreatePointState {
    pub fn new(center: LatLng) -> Self {
        Self {
            items: Vec::new(),
            selection: ItemSelection::default(),
            form: FormData::default(),
            location: LocationSelection::new(center),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn selection(&self) -> &ItemSelection {
        &self.selection
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn location(&self) -> &LocationSelection {
        &self.location
    }

    pub fn receive_items(&mut self, result: ApiResult<Vec<Item>>) -> FetchOutcome {
        match result {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                FetchOutcome::Loaded(count)
            }
            Err(err) => {
                self.items.clear();
                FetchOutcome::Failed(err)
            }
        }
    }

    pub fn toggle_item(&mut self, id: u32) {
        self.selection.toggle(id);
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Apply an input change keyed by the input's `name` attribute
    pub fn set_input(&mut self, name: &str, value: impl Into<String>) -> Option<FormField> {
        let field = FormField::from_name(name)?;
        self.set_field(field, value);
        Some(field)
    }

    pub fn receive_provinces(&mut self, result: ApiResult<Vec<Province>>) -> FetchOutcome {
        self.location.receive_provinces(result)
    }

    pub fn select_province(&mut self, name: &str) -> Option<CitiesRequest> {
        self.location.select_province(name)
    }

    pub fn receive_cities(&mut self, request: &CitiesRequest, result: ApiResult<Vec<City>>) -> FetchOutcome {
        self.location.receive_cities(request, result)
    }

    pub fn select_city(&mut self, name: &str) {
        self.location.select_city(name);
    }

    pub fn click_map(&mut self, position: LatLng) {
        self.location.click_map(position);
    }

    pub fn apply_device_position(&mut self, position: LatLng) {
        self.location.apply_device_position(position);
    }

    /// Flatten the current state into the `POST points` body.
    ///
    /// No validation: whatever is in the form right now is sent.
    pub fn submit(&self) -> PointPayload {
        let position = self.location.selected_position();
        PointPayload {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            whatsapp: self.form.whatsapp.clone(),
            province: self.location
                .selected_province()
                .map_or_else(|| NONE_SELECTED.to_string(), |p| p.name.clone()),
            city: self.location
                .selected_city()
                .unwrap_or(NONE_SELECTED)
                .to_string(),
            latitude: position.lat,
            longitude: position.lon,
            items: self.selection.ids().to_vec(),
        }
    }
}
