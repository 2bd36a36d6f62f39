//! Core Models
//!
//! Entities shared by the API clients, the page state and the UI.

use serde::{Deserialize, Serialize};

/// Option value meaning "nothing selected" in the province/city selects
pub const NONE_SELECTED: &str = "0";

/// Geographic coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Collectible material category (matches the items API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

/// Province as listed by the georef API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub id: String,
    pub name: String,
}

/// City (municipio) of a province, with its centroid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub position: LatLng,
}

/// Contact fields of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Whatsapp,
}

impl FormField {
    /// The `name` attribute of the matching input
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Whatsapp => "whatsapp",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "whatsapp" => Some(FormField::Whatsapp),
            _ => None,
        }
    }
}

/// Free-text contact data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

impl FormData {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Whatsapp => self.whatsapp = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Whatsapp => &self.whatsapp,
        }
    }
}

/// Body of `POST points`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointPayload {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub province: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_field_names() {
        for field in [FormField::Name, FormField::Email, FormField::Whatsapp] {
            assert_eq!(FormField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(FormField::from_name("uf"), None);
    }

    #[test]
    fn test_form_data_set_single_field() {
        let mut data = FormData::default();
        data.set(FormField::Email, "eco@leta.org");
        assert_eq!(data.get(FormField::Email), "eco@leta.org");
        assert_eq!(data.name, "");
        assert_eq!(data.whatsapp, "");
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = PointPayload {
            name: "Reciclar".to_string(),
            email: "a@b.c".to_string(),
            whatsapp: "221000".to_string(),
            province: "Buenos Aires".to_string(),
            city: "La Plata".to_string(),
            latitude: -34.9,
            longitude: -57.95,
            items: vec![1, 3],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["province"], "Buenos Aires");
        assert_eq!(json["latitude"], -34.9);
        assert_eq!(json["items"], serde_json::json!([1, 3]));
    }

    #[test]
    fn test_item_decodes_from_api() {
        let item: Item = serde_json::from_str(
            r#"{"id": 2, "title": "Vidrios", "image_url": "http://localhost:3333/uploads/vidrios.svg"}"#,
        ).unwrap();
        assert_eq!(item.id, 2);
        assert_eq!(item.title, "Vidrios");
    }
}
