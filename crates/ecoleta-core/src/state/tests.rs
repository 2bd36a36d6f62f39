//! CreatePoint Flow Tests
//!
//! Drives the page state through in-memory collaborators the way the page
//! component does.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use async_trait::async_trait;

    use crate::api::{GeoRefApi, ItemsApi};
    use crate::error::{ApiError, ApiResult};
    use crate::models::{City, FormField, Item, LatLng, PointPayload, Province, NONE_SELECTED};
    use crate::state::{CreatePointState, FetchOutcome, LocationStage};

    struct FakeItems {
        items: Vec<Item>,
        posted: RefCell<Vec<PointPayload>>,
    }

    #[async_trait(?Send)]
    impl ItemsApi for FakeItems {
        async fn list_items(&self) -> ApiResult<Vec<Item>> {
            Ok(self.items.clone())
        }

        async fn create_point(&self, payload: &PointPayload) -> ApiResult<()> {
            self.posted.borrow_mut().push(payload.clone());
            Ok(())
        }
    }

    struct FakeGeoRef {
        provinces: Vec<Province>,
        cities: HashMap<String, Vec<City>>,
    }

    #[async_trait(?Send)]
    impl GeoRefApi for FakeGeoRef {
        async fn list_provinces(&self) -> ApiResult<Vec<Province>> {
            Ok(self.provinces.clone())
        }

        async fn list_cities(&self, province_id: &str) -> ApiResult<Vec<City>> {
            self.cities
                .get(province_id)
                .cloned()
                .ok_or(ApiError::Status(404))
        }
    }

    struct Offline;

    #[async_trait(?Send)]
    impl GeoRefApi for Offline {
        async fn list_provinces(&self) -> ApiResult<Vec<Province>> {
            Err(ApiError::Network("offline".to_string()))
        }

        async fn list_cities(&self, _province_id: &str) -> ApiResult<Vec<City>> {
            Err(ApiError::Network("offline".to_string()))
        }
    }

    fn item(id: u32, title: &str) -> Item {
        Item {
            id,
            title: title.to_string(),
            image_url: format!("http://localhost:3333/uploads/{}.svg", id),
        }
    }

    fn city(id: &str, name: &str, lat: f64, lon: f64) -> City {
        City { id: id.to_string(), name: name.to_string(), position: LatLng::new(lat, lon) }
    }

    fn setup() -> (FakeItems, FakeGeoRef) {
        let items = FakeItems {
            items: vec![item(1, "Lámparas"), item(2, "Pilas y baterías"), item(3, "Papeles y cartones")],
            posted: RefCell::new(Vec::new()),
        };
        let mut cities = HashMap::new();
        cities.insert("6".to_string(), vec![
            city("060441", "La Plata", -34.9205, -57.9536),
            city("060357", "General Pueyrredón", -38.0055, -57.5426),
        ]);
        cities.insert("14".to_string(), vec![city("140014", "Córdoba", -31.4167, -64.1833)]);
        let geo = FakeGeoRef {
            provinces: vec![
                Province { id: "6".to_string(), name: "Buenos Aires".to_string() },
                Province { id: "14".to_string(), name: "Córdoba".to_string() },
            ],
            cities,
        };
        (items, geo)
    }

    async fn mounted(items: &FakeItems, geo: &FakeGeoRef) -> CreatePointState {
        let mut state = CreatePointState::new(LatLng::new(23.1247713, -82.3856771));
        state.receive_items(items.list_items().await);
        state.receive_provinces(geo.list_provinces().await);
        state
    }

    #[tokio::test]
    async fn test_register_point_in_la_plata() {
        let (items, geo) = setup();
        let mut state = mounted(&items, &geo).await;

        let request = state.select_province("Buenos Aires").expect("province should be known");
        let outcome = state.receive_cities(&request, geo.list_cities(&request.province_id).await);
        assert_eq!(outcome, FetchOutcome::Loaded(2));

        state.select_city("La Plata");
        assert_eq!(state.location().focus(), LatLng::new(-34.9205, -57.9536));

        state.click_map(LatLng::new(-34.9, -57.95));
        state.set_field(FormField::Name, "Punto Verde");
        state.set_field(FormField::Email, "verde@ecoleta.org");
        state.set_field(FormField::Whatsapp, "+54 221 555 0000");
        state.toggle_item(3);
        state.toggle_item(1);

        let payload = state.submit();
        assert_eq!(payload.province, "Buenos Aires");
        assert_eq!(payload.city, "La Plata");
        assert_eq!(payload.latitude, -34.9);
        assert_eq!(payload.longitude, -57.95);
        assert_eq!(payload.items, vec![3, 1]);
        assert_eq!(payload.name, "Punto Verde");

        items.create_point(&payload).await.expect("fake never fails");
        assert_eq!(items.posted.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_late_response_for_abandoned_province() {
        let (items, geo) = setup();
        let mut state = mounted(&items, &geo).await;

        let buenos_aires = state.select_province("Buenos Aires").unwrap();
        let cordoba = state.select_province("Córdoba").unwrap();

        // Córdoba answers first, Buenos Aires arrives late
        let outcome = state.receive_cities(&cordoba, geo.list_cities(&cordoba.province_id).await);
        assert_eq!(outcome, FetchOutcome::Loaded(1));
        let outcome = state.receive_cities(&buenos_aires, geo.list_cities(&buenos_aires.province_id).await);
        assert_eq!(outcome, FetchOutcome::Stale);

        let names: Vec<&str> = state.location().cities().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Córdoba"]);
    }

    #[tokio::test]
    async fn test_submit_items_reflect_current_selection() {
        let (items, geo) = setup();
        let mut state = mounted(&items, &geo).await;

        for id in [1, 2, 3, 2, 1] {
            state.toggle_item(id);
        }
        assert_eq!(state.submit().items, vec![3]);
        assert!(state.selection().contains(3));
    }

    #[tokio::test]
    async fn test_submit_without_location() {
        let (items, geo) = setup();
        let state = mounted(&items, &geo).await;

        let payload = state.submit();
        assert_eq!(payload.province, NONE_SELECTED);
        assert_eq!(payload.city, NONE_SELECTED);
        assert_eq!(payload.latitude, 23.1247713);
        assert!(payload.items.is_empty());
        assert_eq!(payload.email, "");
    }

    #[tokio::test]
    async fn test_offline_georef_degrades_silently() {
        let (items, _) = setup();
        let mut state = CreatePointState::new(LatLng::new(0.0, 0.0));
        assert_eq!(state.receive_items(items.list_items().await), FetchOutcome::Loaded(3));

        let outcome = state.receive_provinces(Offline.list_provinces().await);
        assert!(matches!(outcome, FetchOutcome::Failed(ApiError::Network(_))));
        assert!(state.location().provinces().is_empty());
        assert!(state.select_province("Buenos Aires").is_none());

        // The rest of the form keeps working
        state.toggle_item(2);
        state.click_map(LatLng::new(-34.6, -58.4));
        let payload = state.submit();
        assert_eq!(payload.items, vec![2]);
        assert_eq!(payload.latitude, -34.6);
    }

    #[tokio::test]
    async fn test_city_lookup_failure_keeps_province() {
        let (items, mut geo) = setup();
        geo.cities.remove("14");
        let mut state = mounted(&items, &geo).await;

        let request = state.select_province("Córdoba").unwrap();
        let outcome = state.receive_cities(&request, geo.list_cities(&request.province_id).await);
        assert_eq!(outcome, FetchOutcome::Failed(ApiError::Status(404)));
        assert_eq!(state.location().stage(), LocationStage::ProvinceSelected);
        assert_eq!(state.submit().province, "Córdoba");
    }

    #[tokio::test]
    async fn test_inputs_keyed_by_name_attribute() {
        let (items, geo) = setup();
        let mut state = mounted(&items, &geo).await;

        assert_eq!(state.set_input("whatsapp", "+54 221 555 0000"), Some(FormField::Whatsapp));
        assert_eq!(state.set_input("email", "verde@ecoleta.org"), Some(FormField::Email));
        assert_eq!(state.set_input("uf", "Buenos Aires"), None);

        assert_eq!(state.form().get(FormField::Whatsapp), "+54 221 555 0000");
        assert_eq!(state.form().get(FormField::Name), "");
        let payload = state.submit();
        assert_eq!(payload.email, "verde@ecoleta.org");
        assert_eq!(payload.province, NONE_SELECTED);
    }

    #[tokio::test]
    async fn test_failed_items_lookup() {
        let mut state = CreatePointState::new(LatLng::new(0.0, 0.0));
        let outcome = state.receive_items(Err(ApiError::Status(502)));
        assert_eq!(outcome, FetchOutcome::Failed(ApiError::Status(502)));
        assert!(state.items().is_empty());
    }
}
