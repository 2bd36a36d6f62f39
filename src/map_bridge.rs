//! Leaflet Bridge
//!
//! Bindings to `public/map_bridge.js`, which owns the Leaflet map instance.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Create the map inside `container_id`; `on_click` receives `(lat, lon)`
    #[wasm_bindgen(js_namespace = ecoletaMap, js_name = init)]
    pub fn init_map(container_id: &str, lat: f64, lon: f64, zoom: u8, on_click: &Closure<dyn FnMut(f64, f64)>);

    #[wasm_bindgen(js_namespace = ecoletaMap, js_name = setCenter)]
    pub fn set_center(lat: f64, lon: f64);

    #[wasm_bindgen(js_namespace = ecoletaMap, js_name = setMarker)]
    pub fn set_marker(lat: f64, lon: f64);

    #[wasm_bindgen(js_namespace = ecoletaMap, js_name = destroy)]
    pub fn destroy_map();
}
