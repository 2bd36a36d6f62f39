//! Device Geolocation
//!
//! One-shot `navigator.geolocation.getCurrentPosition`. Failures are ignored.

use ecoleta_core::LatLng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Ask the browser for the current position once; `on_position` runs on success only
pub fn request_current_position(on_position: impl FnOnce(LatLng) + 'static) {
    let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) else {
        log::warn!("[GEO] Geolocation not available");
        return;
    };

    let callback = Closure::once_into_js(move |position: JsValue| {
        match read_coords(&position) {
            Some(latlng) => on_position(latlng),
            None => log::warn!("[GEO] Position without coordinates"),
        }
    });

    if let Err(err) = geolocation.get_current_position(callback.unchecked_ref()) {
        log::warn!("[GEO] getCurrentPosition failed: {:?}", err);
    }
}

fn read_coords(position: &JsValue) -> Option<LatLng> {
    let coords = js_sys::Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    let lat = js_sys::Reflect::get(&coords, &JsValue::from_str("latitude")).ok()?.as_f64()?;
    let lon = js_sys::Reflect::get(&coords, &JsValue::from_str("longitude")).ok()?.as_f64()?;
    Some(LatLng::new(lat, lon))
}
