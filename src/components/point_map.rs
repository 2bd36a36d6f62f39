//! Point Map Component
//!
//! Leaflet map following `focus`, with a marker on `pin`.
//! Clicks are reported through `on_click`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use ecoleta_core::LatLng;

use crate::map_bridge;

const MAP_CONTAINER_ID: &str = "point-map";

#[component]
pub fn PointMap(
    #[prop(into)] focus: Signal<LatLng>,
    #[prop(into)] pin: Signal<LatLng>,
    zoom: u8,
    #[prop(into)] on_click: Callback<LatLng>,
) -> impl IntoView {
    // Owned here so unmounting drops it after the map is gone
    let click_handler = StoredValue::new_local(None::<Closure<dyn FnMut(f64, f64)>>);

    // First run creates the map, later runs only push what changed
    Effect::new(move |prev: Option<(LatLng, LatLng)>| {
        let center = focus.get();
        let marker = pin.get();
        match prev {
            None => {
                let handler = Closure::<dyn FnMut(f64, f64)>::new(move |lat: f64, lon: f64| {
                    on_click.run(LatLng::new(lat, lon));
                });
                map_bridge::init_map(MAP_CONTAINER_ID, center.lat, center.lon, zoom, &handler);
                click_handler.set_value(Some(handler));
                map_bridge::set_marker(marker.lat, marker.lon);
            }
            Some((prev_center, prev_marker)) => {
                if prev_center != center {
                    map_bridge::set_center(center.lat, center.lon);
                }
                if prev_marker != marker {
                    map_bridge::set_marker(marker.lat, marker.lon);
                }
            }
        }
        (center, marker)
    });

    on_cleanup(move || {
        map_bridge::destroy_map();
        click_handler.try_update_value(|handler| handler.take());
    });

    view! { <div id=MAP_CONTAINER_ID class="point-map"></div> }
}
