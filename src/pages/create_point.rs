//! CreatePoint Page
//!
//! Registration form. All state lives in one `CreatePointState` signal and
//! only changes through its transitions; lookups are spawned here and their
//! results fed back in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use ecoleta_core::api::{GeoRefApi, ItemsApi};
use ecoleta_core::{CreatePointState, LatLng, NONE_SELECTED};

use crate::components::{ContactFields, ItemsGrid, LocationFields, PageHeader, PointMap};
use crate::context::use_app_context;
use crate::geolocation;

#[component]
pub fn CreatePoint() -> impl IntoView {
    let ctx = use_app_context();
    let map_zoom = ctx.config.map_zoom;
    let state = RwSignal::new(CreatePointState::new(ctx.config.default_center));

    // Device position (best effort)
    Effect::new(move |_| {
        geolocation::request_current_position(move |position| {
            log::info!("[CreatePoint] Device position {:.5}, {:.5}", position.lat, position.lon);
            state.try_update(|s| s.apply_device_position(position));
        });
    });

    // Items
    let items_ctx = ctx.clone();
    Effect::new(move |_| {
        let api = items_ctx.items_api();
        spawn_local(async move {
            let result = api.list_items().await;
            state.try_update(|s| s.receive_items(result).log("items"));
        });
    });

    // Provinces
    let provinces_ctx = ctx.clone();
    Effect::new(move |_| {
        let api = provinces_ctx.georef_api();
        spawn_local(async move {
            let result = api.list_provinces().await;
            state.try_update(|s| s.receive_provinces(result).log("provinces"));
        });
    });

    // Province change → cities of that province
    let cities_ctx = ctx.clone();
    let on_province = Callback::new(move |name: String| {
        let Some(request) = state.try_update(|s| s.select_province(&name)).flatten() else {
            return;
        };
        log::info!("[CreatePoint] Loading cities of province {}", request.province_id);
        let api = cities_ctx.georef_api();
        spawn_local(async move {
            let result = api.list_cities(&request.province_id).await;
            state.try_update(|s| s.receive_cities(&request, result).log("cities"));
        });
    });

    let on_city = Callback::new(move |name: String| state.update(|s| s.select_city(&name)));
    let on_map_click = Callback::new(move |position: LatLng| state.update(|s| s.click_map(position)));
    let on_toggle = Callback::new(move |id: u32| state.update(|s| s.toggle_item(id)));
    let on_input = Callback::new(move |(name, value): (String, String)| {
        if state.try_update(|s| s.set_input(&name, value)).flatten().is_none() {
            log::warn!("[CreatePoint] Ignoring input for unknown field {}", name);
        }
    });

    // Derived views of the state
    let form = Memo::new(move |_| state.with(|s| s.form().clone()));
    let items = Memo::new(move |_| state.with(|s| s.items().to_vec()));
    let selected_items = Memo::new(move |_| state.with(|s| s.selection().ids().to_vec()));
    let provinces = Memo::new(move |_| state.with(|s| s.location().provinces().to_vec()));
    let cities = Memo::new(move |_| state.with(|s| s.location().cities().to_vec()));
    let selected_province = Memo::new(move |_| state.with(|s| {
        s.location().selected_province().map_or_else(|| NONE_SELECTED.to_string(), |p| p.name.clone())
    }));
    let selected_city = Memo::new(move |_| state.with(|s| {
        s.location().selected_city().unwrap_or(NONE_SELECTED).to_string()
    }));
    let cities_loading = Memo::new(move |_| state.with(|s| s.location().cities_loading()));
    let focus = Memo::new(move |_| state.with(|s| s.location().focus()));
    let pin = Memo::new(move |_| state.with(|s| s.location().selected_position()));

    let navigate = use_navigate();
    let persist_points = ctx.config.persist_points;
    let submit_ctx = ctx.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = state.with_untracked(|s| s.submit());
        log::info!(
            "[CreatePoint] Submitting point: {}",
            serde_json::to_string(&payload).unwrap_or_default()
        );

        if persist_points {
            let api = submit_ctx.items_api();
            spawn_local(async move {
                match api.create_point(&payload).await {
                    Ok(()) => log::info!("[CreatePoint] Point saved"),
                    Err(err) => log::error!("[CreatePoint] Point not saved: {}", err),
                }
            });
        }

        navigate("/success", Default::default());
    };

    view! {
        <div id="page-create-point">
            <PageHeader back_home=true />

            <form on:submit=on_submit>
                <h1>"Registro de " <br /> "punto de recogida"</h1>

                <ContactFields form=form on_input=on_input />

                <fieldset>
                    <legend>
                        <h2>"Ubicación"</h2>
                        <span>"Elige la ubicación en el mapa"</span>
                    </legend>

                    <PointMap focus=focus pin=pin zoom=map_zoom on_click=on_map_click />

                    <LocationFields
                        provinces=provinces
                        cities=cities
                        selected_province=selected_province
                        selected_city=selected_city
                        cities_loading=cities_loading
                        on_province=on_province
                        on_city=on_city
                    />
                </fieldset>

                <ItemsGrid items=items selected=selected_items on_toggle=on_toggle />

                <div id="buttonLink">
                    <button type="submit">"Registrar punto de recogida"</button>
                </div>
            </form>
        </div>
    }
}
