//! Location Fields Component
//!
//! Province and city selects. Option values are display names; `"0"` is the
//! empty choice.

use leptos::prelude::*;

use ecoleta_core::{City, Province, NONE_SELECTED};

#[component]
pub fn LocationFields(
    #[prop(into)] provinces: Signal<Vec<Province>>,
    #[prop(into)] cities: Signal<Vec<City>>,
    #[prop(into)] selected_province: Signal<String>,
    #[prop(into)] selected_city: Signal<String>,
    #[prop(into)] cities_loading: Signal<bool>,
    #[prop(into)] on_province: Callback<String>,
    #[prop(into)] on_city: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="field-group">
            <div class="field">
                <label for="uf">"Provincia"</label>
                <select
                    name="uf"
                    id="uf"
                    prop:value=move || selected_province.get()
                    on:change=move |ev| on_province.run(event_target_value(&ev))
                >
                    <option value=NONE_SELECTED>"Elige una provincia"</option>
                    <For
                        each=move || provinces.get()
                        key=|province| province.id.clone()
                        children=move |province: Province| {
                            let value = province.name.clone();
                            view! { <option value=value>{province.name}</option> }
                        }
                    />
                </select>
            </div>
            <div class="field">
                <label for="city">"Ciudad"</label>
                <select
                    name="city"
                    id="city"
                    prop:value=move || selected_city.get()
                    on:change=move |ev| on_city.run(event_target_value(&ev))
                >
                    <option value=NONE_SELECTED>
                        {move || if cities_loading.get() { "Cargando ciudades..." } else { "Elige una ciudad" }}
                    </option>
                    <For
                        each=move || cities.get()
                        key=|city| city.id.clone()
                        children=move |city: City| {
                            let value = city.name.clone();
                            view! { <option value=value>{city.name}</option> }
                        }
                    />
                </select>
            </div>
        </div>
    }
}
