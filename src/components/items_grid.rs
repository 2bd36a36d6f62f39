//! Items Grid Component
//!
//! Clickable material categories; selected ones get the `selected` class.

use leptos::prelude::*;

use ecoleta_core::Item;

#[component]
pub fn ItemsGrid(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] selected: Signal<Vec<u32>>,
    #[prop(into)] on_toggle: Callback<u32>,
) -> impl IntoView {
    view! {
        <fieldset>
            <legend>
                <h2>"Tipos de colección"</h2>
                <span>"Seleccione uno o más elementos a continuación"</span>
            </legend>
            <ul class="items-grid">
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item: Item| {
                        let id = item.id;
                        let is_selected = move || selected.with(|ids| ids.contains(&id));
                        view! {
                            <li
                                class=move || if is_selected() { "selected" } else { "" }
                                on:click=move |_| on_toggle.run(id)
                            >
                                <img src=item.image_url alt=item.title.clone() />
                                <span>{item.title}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </fieldset>
    }
}
