//! Contact Fields Component
//!
//! Name, email and whatsapp inputs of the registration form.
//! Inputs report `(name attribute, value)`; the page maps the name back to a
//! [`FormField`].

use leptos::prelude::*;

use ecoleta_core::{FormData, FormField};

fn field_view(
    field: FormField,
    label: &'static str,
    input_type: &'static str,
    form: Signal<FormData>,
    on_input: Callback<(String, String)>,
) -> impl IntoView {
    let name = field.as_str();
    view! {
        <div class="field">
            <label for=name>{label}</label>
            <input
                type=input_type
                name=name
                id=name
                prop:value=move || form.with(|data| data.get(field).to_string())
                on:input=move |ev| {
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    on_input.run((input.name(), input.value()));
                }
            />
        </div>
    }
}

#[component]
pub fn ContactFields(
    #[prop(into)] form: Signal<FormData>,
    #[prop(into)] on_input: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <fieldset>
            <legend>
                <h2>"Datos"</h2>
            </legend>

            {field_view(FormField::Name, "Nombre de la entidad", "text", form, on_input)}

            <div class="field-group">
                {field_view(FormField::Email, "Email", "email", form, on_input)}
                {field_view(FormField::Whatsapp, "Whatsapp", "text", form, on_input)}
            </div>
        </fieldset>
    }
}
