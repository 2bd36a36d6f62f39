//! Success Page
//!
//! Shown after every submission.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Success() -> impl IntoView {
    view! {
        <div class="wrap">
            <div class="content">
                <span class="success-icon">"✓"</span>
                <A href="/">
                    <span class="arrow-left">"←"</span>
                    <h1>"Registrado con éxito!"</h1>
                </A>
            </div>
        </div>
    }
}
