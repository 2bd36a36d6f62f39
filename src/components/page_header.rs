//! Page Header Component
//!
//! Logo bar with an optional link back home.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PageHeader(#[prop(optional)] back_home: bool) -> impl IntoView {
    view! {
        <header>
            {back_home.then(|| view! {
                <A href="/">
                    <span class="arrow-left">"←"</span>
                    <p>"Volver para home"</p>
                </A>
            })}
            <img src="/assets/logo.svg" alt="EcoLeta" />
        </header>
    }
}
