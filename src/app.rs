//! EcoLeta Frontend App
//!
//! Client-side routes: Home, CreatePoint and Success.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use ecoleta_core::AppConfig;

use crate::context::AppContext;
use crate::pages::{CreatePoint, Home, Success};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("[APP] Items API at {}, georef at {}", config.api_url, config.georef_url);
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Home />
                <Route path=path!("/create-point") view=CreatePoint />
                <Route path=path!("/success") view=Success />
            </Routes>
        </Router>
    }
}

/// Unknown route
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="wrap">
            <div class="content">
                <h1>"404"</h1>
                <A href="/">"Volver para home"</A>
            </div>
        </div>
    }
}
