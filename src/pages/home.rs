//! Home Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::PageHeader;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div id="page-home">
            <div class="content">
                <PageHeader />
                <main>
                    <h1>"Su mercado de recolección de residuos."</h1>
                    <p>"Ayudamos a las personas a encontrar puntos de recogida de manera eficiente."</p>
                    <A href="/create-point">
                        <span>"→"</span>
                        <strong>"Registrar un punto de recogida"</strong>
                    </A>
                </main>
            </div>
        </div>
    }
}
