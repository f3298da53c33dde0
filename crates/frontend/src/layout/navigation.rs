use leptos::prelude::*;
use leptos_router::components::A;

/// Top navigation bar linking the two entity pages.
#[component]
pub fn Navigation() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/productos" attr:class="navbar__link">
                "Productos"
            </A>
            <A href="/categorias" attr:class="navbar__link">
                "Categorías"
            </A>
        </nav>
    }
}
