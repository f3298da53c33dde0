use crate::domain::categories::ui::CategoriaPage;
use crate::domain::products::ui::ProductoPage;
use crate::layout::navigation::Navigation;
use crate::system::auth::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navigation />
            <main class="container">
                <Routes fallback=|| view! { <p class="not-found">"Página no encontrada"</p> }>
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/categorias") view=CategoriaPage />
                    <Route path=path!("/productos") view=ProductoPage />
                    <Route path=path!("/") view=ProductoPage />
                </Routes>
            </main>
        </Router>
    }
}
