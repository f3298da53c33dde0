use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Stub login screen. There is no real session protocol yet; the form waits
/// a moment and navigates to the products page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let navigate = use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        let navigate = navigate.clone();
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(1_000).await;
            navigate("/productos", Default::default());
        });
    };

    view! {
        <div class="panel login-form">
            <h3 class="panel__title">"Iniciar Sesión"</h3>

            <form on:submit=submit>
                <div class="form-group">
                    <label for="login-usuario">"Usuario"</label>
                    <input
                        type="text"
                        id="login-usuario"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                        disabled=move || loading.get()
                    />
                </div>

                <div class="form-group">
                    <label for="login-contrasena">"Contraseña"</label>
                    <input
                        type="password"
                        id="login-contrasena"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        disabled=move || loading.get()
                    />
                </div>

                <button
                    type="submit"
                    class="button button--primary button--block"
                    disabled=move || loading.get()
                >
                    {move || if loading.get() { "Ingresando..." } else { "Ingresar" }}
                </button>
            </form>
        </div>
    }
}
