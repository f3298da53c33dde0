use contracts::domain::category::Category;
use leptos::prelude::*;

use crate::domain::categories::api;

/// Category list. Reloads the whole collection on mount and whenever the
/// coordinator bumps the refresh signal; row deletes refetch on their own.
#[component]
pub fn CategoriaList(
    #[prop(into)] refresh: Signal<u32>,
    #[prop(into)] on_edit: Callback<Category>,
) -> impl IntoView {
    let items = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let fetch = move || {
        loading.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::list().await {
                Ok(data) => items.set(data),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        refresh.track();
        fetch();
    });

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("¿Está seguro de eliminar esta categoría?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(id).await {
                Ok(_) => fetch(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="panel categoria-list">
            <h3 class="panel__title">"Lista de Categorías"</h3>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || {
                if loading.get() {
                    return view! {
                        <div class="loading">
                            <span class="spinner"></span>
                            <p>"Cargando categorías..."</p>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"ID"</th>
                                <th class="table__header-cell">"Nombre"</th>
                                <th class="table__header-cell">"Tipo"</th>
                                <th class="table__header-cell">"Acciones"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = items.get();
                                if rows.is_empty() {
                                    return view! {
                                        <tr>
                                            <td colspan="4" class="table__cell table__cell--empty">
                                                "No hay categorías registradas"
                                            </td>
                                        </tr>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|categoria| {
                                        let id = categoria.id;
                                        let nombre = categoria.nombre.clone();
                                        let tipo = categoria.tipo;
                                        let record = categoria;
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{id}</td>
                                                <td class="table__cell">{nombre}</td>
                                                <td class="table__cell">{tipo.as_str()}</td>
                                                <td class="table__cell">
                                                    <button
                                                        class="button button--warning button--sm"
                                                        on:click=move |_| on_edit.run(record.clone())
                                                    >
                                                        "Editar"
                                                    </button>
                                                    <button
                                                        class="button button--danger button--sm"
                                                        on:click=move |_| {
                                                            if let Some(id) = id {
                                                                handle_delete(id);
                                                            }
                                                        }
                                                    >
                                                        "Eliminar"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}
