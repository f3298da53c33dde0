use contracts::domain::product::Product;
use leptos::prelude::*;

use crate::domain::products::api;
use crate::shared::format::format_cop;

/// Product list. Reloads the whole collection on mount and whenever the
/// coordinator bumps the refresh signal; row deletes refetch on their own.
#[component]
pub fn ProductoList(
    #[prop(into)] refresh: Signal<u32>,
    #[prop(into)] on_edit: Callback<Product>,
) -> impl IntoView {
    let items = RwSignal::new(Vec::<Product>::new());
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
                w.confirm_with_message("¿Está seguro de eliminar este producto?")
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
        <div class="panel producto-list">
            <h3 class="panel__title">"Lista de Productos"</h3>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || {
                if loading.get() {
                    return view! {
                        <div class="loading">
                            <span class="spinner"></span>
                            <p>"Cargando productos..."</p>
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
                                <th class="table__header-cell">"Referencia"</th>
                                <th class="table__header-cell">"Categoría"</th>
                                <th class="table__header-cell">"Precio Compra"</th>
                                <th class="table__header-cell">"Precio Venta"</th>
                                <th class="table__header-cell">"Stock"</th>
                                <th class="table__header-cell">"Ganancia"</th>
                                <th class="table__header-cell">"Acciones"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = items.get();
                                if rows.is_empty() {
                                    return view! {
                                        <tr>
                                            <td colspan="9" class="table__cell table__cell--empty">
                                                "No hay productos registrados"
                                            </td>
                                        </tr>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|producto| {
                                        let id = producto.id;
                                        let nombre = producto.nombre.clone();
                                        let referencia = producto.referencia.clone();
                                        let categoria = producto
                                            .categoria
                                            .as_ref()
                                            .and_then(|c| c.nombre.clone())
                                            .unwrap_or_else(|| "N/A".to_string());
                                        let compra = format_cop(producto.valor_compra);
                                        let venta = format_cop(producto.valor_venta);
                                        let cantidad = producto.cantidad;
                                        let aplica_ganancia = producto.aplica_ganancia;
                                        let record = producto;
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{id}</td>
                                                <td class="table__cell">{nombre}</td>
                                                <td class="table__cell">{referencia}</td>
                                                <td class="table__cell">{categoria}</td>
                                                <td class="table__cell">{compra}</td>
                                                <td class="table__cell">{venta}</td>
                                                <td class="table__cell">
                                                    <span class={if cantidad > 0 {
                                                        "badge badge--success"
                                                    } else {
                                                        "badge badge--danger"
                                                    }}>{cantidad}</span>
                                                </td>
                                                <td class="table__cell">
                                                    <span class=if aplica_ganancia {
                                                        "badge badge--warning"
                                                    } else {
                                                        "badge badge--primary"
                                                    }>
                                                        {if aplica_ganancia { "Sí" } else { "No" }}
                                                    </span>
                                                </td>
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
