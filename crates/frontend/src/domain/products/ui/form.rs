use contracts::domain::category::{product_categories, Category};
use contracts::domain::product::{Product, ProductDraft};
use leptos::prelude::*;

use crate::domain::categories::api as categories_api;
use crate::domain::products::api;
use crate::shared::edit_target::EditTarget;
use crate::shared::notice::flash_success;

/// Create/edit form for one product.
///
/// Loads the category options on its own when mounted and narrows them to
/// tipo PRODUCTO; a failed category fetch shows an inline error but leaves
/// the rest of the form usable.
#[component]
pub fn ProductoForm(
    #[prop(into)] edit_target: Signal<EditTarget<Product>>,
    #[prop(into)] on_success: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(ProductDraft::default());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let categorias = RwSignal::new(Vec::<Category>::new());
    let categorias_loading = RwSignal::new(true);
    let categorias_error = RwSignal::new(None::<String>);

    let editing = Memo::new(move |_| edit_target.get().is_editing());

    // Independent category fetch; only PRODUCTO categories are selectable.
    wasm_bindgen_futures::spawn_local(async move {
        match categories_api::list().await {
            Ok(all) => categorias.set(product_categories(all)),
            Err(_) => categorias_error.set(Some("Error al cargar categorías".to_string())),
        }
        categorias_loading.set(false);
    });

    // Repopulate the draft whenever the coordinator switches the target.
    Effect::new(move |_| match edit_target.get() {
        EditTarget::Editing(record) => {
            draft.set(ProductDraft::from_record(&record));
            error.set(None);
            success.set(None);
        }
        EditTarget::Creating => {
            draft.set(ProductDraft::default());
            error.set(None);
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        error.set(None);

        // Validation happens before any network call.
        let payload = match draft.get_untracked().validate() {
            Ok(payload) => payload,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        let editing_id = match edit_target.get_untracked() {
            EditTarget::Editing(record) => match record.id {
                Some(id) => Some(id),
                None => {
                    error.set(Some("Registro sin identificador".to_string()));
                    return;
                }
            },
            EditTarget::Creating => None,
        };

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update(id, &payload)
                    .await
                    .map(|_| "Producto actualizado correctamente"),
                None => api::create(&payload)
                    .await
                    .map(|_| "Producto creado correctamente"),
            };
            saving.set(false);
            match result {
                Ok(message) => {
                    if editing_id.is_none() {
                        draft.set(ProductDraft::default());
                    }
                    flash_success(success, message);
                    on_success.run(());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="panel producto-form">
            <h3 class="panel__title">
                {move || if editing.get() { "Editar Producto" } else { "Nuevo Producto" }}
            </h3>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || success.get().map(|m| view! { <div class="alert alert--success">{m}</div> })}

            <form on:submit=submit>
                <div class="form-group">
                    <label for="producto-nombre">"Nombre"</label>
                    <input
                        type="text"
                        id="producto-nombre"
                        prop:value=move || draft.get().nombre
                        on:input=move |ev| draft.update(|d| d.nombre = event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="producto-referencia">"Referencia"</label>
                    <input
                        type="text"
                        id="producto-referencia"
                        prop:value=move || draft.get().referencia
                        on:input=move |ev| draft.update(|d| d.referencia = event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="producto-valor-compra">"Valor Compra ($)"</label>
                        <input
                            type="number"
                            id="producto-valor-compra"
                            min="0.01"
                            step="0.01"
                            prop:value=move || draft.get().valor_compra
                            on:input=move |ev| {
                                draft.update(|d| d.valor_compra = event_target_value(&ev))
                            }
                            disabled=move || saving.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="producto-valor-venta">"Valor Venta ($)"</label>
                        <input
                            type="number"
                            id="producto-valor-venta"
                            min="0.01"
                            step="0.01"
                            prop:value=move || draft.get().valor_venta
                            on:input=move |ev| {
                                draft.update(|d| d.valor_venta = event_target_value(&ev))
                            }
                            disabled=move || saving.get()
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="producto-cantidad">"Cantidad"</label>
                    <input
                        type="number"
                        id="producto-cantidad"
                        min="0"
                        step="1"
                        prop:value=move || draft.get().cantidad
                        on:input=move |ev| draft.update(|d| d.cantidad = event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="producto-categoria">"Categoría"</label>
                    {move || {
                        if categorias_loading.get() {
                            return view! {
                                <div class="loading loading--inline">
                                    <span class="spinner"></span>
                                </div>
                            }
                            .into_any();
                        }
                        view! {
                            <div>
                                {move || {
                                    categorias_error
                                        .get()
                                        .map(|e| view! { <div class="alert alert--error">{e}</div> })
                                }}
                                <select
                                    id="producto-categoria"
                                    prop:value=move || draft.get().categoria_id
                                    on:change=move |ev| {
                                        draft.update(|d| d.categoria_id = event_target_value(&ev))
                                    }
                                    disabled=move || saving.get()
                                >
                                    <option value="">"Seleccione categoría"</option>
                                    {move || {
                                        categorias
                                            .get()
                                            .into_iter()
                                            .map(|cat| {
                                                let value = cat
                                                    .id
                                                    .map(|id| id.to_string())
                                                    .unwrap_or_default();
                                                view! {
                                                    <option value=value>{cat.nombre}</option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </div>
                        }
                        .into_any()
                    }}
                </div>

                <div class="form-group form-group--checkbox">
                    <label for="producto-aplica-ganancia">
                        <input
                            type="checkbox"
                            id="producto-aplica-ganancia"
                            prop:checked=move || draft.get().aplica_ganancia
                            on:change=move |ev| {
                                draft.update(|d| d.aplica_ganancia = event_target_checked(&ev))
                            }
                            disabled=move || saving.get()
                        />
                        "Aplica Ganancia Especial"
                    </label>
                </div>

                <div class="form-actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || saving.get()
                    >
                        {move || match (saving.get(), editing.get()) {
                            (true, true) => "Actualizando...",
                            (true, false) => "Guardando...",
                            (false, true) => "Actualizar",
                            (false, false) => "Guardar",
                        }}
                    </button>
                    <Show when=move || editing.get()>
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancelar"
                        </button>
                    </Show>
                </div>
            </form>
        </div>
    }
}
