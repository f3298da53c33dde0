use contracts::domain::category::{Category, CategoryDraft};
use leptos::prelude::*;

use crate::domain::categories::api;
use crate::shared::edit_target::EditTarget;
use crate::shared::notice::flash_success;

/// Create/edit form for one category. The mode follows the edit target
/// supplied by the page coordinator; the draft survives failed submissions.
#[component]
pub fn CategoriaForm(
    #[prop(into)] edit_target: Signal<EditTarget<Category>>,
    #[prop(into)] on_success: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(CategoryDraft::default());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let editing = Memo::new(move |_| edit_target.get().is_editing());

    // Repopulate the draft whenever the coordinator switches the target.
    Effect::new(move |_| match edit_target.get() {
        EditTarget::Editing(record) => {
            draft.set(CategoryDraft::from_record(&record));
            error.set(None);
            success.set(None);
        }
        EditTarget::Creating => {
            draft.set(CategoryDraft::default());
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
                    .map(|_| "Categoría actualizada correctamente"),
                None => api::create(&payload)
                    .await
                    .map(|_| "Categoría creada correctamente"),
            };
            saving.set(false);
            match result {
                Ok(message) => {
                    if editing_id.is_none() {
                        // Create mode stays in create mode, ready for the next entry.
                        draft.set(CategoryDraft::default());
                    }
                    flash_success(success, message);
                    on_success.run(());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="panel categoria-form">
            <h3 class="panel__title">
                {move || if editing.get() { "Editar Categoría" } else { "Nueva Categoría" }}
            </h3>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || success.get().map(|m| view! { <div class="alert alert--success">{m}</div> })}

            <form on:submit=submit>
                <div class="form-group">
                    <label for="categoria-nombre">"Nombre"</label>
                    <input
                        type="text"
                        id="categoria-nombre"
                        prop:value=move || draft.get().nombre
                        on:input=move |ev| draft.update(|d| d.nombre = event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="categoria-tipo">"Tipo"</label>
                    <select
                        id="categoria-tipo"
                        prop:value=move || draft.get().tipo
                        on:change=move |ev| draft.update(|d| d.tipo = event_target_value(&ev))
                        disabled=move || saving.get()
                    >
                        <option value="">"Seleccione un tipo"</option>
                        <option value="PRODUCTO">"Producto"</option>
                        <option value="GASTO">"Gasto"</option>
                    </select>
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
