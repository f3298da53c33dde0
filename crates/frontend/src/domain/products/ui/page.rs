use contracts::domain::product::Product;
use leptos::prelude::*;

use super::form::ProductoForm;
use super::list::ProductoList;
use crate::shared::edit_target::EditTarget;

/// Product management page. Holds the only two pieces of page state:
/// which record is being edited and the list invalidation counter.
#[component]
pub fn ProductoPage() -> impl IntoView {
    let edit_target = RwSignal::new(EditTarget::<Product>::Creating);
    let refresh = RwSignal::new(0u32);

    let handle_success = Callback::new(move |_| {
        edit_target.set(EditTarget::Creating);
        refresh.update(|n| *n += 1);
    });
    // Cancel clears the edit state without forcing a refetch.
    let handle_cancel = Callback::new(move |_| edit_target.set(EditTarget::Creating));
    let handle_edit = Callback::new(move |record: Product| {
        edit_target.set(EditTarget::Editing(record));
    });

    view! {
        <div class="page producto-page">
            <h1 class="page__title">"Gestión de Productos"</h1>
            <ProductoForm
                edit_target=edit_target
                on_success=handle_success
                on_cancel=handle_cancel
            />
            <ProductoList refresh=refresh on_edit=handle_edit />
        </div>
    }
}
