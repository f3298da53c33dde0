use contracts::domain::category::Category;
use leptos::prelude::*;

use super::form::CategoriaForm;
use super::list::CategoriaList;
use crate::shared::edit_target::EditTarget;

/// Category management page. Holds the only two pieces of page state:
/// which record is being edited and the list invalidation counter.
#[component]
pub fn CategoriaPage() -> impl IntoView {
    let edit_target = RwSignal::new(EditTarget::<Category>::Creating);
    let refresh = RwSignal::new(0u32);

    let handle_success = Callback::new(move |_| {
        edit_target.set(EditTarget::Creating);
        refresh.update(|n| *n += 1);
    });
    // Cancel clears the edit state without forcing a refetch.
    let handle_cancel = Callback::new(move |_| edit_target.set(EditTarget::Creating));
    let handle_edit = Callback::new(move |record: Category| {
        edit_target.set(EditTarget::Editing(record));
    });

    view! {
        <div class="page categoria-page">
            <h1 class="page__title">"Gestión de Categorías"</h1>
            <CategoriaForm
                edit_target=edit_target
                on_success=handle_success
                on_cancel=handle_cancel
            />
            <CategoriaList refresh=refresh on_edit=handle_edit />
        </div>
    }
}
