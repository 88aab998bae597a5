//! Item List Component
//!
//! Rows are keyed by item id; each row reads its own fields from the store,
//! so in-place edits (quantity, tags) update without tearing down the row's
//! DOM nodes.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// The shopping list itself
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    let ids = move || {
        store
            .items()
            .read()
            .iter()
            .map(|item| item.id)
            .collect::<Vec<_>>()
    };

    view! {
        <ul class="item-list">
            <For
                each=ids
                key=|id| *id
                children=move |id| view! { <ItemRow item_id=id /> }
            />
        </ul>
    }
}
