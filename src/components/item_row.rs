//! Item Row Component
//!
//! One shopping-list entry: quantity control, text (click toggles
//! completion), tag chips, and a delete button.

use leptos::prelude::*;

use crate::components::{QuantityControl, TagPicker};
use crate::store::{
    store_delete_item, store_toggle_completed, store_untag_item, use_app_store, AppStateStoreFields,
};

/// A single item row
#[component]
pub fn ItemRow(item_id: u32) -> impl IntoView {
    let store = use_app_store();

    // The row outlives any one snapshot of the item, so fields are read
    // through a memo rather than captured at creation.
    let item = Memo::new(move |_| {
        store
            .items()
            .read()
            .iter()
            .find(|i| i.id == item_id)
            .cloned()
    });
    let completed = move || item.get().map(|i| i.completed).unwrap_or(false);
    let text = move || item.get().map(|i| i.text).unwrap_or_default();
    let tags = move || item.get().map(|i| i.tags).unwrap_or_default();

    view! {
        <li class="item-row">
            <QuantityControl item_id=item_id />

            <span
                class=move || if completed() { "item-text completed" } else { "item-text" }
                on:click=move |_| store_toggle_completed(&store, item_id)
            >
                {text}
            </span>

            <div class="tag-chips">
                <For
                    each=tags
                    key=|tag| tag.clone()
                    children=move |tag| {
                        let category = tag.category.clone();
                        let label = format!("{}: {}", tag.category, tag.value);
                        let title = label.clone();
                        view! {
                            <span class="tag-chip" title=title>
                                {label}
                                <button
                                    class="chip-remove-btn"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        store_untag_item(&store, item_id, &category);
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />

                <TagPicker item_id=item_id />
            </div>

            <button
                class="delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    store_delete_item(&store, item_id);
                }
            >
                "×"
            </button>
        </li>
    }
}
