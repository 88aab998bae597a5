//! New Item Form Component
//!
//! Text input plus Add button; Enter submits through the form element.
//! The pending text lives in the store and is cleared when an item is added.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_add_item, store_set_input_value, use_app_store, AppStateStoreFields};

/// Form for adding items to the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = store.input_value().get();
        store_add_item(&store, &text);
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Add an item..."
                prop:value=move || store.input_value().get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    store_set_input_value(&store, input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
