//! Tag Picker Component
//!
//! Per-item "+ Add" button that expands into a two-step picker: a category
//! select (only categories with at least one value), then a value select.
//! Only one item's picker is open at a time, tracked by AppContext.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_tag_item, use_app_store, AppStateStoreFields};

/// Category/value picker for one item
#[component]
pub fn TagPicker(item_id: u32) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (picked_category, set_picked_category) = signal(String::new());

    let open = move || ctx.tagging_item.get() == Some(item_id);

    // Categories with no values have nothing to attach
    let selectable = move || {
        store
            .categories()
            .read()
            .iter()
            .filter(|c| !c.values.is_empty())
            .map(|c| c.name.clone())
            .collect::<Vec<_>>()
    };

    let values = move || {
        let picked = picked_category.get();
        store
            .categories()
            .read()
            .iter()
            .find(|c| c.name == picked)
            .map(|c| c.values.clone())
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    let close = move || {
        set_picked_category.set(String::new());
        ctx.close_tag_picker();
    };

    view! {
        {move || if open() {
            view! {
                <span class="tag-picker">
                    <select
                        class="category-select"
                        on:change=move |ev| set_picked_category.set(event_target_value(&ev))
                    >
                        <option value="">"Select a category"</option>
                        <For
                            each=selectable
                            key=|name| name.clone()
                            children=move |name| {
                                let value = name.clone();
                                view! { <option value=value>{name}</option> }
                            }
                        />
                    </select>

                    {move || if picked_category.get().is_empty() {
                        view! { <span></span> }.into_any()
                    } else {
                        view! {
                            <select
                                class="value-select"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    if !value.is_empty() {
                                        let category = picked_category.get();
                                        store_tag_item(&store, item_id, &category, &value);
                                        close();
                                    }
                                }
                            >
                                <option value="">"Select a value"</option>
                                <For
                                    each=values
                                    key=|(index, value)| (*index, value.clone())
                                    children=move |(_, value)| {
                                        let attr = value.clone();
                                        view! { <option value=attr>{value}</option> }
                                    }
                                />
                            </select>
                        }.into_any()
                    }}

                    <button class="cancel-btn" on:click=move |_| close()>"×"</button>
                </span>
            }.into_any()
        } else {
            view! {
                <button
                    class="add-tag-btn"
                    title="Add category value"
                    on:click=move |_| ctx.open_tag_picker(item_id)
                >
                    "+ Add"
                </button>
            }.into_any()
        }}
    }
}
