//! Category Panel Component
//!
//! Management panel for user-defined categories: add, rename, delete, and
//! the per-category value lists. Renames go through the shared edit state in
//! the store, so only one field is ever open at a time.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{
    store_add_category, store_add_value, store_begin_edit, store_cancel_edit, store_commit_edit,
    store_delete_category, store_delete_value, store_set_edit_text, use_app_store,
    AppStateStoreFields, EditTarget,
};

/// Input bound to the store's shared rename state
#[component]
fn EditField() -> impl IntoView {
    let store = use_app_store();

    let input_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <input
            type="text"
            class="edit-input"
            node_ref=input_ref
            prop:value=move || store.edit_text().get()
            on:input=move |ev| {
                let target = ev.target().unwrap();
                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                store_set_edit_text(&store, input.value());
            }
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                match ev.key().as_str() {
                    "Enter" => {
                        ev.prevent_default();
                        store_commit_edit(&store);
                    }
                    "Escape" => store_cancel_edit(&store),
                    _ => {}
                }
            }
            on:blur=move |_| store_commit_edit(&store)
        />
    }
}

/// Form for adding a category
#[component]
fn CategoryAddForm() -> impl IntoView {
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());

    let add_category = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.trim().is_empty() {
            return;
        }
        store_add_category(&store, &name);
        set_new_name.set(String::new());
    };

    view! {
        <form class="category-add-form" on:submit=add_category>
            <input
                type="text"
                placeholder="Add category..."
                prop:value=move || new_name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_name.set(input.value());
                }
            />
            <button type="submit">"+"</button>
        </form>
    }
}

/// One value row: click the label to rename, × to delete
#[component]
fn ValueRow(category: String, index: usize, value: String) -> impl IntoView {
    let store = use_app_store();

    let editing_this = {
        let category = category.clone();
        move || {
            matches!(
                store.editing().get(),
                Some(EditTarget::Value(ref c, i)) if *c == category && i == index
            )
        }
    };

    let begin = {
        let category = category.clone();
        let value = value.clone();
        move |_: web_sys::MouseEvent| {
            store_begin_edit(&store, EditTarget::Value(category.clone(), index), &value)
        }
    };

    let remove = move |_| store_delete_value(&store, &category, index);

    view! {
        <li class="value-row">
            {move || if editing_this() {
                view! { <EditField /> }.into_any()
            } else {
                view! {
                    <span class="value-label" on:click=begin.clone()>
                        {value.clone()}
                    </span>
                }.into_any()
            }}
            <button class="value-delete-btn" on:click=remove>"×"</button>
        </li>
    }
}

/// One category: name row plus its value list and add-value form
#[component]
fn CategoryCard(name: String) -> impl IntoView {
    let store = use_app_store();

    let (new_value, set_new_value) = signal(String::new());

    let values = {
        let name = name.clone();
        move || {
            store
                .categories()
                .read()
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.values.clone())
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .collect::<Vec<_>>()
        }
    };

    let editing_name = {
        let name = name.clone();
        move || {
            matches!(
                store.editing().get(),
                Some(EditTarget::Category(ref n)) if *n == name
            )
        }
    };

    let begin_rename = {
        let name = name.clone();
        move |_: web_sys::MouseEvent| {
            store_begin_edit(&store, EditTarget::Category(name.clone()), &name)
        }
    };

    let delete = {
        let name = name.clone();
        move |_| store_delete_category(&store, &name)
    };

    let add_value = {
        let name = name.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            store_add_value(&store, &name, &new_value.get());
            set_new_value.set(String::new());
        }
    };

    let label = name.clone();
    view! {
        <div class="category-card">
            <div class="category-header">
                {move || if editing_name() {
                    view! { <EditField /> }.into_any()
                } else {
                    view! {
                        <span class="category-name" on:click=begin_rename.clone()>
                            {label.clone()}
                        </span>
                    }.into_any()
                }}
                <button class="category-delete-btn" on:click=delete>"×"</button>
            </div>

            <ul class="value-list">
                <For
                    each=values
                    key=|(index, value)| (*index, value.clone())
                    children={
                        let name = name.clone();
                        move |(index, value)| {
                            view! {
                                <ValueRow category=name.clone() index=index value=value />
                            }
                        }
                    }
                />
            </ul>

            <form class="value-add-form" on:submit=add_value>
                <input
                    type="text"
                    placeholder="Add value..."
                    prop:value=move || new_value.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_value.set(input.value());
                    }
                />
                <button type="submit">"+"</button>
            </form>
        </div>
    }
}

/// Category management panel
#[component]
pub fn CategoryPanel() -> impl IntoView {
    let store = use_app_store();

    let names = move || {
        store
            .categories()
            .read()
            .iter()
            .map(|c| c.name.clone())
            .collect::<Vec<_>>()
    };

    view! {
        <section class="category-panel">
            <h2>"Categories"</h2>

            <CategoryAddForm />

            <div class="category-cards">
                <For
                    each=names
                    key=|name| name.clone()
                    children=move |name| view! { <CategoryCard name=name /> }
                />
            </div>

            {move || if store.categories().read().is_empty() {
                view! { <p class="no-categories">"No categories yet"</p> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </section>
    }
}
