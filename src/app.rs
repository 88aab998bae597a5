//! Shopping List App
//!
//! Root component: provides the store and context, lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategoryPanel, ItemList, NewItemForm, VersionFooter};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    provide_context(store);

    let (tagging_item, set_tagging_item) = signal::<Option<u32>>(None);
    provide_context(AppContext::new((tagging_item, set_tagging_item)));

    let item_count = move || store.items().read().len();
    let remaining = move || {
        store
            .items()
            .read()
            .iter()
            .filter(|item| !item.completed)
            .count()
    };

    Effect::new(move |_| {
        web_sys::console::log_1(&format!("[APP] {} items on the list", item_count()).into());
    });

    view! {
        <div class="page">
            <main class="main">
                <h1>"Shopping List"</h1>

                <NewItemForm />

                <ItemList />

                <p class="item-count">
                    {move || format!("{} items, {} to buy", item_count(), remaining())}
                </p>

                <CategoryPanel />
            </main>

            <VersionFooter />
        </div>
    }
}
