//! Shopping List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All state lives
//! in memory; a reload resets to the seed list. Every mutation goes through
//! a `store_*` helper so the view layer never touches the collections
//! directly.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, ListItem};

/// Which category field is being renamed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditTarget {
    /// Renaming the category itself
    Category(String),
    /// Renaming one value: (category name, value index)
    Value(String, usize),
}

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All list items, in insertion order
    pub items: Vec<ListItem>,
    /// Pending text in the new-item input
    pub input_value: String,
    /// User-defined categories, in insertion order, unique by name
    pub categories: Vec<Category>,
    /// Open rename, if any; beginning a new edit replaces it
    pub editing: Option<EditTarget>,
    /// Scratch text for the open rename
    pub edit_text: String,
    /// Next item id
    pub next_item_id: u32,
}

impl AppState {
    /// Starting state: a small seed list and no categories
    pub fn new() -> Self {
        Self {
            items: vec![
                ListItem::new(1, "Apples").with_quantity(10),
                ListItem::new(2, "Honey").with_quantity(2),
                ListItem::new(3, "Yogurt").with_quantity(3),
            ],
            next_item_id: 4,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Item operations
// ========================

/// Replace the pending new-item text
pub fn store_set_input_value(store: &AppStore, value: String) {
    store.input_value().set(value);
}

/// Append a new item from `text`; blank input is ignored
pub fn store_add_item(store: &AppStore, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    let id = {
        let mut next = store.next_item_id().write();
        let id = *next;
        *next += 1;
        id
    };
    store.items().write().push(ListItem::new(id, text));
    store.input_value().set(String::new());
}

/// Flip completion for the item `id`; unknown ids are ignored
pub fn store_toggle_completed(store: &AppStore, id: u32) {
    if let Some(item) = store.items().write().iter_mut().find(|i| i.id == id) {
        item.completed = !item.completed;
    }
}

/// Remove the item `id`; unknown ids are ignored
pub fn store_delete_item(store: &AppStore, id: u32) {
    store.items().write().retain(|item| item.id != id);
}

/// Set the quantity of item `id`, clamped into range
pub fn store_set_quantity(store: &AppStore, id: u32, quantity: i64) {
    if let Some(item) = store.items().write().iter_mut().find(|i| i.id == id) {
        item.set_quantity(quantity);
    }
}

pub fn store_increment_quantity(store: &AppStore, id: u32) {
    if let Some(item) = store.items().write().iter_mut().find(|i| i.id == id) {
        item.increment_quantity();
    }
}

pub fn store_decrement_quantity(store: &AppStore, id: u32) {
    if let Some(item) = store.items().write().iter_mut().find(|i| i.id == id) {
        item.decrement_quantity();
    }
}

/// Attach (category, value) to item `id`, replacing any existing value
/// for that category
pub fn store_tag_item(store: &AppStore, id: u32, category: &str, value: &str) {
    if let Some(item) = store.items().write().iter_mut().find(|i| i.id == id) {
        item.set_tag(category, value);
    }
}

/// Detach the tag for `category` from item `id` if present
pub fn store_untag_item(store: &AppStore, id: u32, category: &str) {
    if let Some(item) = store.items().write().iter_mut().find(|i| i.id == id) {
        item.remove_tag(category);
    }
}

// ========================
// Category operations
// ========================

/// Add a category with an empty value list; blank or duplicate names are
/// ignored
pub fn store_add_category(store: &AppStore, name: &str) {
    let name = name.trim();
    if name.is_empty() {
        return;
    }
    let mut categories = store.categories().write();
    if categories.iter().any(|c| c.name == name) {
        return;
    }
    categories.push(Category::new(name));
}

/// Remove a category; tags on items referencing it are left as-is
pub fn store_delete_category(store: &AppStore, name: &str) {
    store.categories().write().retain(|c| c.name != name);
}

/// Rename `old` to `new`, keeping its values. Blank or unchanged names are
/// ignored. Renaming onto an existing category replaces that category's
/// values. Tags on items keep the old name.
pub fn store_rename_category(store: &AppStore, old: &str, new: &str) {
    let new = new.trim();
    if new.is_empty() || new == old {
        return;
    }
    let mut categories = store.categories().write();
    let Some(from) = categories.iter().position(|c| c.name == old) else {
        return;
    };
    if let Some(to) = categories.iter().position(|c| c.name == new) {
        let values = std::mem::take(&mut categories[from].values);
        categories[to].values = values;
        categories.remove(from);
    } else {
        categories[from].name = new.to_string();
    }
}

/// Append a value to `category`'s list; the category must exist and the
/// trimmed value must be non-blank
pub fn store_add_value(store: &AppStore, category: &str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    if let Some(cat) = store.categories().write().iter_mut().find(|c| c.name == category) {
        cat.values.push(value.to_string());
    }
}

/// Remove the value at `index`; out-of-range indexes are ignored
pub fn store_delete_value(store: &AppStore, category: &str, index: usize) {
    if let Some(cat) = store.categories().write().iter_mut().find(|c| c.name == category) {
        if index < cat.values.len() {
            cat.values.remove(index);
        }
    }
}

/// Replace the value at `index` with trimmed `new`; blank values and
/// out-of-range indexes are ignored
pub fn store_rename_value(store: &AppStore, category: &str, index: usize, new: &str) {
    let new = new.trim();
    if new.is_empty() {
        return;
    }
    if let Some(cat) = store.categories().write().iter_mut().find(|c| c.name == category) {
        if let Some(slot) = cat.values.get_mut(index) {
            *slot = new.to_string();
        }
    }
}

// ========================
// Rename edit state
// ========================

/// Open a rename editor seeded with `current`; any other open edit is
/// replaced
pub fn store_begin_edit(store: &AppStore, target: EditTarget, current: &str) {
    store.editing().set(Some(target));
    store.edit_text().set(current.to_string());
}

/// Update the rename scratch text
pub fn store_set_edit_text(store: &AppStore, text: String) {
    store.edit_text().set(text);
}

/// Apply the open rename, if any, and close the editor. Blank text closes
/// without renaming.
pub fn store_commit_edit(store: &AppStore) {
    let target = store.editing().write().take();
    let Some(target) = target else {
        return;
    };
    let text = store.edit_text().get();
    match target {
        EditTarget::Category(old) => store_rename_category(store, &old, &text),
        EditTarget::Value(category, index) => store_rename_value(store, &category, index, &text),
    }
}

/// Close the rename editor without applying it
pub fn store_cancel_edit(store: &AppStore) {
    store.editing().set(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryTag;
    use pretty_assertions::assert_eq;

    fn empty_store() -> AppStore {
        Store::new(AppState::default())
    }

    fn only_id(store: &AppStore) -> u32 {
        let items = store.items().get();
        assert_eq!(items.len(), 1);
        items[0].id
    }

    fn category_summary(store: &AppStore) -> Vec<(String, Vec<String>)> {
        store
            .categories()
            .get()
            .into_iter()
            .map(|c| (c.name, c.values))
            .collect()
    }

    #[test]
    fn seed_list_matches_defaults() {
        let state = AppState::new();
        let summary: Vec<(&str, u32)> = state
            .items
            .iter()
            .map(|i| (i.text.as_str(), i.quantity))
            .collect();
        assert_eq!(summary, vec![("Apples", 10), ("Honey", 2), ("Yogurt", 3)]);
        assert!(state.items.iter().all(|i| !i.completed));
        assert!(state.items.iter().all(|i| i.tags.is_empty()));
        assert!(state.categories.is_empty());
    }

    #[test]
    fn seed_ids_do_not_collide_with_new_items() {
        let store = Store::new(AppState::new());
        store_add_item(&store, "Bread");
        let items = store.items().get();
        let mut ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn add_item_appends_with_defaults_and_clears_input() {
        let store = empty_store();
        store_set_input_value(&store, "  Milk  ".to_string());
        store_add_item(&store, "  Milk  ");

        let items = store.items().get();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Milk");
        assert_eq!(items[0].quantity, 1);
        assert!(!items[0].completed);
        assert!(items[0].tags.is_empty());
        assert_eq!(store.input_value().get(), "");
    }

    #[test]
    fn add_item_ignores_blank_text() {
        let store = empty_store();
        store_add_item(&store, "");
        store_add_item(&store, "   ");
        assert!(store.items().get().is_empty());
    }

    #[test]
    fn added_items_get_distinct_ids() {
        let store = empty_store();
        store_add_item(&store, "a");
        store_add_item(&store, "b");
        let items = store.items().get();
        assert_ne!(items[0].id, items[1].id);
    }

    #[test]
    fn toggle_flips_and_ignores_unknown_ids() {
        let store = empty_store();
        store_add_item(&store, "Milk");
        let id = only_id(&store);

        store_toggle_completed(&store, id);
        assert!(store.items().get()[0].completed);

        store_toggle_completed(&store, id + 100);
        assert!(store.items().get()[0].completed);

        store_toggle_completed(&store, id);
        assert!(!store.items().get()[0].completed);
    }

    #[test]
    fn delete_is_idempotent() {
        let store = empty_store();
        store_add_item(&store, "Milk");
        store_add_item(&store, "Eggs");
        let id = store.items().get()[0].id;

        store_delete_item(&store, id);
        assert_eq!(store.items().get().len(), 1);
        store_delete_item(&store, id);
        assert_eq!(store.items().get().len(), 1);
    }

    #[test]
    fn set_quantity_clamps_into_range() {
        let store = empty_store();
        store_add_item(&store, "Milk");
        let id = only_id(&store);

        for (raw, expected) in [
            (-5_i64, 1_u32),
            (0, 1),
            (1, 1),
            (42, 42),
            (99, 99),
            (100, 99),
            (100_000, 99),
        ] {
            store_set_quantity(&store, id, raw);
            assert_eq!(store.items().get()[0].quantity, expected, "raw = {raw}");
        }
    }

    #[test]
    fn decrement_at_floor_is_a_no_op() {
        let store = empty_store();
        store_add_item(&store, "Milk");
        let id = only_id(&store);

        store_decrement_quantity(&store, id);
        assert_eq!(store.items().get()[0].quantity, 1);
    }

    #[test]
    fn increment_saturates_at_ceiling() {
        let store = empty_store();
        store_add_item(&store, "Milk");
        let id = only_id(&store);

        store_set_quantity(&store, id, 99);
        store_increment_quantity(&store, id);
        assert_eq!(store.items().get()[0].quantity, 99);
    }

    #[test]
    fn tagging_twice_overwrites_the_category_value() {
        let store = empty_store();
        store_add_item(&store, "Milk");
        let id = only_id(&store);

        store_tag_item(&store, id, "Aisle", "Dairy");
        store_tag_item(&store, id, "Aisle", "Produce");

        let tags = store.items().get()[0].tags.clone();
        assert_eq!(
            tags,
            vec![CategoryTag {
                category: "Aisle".to_string(),
                value: "Produce".to_string(),
            }]
        );
    }

    #[test]
    fn tags_for_different_categories_accumulate() {
        let store = empty_store();
        store_add_item(&store, "Milk");
        let id = only_id(&store);

        store_tag_item(&store, id, "Aisle", "Dairy");
        store_tag_item(&store, id, "Brand", "Acme");
        assert_eq!(store.items().get()[0].tags.len(), 2);
    }

    #[test]
    fn untag_removes_only_that_category() {
        let store = empty_store();
        store_add_item(&store, "Milk");
        let id = only_id(&store);

        store_tag_item(&store, id, "Aisle", "Dairy");
        store_tag_item(&store, id, "Brand", "Acme");

        store_untag_item(&store, id, "Aisle");
        let tags = store.items().get()[0].tags.clone();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].category, "Brand");

        // Absent category: no-op
        store_untag_item(&store, id, "Aisle");
        assert_eq!(store.items().get()[0].tags.len(), 1);
    }

    #[test]
    fn category_rename_round_trip() {
        let store = empty_store();
        store_add_category(&store, "Aisle");
        store_rename_category(&store, "Aisle", "Section");
        store_add_value(&store, "Section", "Dairy");

        assert_eq!(
            category_summary(&store),
            vec![("Section".to_string(), vec!["Dairy".to_string()])]
        );
    }

    #[test]
    fn duplicate_or_blank_category_is_ignored() {
        let store = empty_store();
        store_add_category(&store, "Aisle");
        store_add_category(&store, "Aisle");
        store_add_category(&store, "");
        store_add_category(&store, "   ");
        assert_eq!(store.categories().get().len(), 1);
    }

    #[test]
    fn category_names_are_trimmed() {
        let store = empty_store();
        store_add_category(&store, "  Aisle  ");
        assert_eq!(store.categories().get()[0].name, "Aisle");
    }

    #[test]
    fn rename_keeps_category_position() {
        let store = empty_store();
        store_add_category(&store, "A");
        store_add_category(&store, "B");
        store_add_category(&store, "C");

        store_rename_category(&store, "B", "Bee");
        let names: Vec<String> = store.categories().get().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["A", "Bee", "C"]);
    }

    #[test]
    fn rename_ignores_blank_or_unchanged_names() {
        let store = empty_store();
        store_add_category(&store, "Aisle");
        store_rename_category(&store, "Aisle", "  ");
        store_rename_category(&store, "Aisle", "Aisle");
        assert_eq!(store.categories().get()[0].name, "Aisle");
    }

    #[test]
    fn rename_onto_existing_category_replaces_it() {
        let store = empty_store();
        store_add_category(&store, "Aisle");
        store_add_value(&store, "Aisle", "Dairy");
        store_add_category(&store, "Section");
        store_add_value(&store, "Section", "Front");

        store_rename_category(&store, "Aisle", "Section");
        assert_eq!(
            category_summary(&store),
            vec![("Section".to_string(), vec!["Dairy".to_string()])]
        );
    }

    #[test]
    fn value_lists_allow_duplicates_and_preserve_order() {
        let store = empty_store();
        store_add_category(&store, "Aisle");
        store_add_value(&store, "Aisle", "Dairy");
        store_add_value(&store, "Aisle", "Produce");
        store_add_value(&store, "Aisle", "Dairy");

        assert_eq!(
            store.categories().get()[0].values,
            vec!["Dairy", "Produce", "Dairy"]
        );
    }

    #[test]
    fn add_value_requires_existing_category_and_text() {
        let store = empty_store();
        store_add_category(&store, "Aisle");
        store_add_value(&store, "Missing", "Dairy");
        store_add_value(&store, "Aisle", "   ");
        assert!(store.categories().get()[0].values.is_empty());
    }

    #[test]
    fn delete_value_ignores_out_of_range_indexes() {
        let store = empty_store();
        store_add_category(&store, "Aisle");
        store_add_value(&store, "Aisle", "Dairy");

        store_delete_value(&store, "Aisle", 5);
        assert_eq!(store.categories().get()[0].values.len(), 1);

        store_delete_value(&store, "Aisle", 0);
        assert!(store.categories().get()[0].values.is_empty());
    }

    #[test]
    fn rename_value_replaces_in_place() {
        let store = empty_store();
        store_add_category(&store, "Aisle");
        store_add_value(&store, "Aisle", "Dairy");
        store_add_value(&store, "Aisle", "Produce");

        store_rename_value(&store, "Aisle", 0, "  Frozen  ");
        assert_eq!(store.categories().get()[0].values, vec!["Frozen", "Produce"]);

        store_rename_value(&store, "Aisle", 0, "   ");
        store_rename_value(&store, "Aisle", 9, "Bakery");
        assert_eq!(store.categories().get()[0].values, vec!["Frozen", "Produce"]);
    }

    #[test]
    fn category_rename_leaves_item_tags_dangling() {
        let store = empty_store();
        store_add_item(&store, "Milk");
        let id = only_id(&store);
        store_add_category(&store, "Aisle");
        store_add_value(&store, "Aisle", "Dairy");
        store_tag_item(&store, id, "Aisle", "Dairy");

        store_rename_category(&store, "Aisle", "Section");

        let tags = store.items().get()[0].tags.clone();
        assert_eq!(tags[0].category, "Aisle");
        assert_eq!(tags[0].value, "Dairy");
    }

    #[test]
    fn category_delete_leaves_item_tags_dangling() {
        let store = empty_store();
        store_add_item(&store, "Milk");
        let id = only_id(&store);
        store_add_category(&store, "Aisle");
        store_add_value(&store, "Aisle", "Dairy");
        store_tag_item(&store, id, "Aisle", "Dairy");

        store_delete_category(&store, "Aisle");

        assert!(store.categories().get().is_empty());
        assert_eq!(store.items().get()[0].tags.len(), 1);
    }

    #[test]
    fn begin_edit_seeds_state_and_replaces_open_edit() {
        let store = empty_store();
        store_begin_edit(&store, EditTarget::Category("Aisle".to_string()), "Aisle");
        assert_eq!(
            store.editing().get(),
            Some(EditTarget::Category("Aisle".to_string()))
        );
        assert_eq!(store.edit_text().get(), "Aisle");

        store_begin_edit(&store, EditTarget::Value("Aisle".to_string(), 0), "Dairy");
        assert_eq!(
            store.editing().get(),
            Some(EditTarget::Value("Aisle".to_string(), 0))
        );
        assert_eq!(store.edit_text().get(), "Dairy");
    }

    #[test]
    fn commit_edit_renames_category_and_closes() {
        let store = empty_store();
        store_add_category(&store, "Aisle");
        store_begin_edit(&store, EditTarget::Category("Aisle".to_string()), "Aisle");
        store_set_edit_text(&store, "Section".to_string());
        store_commit_edit(&store);

        assert_eq!(store.categories().get()[0].name, "Section");
        assert_eq!(store.editing().get(), None);
    }

    #[test]
    fn commit_edit_renames_value_and_closes() {
        let store = empty_store();
        store_add_category(&store, "Aisle");
        store_add_value(&store, "Aisle", "Dairy");
        store_begin_edit(&store, EditTarget::Value("Aisle".to_string(), 0), "Dairy");
        store_set_edit_text(&store, "Frozen".to_string());
        store_commit_edit(&store);

        assert_eq!(store.categories().get()[0].values, vec!["Frozen"]);
        assert_eq!(store.editing().get(), None);
    }

    #[test]
    fn commit_with_blank_text_closes_without_renaming() {
        let store = empty_store();
        store_add_category(&store, "Aisle");
        store_begin_edit(&store, EditTarget::Category("Aisle".to_string()), "Aisle");
        store_set_edit_text(&store, "   ".to_string());
        store_commit_edit(&store);

        assert_eq!(store.categories().get()[0].name, "Aisle");
        assert_eq!(store.editing().get(), None);
    }

    #[test]
    fn cancel_edit_keeps_names() {
        let store = empty_store();
        store_add_category(&store, "Aisle");
        store_begin_edit(&store, EditTarget::Category("Aisle".to_string()), "Aisle");
        store_set_edit_text(&store, "Section".to_string());
        store_cancel_edit(&store);

        assert_eq!(store.categories().get()[0].name, "Aisle");
        assert_eq!(store.editing().get(), None);

        // Commit after cancel is a no-op
        store_commit_edit(&store);
        assert_eq!(store.categories().get()[0].name, "Aisle");
    }

    #[test]
    fn milk_scenario_end_to_end() {
        let store = empty_store();
        assert!(store.items().get().is_empty());

        store_add_item(&store, "Milk");
        let items = store.items().get();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Milk");
        assert_eq!(items[0].quantity, 1);
        assert!(!items[0].completed);
        let id = items[0].id;

        store_increment_quantity(&store, id);
        store_increment_quantity(&store, id);
        assert_eq!(store.items().get()[0].quantity, 3);

        store_toggle_completed(&store, id);
        assert!(store.items().get()[0].completed);

        store_delete_item(&store, id);
        assert!(store.items().get().is_empty());
    }
}
