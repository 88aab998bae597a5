//! Application Context
//!
//! Cross-component UI state provided via the Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Item whose tag picker is open (None = all closed) - read
    pub tagging_item: ReadSignal<Option<u32>>,
    /// Item whose tag picker is open - write
    set_tagging_item: WriteSignal<Option<u32>>,
}

impl AppContext {
    pub fn new(tagging_item: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>)) -> Self {
        Self {
            tagging_item: tagging_item.0,
            set_tagging_item: tagging_item.1,
        }
    }

    /// Open the tag picker for one item, closing any other
    pub fn open_tag_picker(&self, id: u32) {
        self.set_tagging_item.set(Some(id));
    }

    /// Close the tag picker
    pub fn close_tag_picker(&self) {
        self.set_tagging_item.set(None);
    }
}
