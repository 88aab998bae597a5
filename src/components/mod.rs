//! UI Components
//!
//! Reusable Leptos components.

mod category_panel;
mod item_list;
mod item_row;
mod new_item_form;
mod quantity_control;
mod tag_picker;
mod version_footer;

pub use category_panel::CategoryPanel;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
pub use quantity_control::QuantityControl;
pub use tag_picker::TagPicker;
pub use version_footer::VersionFooter;
