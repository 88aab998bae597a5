//! Shopping List Models
//!
//! Plain data types for list items and user-defined categories.

use serde::{Deserialize, Serialize};

/// Lowest quantity an item can hold.
pub const QUANTITY_MIN: u32 = 1;
/// Highest quantity an item can hold.
pub const QUANTITY_MAX: u32 = 99;

/// Clamp a raw quantity into the allowed range.
pub fn clamp_quantity(raw: i64) -> u32 {
    raw.clamp(QUANTITY_MIN as i64, QUANTITY_MAX as i64) as u32
}

/// One (category, value) pair attached to an item.
///
/// An item holds at most one tag per category name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryTag {
    pub category: String,
    pub value: String,
}

/// A single shopping-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: u32,
    pub text: String,
    pub completed: bool,
    pub quantity: u32,
    /// At most one entry per category name
    pub tags: Vec<CategoryTag>,
}

impl ListItem {
    /// Create a new item with default quantity and no tags
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            quantity: QUANTITY_MIN,
            tags: Vec::new(),
        }
    }

    /// Builder for seed data
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.clamp(QUANTITY_MIN, QUANTITY_MAX);
        self
    }

    pub fn set_quantity(&mut self, raw: i64) {
        self.quantity = clamp_quantity(raw);
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = (self.quantity + 1).min(QUANTITY_MAX);
    }

    /// Decrementing at the floor is a no-op
    pub fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(QUANTITY_MIN);
    }

    /// Insert or replace the value for `category`
    pub fn set_tag(&mut self, category: &str, value: &str) {
        match self.tags.iter_mut().find(|t| t.category == category) {
            Some(tag) => tag.value = value.to_string(),
            None => self.tags.push(CategoryTag {
                category: category.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Remove the tag for `category` if present
    pub fn remove_tag(&mut self, category: &str) {
        self.tags.retain(|t| t.category != category);
    }
}

/// A named, ordered list of permissible tag values
///
/// Value lists preserve insertion order and allow duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub values: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }
}
