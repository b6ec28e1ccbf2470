//! Item records and the inventory table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shopstock_core::Unit;

/// One inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    /// `None` marks an expiry date that failed to parse on load.
    pub expiry: Option<NaiveDate>,
}

/// The ordered collection of all items, the sole persisted entity.
///
/// Insertion order is preserved and lookups scan linearly; there is no key
/// beyond the item name. Name uniqueness (case-insensitive) is enforced at
/// add-time only, not re-validated on load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Item>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Item>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Item] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether an item with this name exists (case-insensitive, trimmed).
    pub fn contains_name(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        self.rows.iter().any(|r| r.name.to_lowercase() == wanted)
    }

    /// First row with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.rows.iter().find(|r| r.name == name)
    }

    pub(crate) fn find_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.rows.iter_mut().find(|r| r.name == name)
    }

    pub(crate) fn push(&mut self, item: Item) {
        self.rows.push(item);
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Item) -> bool) {
        self.rows.retain(keep);
    }

    /// Distinct item names in table order, for selection menus.
    pub fn item_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !names.contains(&row.name.as_str()) {
                names.push(&row.name);
            }
        }
        names
    }
}
