//! Grouping helpers: which items sit in which slot.
//!
//! These are pure functions over the roster's item list. Results borrow from
//! the input and always preserve the original list order.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use serde::{Deserialize, Serialize};

use crate::roster::{Item, SlotId};

/// Which group of items to select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "slot")]
pub enum SlotFilter {
    /// Items not assigned to any slot.
    Unassigned,
    /// Items assigned to this slot.
    Slot(SlotId),
}

impl SlotFilter {
    /// Whether `item` belongs to this group.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::Unassigned => item.assigned_slot.is_none(),
            Self::Slot(slot) => item.assigned_slot.as_ref() == Some(slot),
        }
    }
}

/// The ordered subsequence of `items` matching `filter`.
#[must_use]
pub fn items_in<'a>(items: &'a [Item], filter: &SlotFilter) -> Vec<&'a Item> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Shorthand for `items_in(items, &SlotFilter::Unassigned)`.
#[must_use]
pub fn unassigned(items: &[Item]) -> Vec<&Item> {
    items_in(items, &SlotFilter::Unassigned)
}
