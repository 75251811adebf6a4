//! Roster model: assignable items, drop slots, and the store that owns them.
//!
//! This module defines who can be scheduled (`Item`), where they can be
//! scheduled (`Slot`), the serde configuration both are built from
//! (`RosterConfig`), and the runtime store (`Roster`). Items keep their
//! configured order for the whole session; only `assigned_slot` ever changes.
//!
//! The store does not enforce slot capacity. Deciding whether a drop replaces
//! a slot's occupant or is rejected is the engine's job (see
//! [`crate::engine::DropPolicy`]).

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{ZONE_HEIGHT, ZONE_WIDTH};
use crate::geometry::{Rect, default_zone_rect};

/// Identifier of an assignable item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

/// Identifier of a slot (drop target).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub String);

impl ItemId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SlotId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<&str> for SlotId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A person (or other resource) that can be dragged onto a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Display name shown on the card and inside a filled slot.
    pub label: String,
    /// Short category pill shown before the label (e.g. a work-site code).
    pub badge: String,
    /// Secondary line under the label (e.g. hours already scheduled).
    pub note: String,
    /// The slot this item is scheduled into, if any.
    pub assigned_slot: Option<SlotId>,
}

/// A task or shift that items are assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: SlotId,
    /// Label shown while the slot is empty.
    pub label: String,
    /// Where the slot is drawn, and where drops onto it are detected.
    pub rect: Rect,
}

/// Configuration for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub id: ItemId,
    pub label: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub note: String,
}

/// Configuration for one slot. A slot without both `x` and `y` is placed by
/// [`default_zone_rect`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub id: SlotId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// The full roster description, typically loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub items: Vec<ItemConfig>,
    #[serde(default)]
    pub slots: Vec<SlotConfig>,
}

impl Default for RosterConfig {
    /// One home-care worker and one kitchen-cleaning task.
    fn default() -> Self {
        Self {
            items: vec![ItemConfig {
                id: ItemId::from("1"),
                label: "陳先生".to_owned(),
                badge: "宅內".to_owned(),
                note: "※ 本月已排班時數159".to_owned(),
            }],
            slots: vec![SlotConfig { id: SlotId::from("kitchen"), label: "廚房清潔".to_owned(), x: None, y: None }],
        }
    }
}

/// Error returned by [`Roster::from_config`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// Two items share the same id.
    #[error("duplicate item id: {0}")]
    DuplicateItem(ItemId),
    /// Two slots share the same id.
    #[error("duplicate slot id: {0}")]
    DuplicateSlot(SlotId),
    /// An item was configured with an empty id.
    #[error("item at position {0} has an empty id")]
    EmptyItemId(usize),
    /// A slot was configured with an empty id.
    #[error("slot at position {0} has an empty id")]
    EmptySlotId(usize),
}

/// Ordered store of items and slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    items: Vec<Item>,
    slots: Vec<Slot>,
}

impl Roster {
    /// Build a roster with every item unassigned.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] when an id is empty or repeated.
    pub fn from_config(config: &RosterConfig) -> Result<Self, RosterError> {
        validate(config)?;
        Ok(Self::build(config))
    }

    /// Lay out an already validated config.
    fn build(config: &RosterConfig) -> Self {
        let items = config
            .items
            .iter()
            .map(|cfg| Item {
                id: cfg.id.clone(),
                label: cfg.label.clone(),
                badge: cfg.badge.clone(),
                note: cfg.note.clone(),
                assigned_slot: None,
            })
            .collect();
        let slots = config
            .slots
            .iter()
            .enumerate()
            .map(|(i, cfg)| {
                let rect = match (cfg.x, cfg.y) {
                    (Some(x), Some(y)) => Rect::new(x, y, ZONE_WIDTH, ZONE_HEIGHT),
                    _ => default_zone_rect(i),
                };
                Slot { id: cfg.id.clone(), label: cfg.label.clone(), rect }
            })
            .collect();
        Self { items, slots }
    }

    /// All items in configured order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// All slots in configured order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    #[must_use]
    pub fn slot(&self, id: &SlotId) -> Option<&Slot> {
        self.slots.iter().find(|slot| &slot.id == id)
    }

    /// The item currently assigned to `slot`, if any.
    #[must_use]
    pub fn occupant(&self, slot: &SlotId) -> Option<&Item> {
        self.items.iter().find(|item| item.assigned_slot.as_ref() == Some(slot))
    }

    /// Point `item` at `slot`. Returns false if either id is unknown.
    pub fn assign(&mut self, item: &ItemId, slot: &SlotId) -> bool {
        if self.slot(slot).is_none() {
            return false;
        }
        let Some(entry) = self.items.iter_mut().find(|entry| &entry.id == item) else {
            return false;
        };
        entry.assigned_slot = Some(slot.clone());
        true
    }

    /// Return `item` to the unassigned pool. Returns false if the item is
    /// unknown or already unassigned.
    pub fn unassign(&mut self, item: &ItemId) -> bool {
        let Some(entry) = self.items.iter_mut().find(|entry| &entry.id == item) else {
            return false;
        };
        entry.assigned_slot.take().is_some()
    }

    /// Return every item to the unassigned pool.
    pub fn clear_assignments(&mut self) {
        for item in &mut self.items {
            item.assigned_slot = None;
        }
    }

    /// Whether any item is assigned.
    #[must_use]
    pub fn has_assignments(&self) -> bool {
        self.items.iter().any(|item| item.assigned_slot.is_some())
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Roster {
    /// The roster described by [`RosterConfig::default`].
    fn default() -> Self {
        Self::build(&RosterConfig::default())
    }
}

fn validate(config: &RosterConfig) -> Result<(), RosterError> {
    let mut seen_items = HashSet::new();
    for (i, cfg) in config.items.iter().enumerate() {
        if cfg.id.0.is_empty() {
            return Err(RosterError::EmptyItemId(i));
        }
        if !seen_items.insert(&cfg.id) {
            return Err(RosterError::DuplicateItem(cfg.id.clone()));
        }
    }
    let mut seen_slots = HashSet::new();
    for (i, cfg) in config.slots.iter().enumerate() {
        if cfg.id.0.is_empty() {
            return Err(RosterError::EmptySlotId(i));
        }
        if !seen_slots.insert(&cfg.id) {
            return Err(RosterError::DuplicateSlot(cfg.id.clone()));
        }
    }
    Ok(())
}
