#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::filter::unassigned;
use crate::geometry::{Point, card_rect};
use crate::roster::{ItemId, Roster, SlotId};

/// What the pointer is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// An unassigned card in the card column.
    Item(ItemId),
    /// A slot, filled or empty.
    Slot(SlotId),
}

/// Test what is under `pt`, checking cards before slots since cards draw on top.
#[must_use]
pub fn hit_test(pt: Point, roster: &Roster) -> Option<Hit> {
    if let Some(id) = card_at(pt, roster) {
        return Some(Hit::Item(id.clone()));
    }
    slot_at(pt, roster).map(|id| Hit::Slot(id.clone()))
}

/// The unassigned card under `pt`. Assigned items are drawn inside their slot
/// and are not hit as cards.
#[must_use]
pub fn card_at(pt: Point, roster: &Roster) -> Option<&ItemId> {
    unassigned(roster.items())
        .into_iter()
        .enumerate()
        .find(|(i, _)| card_rect(*i).contains(pt))
        .map(|(_, item)| &item.id)
}

/// The slot under `pt`. When slots overlap the first configured wins.
#[must_use]
pub fn slot_at(pt: Point, roster: &Roster) -> Option<&SlotId> {
    roster.slots().iter().find(|slot| slot.rect.contains(pt)).map(|slot| &slot.id)
}
