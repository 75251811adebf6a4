//! Plain-text rendering of board snapshots for the terminal.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use board::engine::Snapshot;
use board::filter::SlotFilter;
use board::input::Phase;
use board::roster::Item;

const NONE: &str = "-";

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::Dragging => "dragging",
    }
}

fn item_list(items: &[&Item]) -> String {
    if items.is_empty() {
        return NONE.to_owned();
    }
    items.iter().map(|item| format!("{} {}", item.id, item.label)).collect::<Vec<_>>().join(", ")
}

/// Render `snapshot` as a status line, one line per slot, then the pool.
#[must_use]
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut lines = Vec::with_capacity(snapshot.slots.len() + 2);
    lines.push(format!(
        "phase={} selected={} slot={} hover={} drop_complete={}",
        phase_name(snapshot.phase),
        snapshot.selected_item.as_ref().map_or(NONE, |id| id.as_str()),
        snapshot.selected_slot.as_ref().map_or(NONE, |id| id.as_str()),
        snapshot.hover_slot.as_ref().map_or(NONE, |id| id.as_str()),
        snapshot.drop_complete,
    ));
    for slot in &snapshot.slots {
        let occupants = snapshot.items_in(&SlotFilter::Slot(slot.id.clone()));
        lines.push(format!("[{}] {}: {}", slot.id, slot.label, item_list(&occupants)));
    }
    lines.push(format!("unassigned: {}", item_list(&snapshot.items_in(&SlotFilter::Unassigned))));
    lines.join("\n")
}
