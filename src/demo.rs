//! Built-in walkthrough: drag, drop, cancel and reset on whatever roster is
//! loaded.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use std::io::Write;

use board::engine::EngineCore;
use board::intent::Intent;

use crate::error::CliError;
use crate::report::render_snapshot;

/// A captioned demo step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub caption: String,
    pub intent: Intent,
}

impl Step {
    fn new(caption: String, intent: Intent) -> Self {
        Self { caption, intent }
    }
}

/// Steps for the engine's roster. The first item goes to the first slot, the
/// second is picked up and put back, then the board resets. Steps that need a
/// missing item or slot are left out.
#[must_use]
pub fn scenario(engine: &EngineCore) -> Vec<Step> {
    let items = engine.roster.items();
    let slots = engine.roster.slots();
    let mut steps = Vec::new();

    if let (Some(item), Some(slot)) = (items.first(), slots.first()) {
        steps.push(Step::new(format!("pick up {}", item.label), Intent::BeginDrag { item: item.id.clone() }));
        steps.push(Step::new(
            format!("drop {} on {}", item.label, slot.label),
            Intent::CompleteDrop { item: item.id.clone(), slot: slot.id.clone() },
        ));
    }
    if let Some(item) = items.get(1) {
        steps.push(Step::new(format!("pick up {}", item.label), Intent::BeginDrag { item: item.id.clone() }));
        steps.push(Step::new(format!("put {} back", item.label), Intent::CancelDrag { item: item.id.clone() }));
    }
    steps.push(Step::new("reset".to_owned(), Intent::Reset));
    steps
}

/// Run the walkthrough, printing the board after every step.
pub fn run_demo(engine: &mut EngineCore, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "== initial ==\n{}\n", render_snapshot(&engine.snapshot()))?;
    for (index, step) in scenario(engine).into_iter().enumerate() {
        let actions = engine.dispatch(step.intent);
        tracing::debug!(step = index + 1, actions = actions.len(), "demo step");
        writeln!(out, "== {}. {} ==\n{}\n", index + 1, step.caption, render_snapshot(&engine.snapshot()))?;
    }
    Ok(())
}
