//! Gesture scripts: JSON-lines files of intents replayed against the engine.
//!
//! Each non-blank line is one [`Intent`]; lines starting with `#` are
//! comments. The whole script is parsed before anything runs, so a typo on
//! line 40 never leaves the board half-driven.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::io::{BufRead, Write};

use board::engine::{Action, EngineCore, Snapshot};
use board::intent::Intent;
use serde::Serialize;

use crate::error::CliError;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    /// 1-based line number in the source.
    pub line: usize,
    pub intent: Intent,
}

/// What to print while replaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// One report per intent.
    Steps,
    /// Only the final snapshot.
    Final,
}

/// Report written for each replayed step.
#[derive(Debug, Serialize)]
pub struct StepReport<'a> {
    pub step: usize,
    pub line: usize,
    pub intent: &'a Intent,
    pub actions: &'a [Action],
    pub snapshot: &'a Snapshot,
}

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Intent>, CliError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some).map_err(|source| CliError::Script { line, source })
}

/// Read a whole script.
pub fn read_script(reader: impl BufRead) -> Result<Vec<ScriptLine>, CliError> {
    let mut script = Vec::new();
    for (index, text) in reader.lines().enumerate() {
        let line = index + 1;
        let text = text.map_err(|source| CliError::ScriptRead { line, source })?;
        if let Some(intent) = parse_line(line, &text)? {
            script.push(ScriptLine { line, intent });
        }
    }
    Ok(script)
}

/// Apply `script` to `engine`, writing JSON lines to `out`.
pub fn replay(engine: &mut EngineCore, script: &[ScriptLine], out: &mut impl Write, emit: Emit) -> Result<(), CliError> {
    for (index, entry) in script.iter().enumerate() {
        let actions = engine.dispatch(entry.intent.clone());
        tracing::debug!(line = entry.line, actions = actions.len(), "intent applied");
        if emit == Emit::Steps {
            let snapshot = engine.snapshot();
            let report =
                StepReport { step: index + 1, line: entry.line, intent: &entry.intent, actions: &actions, snapshot: &snapshot };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    if emit == Emit::Final {
        serde_json::to_writer(&mut *out, &engine.snapshot())?;
        writeln!(out)?;
    }
    Ok(())
}
