use std::io::Cursor;

use board::engine::EngineConfig;
use board::roster::{ItemId, Roster, RosterConfig, SlotId};
use serde_json::Value;

use super::*;

fn engine() -> EngineCore {
    let config: RosterConfig = serde_json::from_str(
        r#"{ "items": [{ "id": "1", "label": "A" }, { "id": "2", "label": "B" }], "slots": [{ "id": "X", "label": "Wash" }] }"#,
    )
    .unwrap();
    EngineCore::new(Roster::from_config(&config).unwrap(), EngineConfig::default())
}

fn output_lines(out: &[u8]) -> Vec<Value> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_skips_blank_and_comment_lines() {
    assert!(parse_line(1, "").unwrap().is_none());
    assert!(parse_line(2, "   ").unwrap().is_none());
    assert!(parse_line(3, "# drag the first worker").unwrap().is_none());
}

#[test]
fn parse_intent_line() {
    let intent = parse_line(1, r#"{ "op": "cancel_drag", "item": "2" }"#).unwrap();
    assert_eq!(intent, Some(Intent::CancelDrag { item: ItemId::from("2") }));
}

#[test]
fn parse_error_carries_line_number() {
    let err = parse_line(7, r#"{ "op": "fly" }"#).unwrap_err();
    assert!(matches!(err, CliError::Script { line: 7, .. }));
    assert!(err.to_string().starts_with("script line 7:"));
}

#[test]
fn read_script_keeps_source_line_numbers() {
    let text = "# scenario\n{\"op\":\"begin_drag\",\"item\":\"1\"}\n\n{\"op\":\"complete_drop\",\"item\":\"1\",\"slot\":\"X\"}\n";
    let script = read_script(Cursor::new(text)).unwrap();
    assert_eq!(script.len(), 2);
    assert_eq!(script[0].line, 2);
    assert_eq!(script[1].line, 4);
}

#[test]
fn read_script_stops_at_first_bad_line() {
    let text = "{\"op\":\"reset\"}\nnot json\n";
    let err = read_script(Cursor::new(text)).unwrap_err();
    assert!(matches!(err, CliError::Script { line: 2, .. }));
}

#[test]
fn read_script_reports_undecodable_line() {
    let bytes = b"{\"op\":\"reset\"}\n\xff\xfe\n".to_vec();
    let err = read_script(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, CliError::ScriptRead { line: 2, .. }));
    assert!(err.to_string().starts_with("failed to read script line 2:"));
}

// =============================================================
// Replay
// =============================================================

#[test]
fn replay_emits_one_report_per_step() {
    let script = vec![
        ScriptLine { line: 1, intent: Intent::BeginDrag { item: ItemId::from("1") } },
        ScriptLine { line: 2, intent: Intent::CompleteDrop { item: ItemId::from("1"), slot: SlotId::from("X") } },
    ];
    let mut engine = engine();
    let mut out = Vec::new();
    replay(&mut engine, &script, &mut out, Emit::Steps).unwrap();

    let lines = output_lines(&out);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["snapshot"]["phase"], "dragging");
    assert_eq!(lines[1]["step"], 2);
    assert_eq!(lines[1]["snapshot"]["phase"], "idle");
    assert_eq!(lines[1]["snapshot"]["items"][0]["assigned_slot"], "X");
    assert!(lines[1]["actions"].as_array().unwrap().iter().any(|a| a["action"] == "assigned"));
}

#[test]
fn replay_final_only_prints_last_snapshot() {
    let script = vec![
        ScriptLine { line: 1, intent: Intent::BeginDrag { item: ItemId::from("2") } },
        ScriptLine { line: 2, intent: Intent::CancelDrag { item: ItemId::from("2") } },
    ];
    let mut engine = engine();
    let mut out = Vec::new();
    replay(&mut engine, &script, &mut out, Emit::Final).unwrap();

    let lines = output_lines(&out);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["phase"], "idle");
    assert!(lines[0]["items"].as_array().unwrap().iter().all(|item| item["assigned_slot"].is_null()));
}

#[test]
fn replay_ignores_stale_intents() {
    let script = vec![ScriptLine { line: 1, intent: Intent::CompleteDrop { item: ItemId::from("1"), slot: SlotId::from("X") } }];
    let mut engine = engine();
    let before = engine.clone();
    let mut out = Vec::new();
    replay(&mut engine, &script, &mut out, Emit::Steps).unwrap();
    assert_eq!(engine, before);
    assert!(output_lines(&out)[0]["actions"].as_array().unwrap().is_empty());
}
