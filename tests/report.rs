//! Integration tests for the text report and the library facade.

mod helpers;

use helpers::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use step_inspector::{inspect, inspect_json};

#[test]
fn pack_step_report() {
    let doc = fixture_doc();
    let step = doc.steps.iter().find(|s| s.id == "s_pack").unwrap();
    let inspection = inspect(&doc, step).expect("should inspect");

    assert_eq!(
        inspection.report,
        "\
================ Step summary ================
Step ID: s_pack
Name: Pack
Parent process: proc1
Parent step group: grp1
Takt time: 90

Direct trigger IDs (3): t_open, t_timer, t_missing
Widget IDs (3): w_done, w_label, w_missing

================ Step triggers (grouped) ================

=== On step enter (1) ===
  - Trigger t_open: Load shift
    Event type: step_open
    Clause 1:
      IF conditions (count: 1):
        1. type=is_blank
      THEN actions:
        1. load_data_model_record -> [source=dataModelSlot, slot=slot_shift], [source=tableAggregation]
    Clause 2:
      IF: (no conditions)
      THEN actions:
        1. show_message -> [source=static]

=== Timers (1) ===
  - Trigger t_timer: Tick
    Event type: interval
    (No clauses)

=== Machines & devices (0) ===
  (none)

=== On step exit (0) ===
  (none)

=== Other (0) ===
  (none)

================ Widgets with triggers on this step ================

Widget type: ButtonWidget (count: 1)
  - w_done: Done button [BUTTON text: 'Done'] -> triggers: t_done (Finish)
"
    );
}

#[test]
fn scenario_step_open_without_clauses() {
    let json = json!({
        "triggers": [{"_id": "t1", "event": {"type": "step_open"}, "clauses": []}],
        "steps": [{"_id": "s1", "name": "Pack", "triggers": ["t1"], "widgets": []}]
    })
    .to_string();
    let inspection = inspect_json(&json, "s1").expect("should inspect");

    let enter = inspection
        .report
        .split("=== On step enter (1) ===\n")
        .nth(1)
        .expect("entry category present");
    assert!(enter.starts_with("  - Trigger t1: (no description)\n    Event type: step_open\n    (No clauses)\n"));
    assert!(inspection.report.contains("Widget IDs (0): (none)"));
    assert!(inspection.report.contains("  (no widget-attached triggers on this step)"));

    let diagram = inspection.diagram.expect("diagram expected");
    assert!(diagram.to_mermaid().contains("  step_s1 -->|step_open| trig_t1\n"));
}

#[test]
fn step_without_triggers_or_widgets_has_no_diagram() {
    let inspection = inspect_json(APP_EXPORT, "s_empty").expect("should inspect");
    assert!(inspection.diagram.is_none());
    assert!(inspection.to_text().ends_with(
        "================ Mermaid (step + trigger logic) ================\n  (no triggers or widgets on this step)\n"
    ));
}

#[test]
fn full_text_puts_diagram_after_report() {
    let inspection = inspect_json(APP_EXPORT, "s_pack").expect("should inspect");
    let text = inspection.to_text();
    let report_end = text.find("Widget type: ButtonWidget").unwrap();
    let diagram_start = text.find("flowchart LR").unwrap();
    assert!(report_end < diagram_start);
    assert!(text.contains("triggers: t_done (Finish)\n\n================ Mermaid"));
}

#[test]
fn unknown_step_is_a_select_error() {
    let errors = inspect_json(APP_EXPORT, "s_nope").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "S003");
    assert!(errors[0].message.contains("  - s_pack\n  - s_inspect\n  - s_review\n  - s_empty"));
    assert!(errors[0].message.contains("Did not even find the ID string inside any step objects."));
}
