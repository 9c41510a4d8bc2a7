//! Per-trigger detail blocks: clauses, conditions, actions and their inputs.

use crate::lower::classify::{TriggerCategories, TriggerCategory};
use crate::parse::fields::short_json;
use crate::parse::{Action, Clause, Condition, InputValue, Trigger};
use crate::writer::LineWriter;

use super::NONE;

const NO_DESCRIPTION: &str = "(no description)";
const NO_ID: &str = "(no id)";
const UNKNOWN_ACTION: &str = "UNKNOWN_ACTION";
const EXPRESSION_PREVIEW_LEN: usize = 40;

/// All categories in display order, each with a count header.
pub fn write_categories(w: &mut LineWriter, categories: &TriggerCategories) {
    for category in TriggerCategory::DISPLAY_ORDER {
        let triggers = categories.get(category);
        w.blank();
        w.line(&format!("=== {} ({}) ===", category.title(), triggers.len()));
        w.indented(|w| {
            if triggers.is_empty() {
                w.line(NONE);
            }
            for trigger in triggers {
                write_trigger(w, trigger);
            }
        });
    }
}

pub fn write_trigger(w: &mut LineWriter, trigger: &Trigger) {
    w.line(&format!(
        "- Trigger {}: {}",
        trigger.id.as_deref().unwrap_or(NO_ID),
        trigger.label.as_deref().unwrap_or(NO_DESCRIPTION)
    ));
    w.indented(|w| {
        w.line(&format!("Event type: {}", trigger.event_type));
        if let Some(logic) = &trigger.logic {
            w.line(&format!("Condition logic: {}", logic));
        }
        if trigger.clauses.is_empty() {
            w.line("(No clauses)");
        }
        for (i, clause) in trigger.clauses.iter().enumerate() {
            write_clause(w, i + 1, clause);
        }
    });
}

fn write_clause(w: &mut LineWriter, n: usize, clause: &Clause) {
    match &clause.logic {
        Some(logic) => w.line(&format!("Clause {}: (logic: {})", n, logic)),
        None => w.line(&format!("Clause {}:", n)),
    }
    w.indented(|w| {
        if clause.conditions.is_empty() {
            w.line("IF: (no conditions)");
        } else {
            w.line(&format!("IF conditions (count: {}):", clause.conditions.len()));
            w.indented(|w| {
                for (i, condition) in clause.conditions.iter().enumerate() {
                    w.line(&format!("{}. {}", i + 1, condition_summary(condition)));
                }
            });
        }

        if clause.actions.is_empty() {
            w.line("THEN: (no actions)");
        } else {
            w.line("THEN actions:");
            w.indented(|w| {
                for (i, action) in clause.actions.iter().enumerate() {
                    w.line(&format!("{}. {}", i + 1, action_summary(action)));
                }
            });
        }
    });
}

/// `type=…, LHS=…, op=…, RHS=…`, or the raw condition when none of those exist.
pub fn condition_summary(condition: &Condition) -> String {
    let mut pieces = Vec::new();
    if let Some(kind) = &condition.kind {
        pieces.push(format!("type={}", kind));
    }
    if let Some(left) = &condition.left {
        pieces.push(format!("LHS={}", short_json(left)));
    }
    if let Some(op) = &condition.operator {
        pieces.push(format!("op={}", op));
    }
    if let Some(right) = &condition.right {
        pieces.push(format!("RHS={}", short_json(right)));
    }

    if pieces.is_empty() {
        format!("(raw) {}", short_json(&condition.raw))
    } else {
        pieces.join(", ")
    }
}

/// `<type> (<name>) [TRANSITION] -> <inputs>`
pub fn action_summary(action: &Action) -> String {
    let mut out = action.kind.as_deref().unwrap_or(UNKNOWN_ACTION).to_string();
    if let Some(name) = &action.name {
        out.push_str(&format!(" ({})", name));
    }
    if action.is_transition {
        out.push_str(" [TRANSITION]");
    }
    out.push_str(" -> ");
    out.push_str(&input_summary(&action.input_values));
    out
}

/// Bracketed description of each input value, or `(no inputs)`.
pub fn input_summary(inputs: &[InputValue]) -> String {
    if inputs.is_empty() {
        return "(no inputs)".to_string();
    }
    inputs
        .iter()
        .map(|iv| {
            let mut bits = vec![format!("source={}", iv.source.kind().unwrap_or("?"))];
            if !iv.path.is_empty() {
                bits.push(format!("path={}", iv.path.join("/")));
            }
            if let Some(slot) = &iv.slot_ref {
                bits.push(format!("slot={}", slot));
            }
            if let Some(var) = &iv.variable_ref {
                bits.push(format!("var={}", var));
            }
            if let Some(expr) = &iv.expression {
                let preview: String = expr.chars().take(EXPRESSION_PREVIEW_LEN).collect();
                bits.push(format!("expr={}...", preview));
            }
            if let Some(step) = &iv.target_step_id {
                bits.push(format!("stepId={}", step));
            }
            format!("[{}]", bits.join(", "))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
