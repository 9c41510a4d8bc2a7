//! Logic blocks: one subgraph per trigger encoding its IF/THEN clause chain.
//!
//! Clauses are evaluated first-match-wins. Each decision node has a `true`
//! edge to its own action node and a `false` edge falling through to the next
//! clause's decision node (or its action node when that clause is the
//! unconditional default).

use crate::ir::ids::trigger_node_id;
use crate::lower::index::ResolutionContext;
use crate::parse::Trigger;

use super::labels::{actions_label, condition_label};
use super::sanitize::sanitize_label;
use super::statement::{NodeShape, Statement};

const START_LABEL: &str = "start";
const TRUE_BRANCH: &str = "true";
const FALSE_BRANCH: &str = "false";

/// Node ids emitted for one clause.
#[derive(Debug, Default)]
struct ClauseNodes {
    decision: Option<String>,
    action: Option<String>,
}

impl ClauseNodes {
    /// Where control enters this clause.
    fn entry(&self) -> Option<&str> {
        self.decision.as_deref().or(self.action.as_deref())
    }
}

pub fn logic_block_id(trigger_id: &str) -> String {
    format!("{}_logic", trigger_node_id(trigger_id))
}

pub fn start_node_id(trigger_id: &str) -> String {
    format!("{}_start", trigger_node_id(trigger_id))
}

/// Statements for the logic block of `trigger`, from `subgraph` through `end`.
pub fn logic_block(trigger_id: &str, trigger: &Trigger, ctx: &ResolutionContext) -> Vec<Statement> {
    let base = trigger_node_id(trigger_id);
    let start = start_node_id(trigger_id);
    let title = format!("Logic: {}", sanitize_label(trigger.display_label()));

    let mut out = vec![
        Statement::SubgraphOpen {
            id: logic_block_id(trigger_id),
            title,
        },
        Statement::node(start.clone(), NodeShape::Circle, START_LABEL),
    ];

    // 1. Clause nodes
    let mut clauses: Vec<ClauseNodes> = Vec::with_capacity(trigger.clauses.len());
    for (i, clause) in trigger.clauses.iter().enumerate() {
        let n = i + 1;
        let mut nodes = ClauseNodes::default();

        if let Some(first) = clause.conditions.first() {
            let id = format!("{}_c{}", base, n);
            let label = sanitize_label(&condition_label(first, ctx));
            out.push(Statement::node(id.clone(), NodeShape::Diamond, label));
            nodes.decision = Some(id);
        }
        if !clause.actions.is_empty() {
            let id = format!("{}_a{}", base, n);
            let label = sanitize_label(&actions_label(&clause.actions, ctx));
            out.push(Statement::node(id.clone(), NodeShape::Box, label));
            nodes.action = Some(id);
        }
        clauses.push(nodes);
    }

    // 2. Wiring: start → first clause, then true/false per clause
    if let Some(entry) = clauses.first().and_then(ClauseNodes::entry) {
        out.push(Statement::edge(start, entry, ""));
    }
    for (i, nodes) in clauses.iter().enumerate() {
        let Some(decision) = nodes.decision.as_deref() else {
            continue;
        };
        if let Some(action) = nodes.action.as_deref() {
            out.push(Statement::edge(decision, action, TRUE_BRANCH));
        }
        if let Some(next) = clauses.get(i + 1).and_then(ClauseNodes::entry) {
            out.push(Statement::edge(decision, next, FALSE_BRANCH));
        }
    }

    out.push(Statement::SubgraphClose);
    out
}
