//! Structural checks over a statement list.

use std::collections::HashSet;

use crate::error::InspectError;

use super::statement::{Diagram, Statement};

/// Check a diagram before it is printed. Returns every problem found.
pub fn validate_diagram(diagram: &Diagram) -> Vec<InspectError> {
    let mut errors = Vec::new();
    check_header(diagram, &mut errors);
    check_blocks(diagram, &mut errors);
    check_edge_endpoints(diagram, &mut errors);
    check_unique_ids(diagram, &mut errors);
    errors
}

fn check_header(diagram: &Diagram, errors: &mut Vec<InspectError>) {
    if !matches!(diagram.statements.first(), Some(Statement::Header { .. })) {
        errors.push(InspectError::render(
            "D001",
            "Diagram must start with a flowchart header",
            None,
        ));
    }
}

fn check_blocks(diagram: &Diagram, errors: &mut Vec<InspectError>) {
    let mut open: Vec<&str> = Vec::new();
    for statement in &diagram.statements {
        match statement {
            Statement::SubgraphOpen { id, .. } => open.push(id.as_str()),
            Statement::SubgraphClose => {
                if open.pop().is_none() {
                    errors.push(InspectError::render(
                        "D002",
                        "'end' without a matching subgraph",
                        None,
                    ));
                }
            }
            _ => {}
        }
    }
    for id in open {
        errors.push(InspectError::render(
            "D002",
            "Subgraph is never closed",
            Some(id.to_string()),
        ));
    }
}

fn check_edge_endpoints(diagram: &Diagram, errors: &mut Vec<InspectError>) {
    let declared: HashSet<&str> = diagram
        .statements
        .iter()
        .filter_map(|s| match s {
            Statement::Node { id, .. } => Some(id.as_str()),
            _ => None,
        })
        .collect();

    for statement in &diagram.statements {
        let Statement::Edge { from, to, .. } = statement else {
            continue;
        };
        for endpoint in [from, to] {
            if !declared.contains(endpoint.as_str()) {
                errors.push(InspectError::render(
                    "D003",
                    format!("Edge {} --> {} references an undeclared node", from, to),
                    Some(endpoint.clone()),
                ));
            }
        }
    }
}

fn check_unique_ids(diagram: &Diagram, errors: &mut Vec<InspectError>) {
    let mut seen: HashSet<&str> = HashSet::new();
    for statement in &diagram.statements {
        let id = match statement {
            Statement::Node { id, .. } | Statement::SubgraphOpen { id, .. } => id,
            _ => continue,
        };
        if !seen.insert(id.as_str()) {
            errors.push(InspectError::render(
                "D004",
                format!("Identifier {} is declared more than once", id),
                Some(id.clone()),
            ));
        }
    }
}
