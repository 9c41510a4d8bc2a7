//! Typed diagram statements and their text form.

use std::fmt;

use serde::Serialize;

use crate::writer::LineWriter;

pub const FLOWCHART_DIRECTION: &str = "LR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeShape {
    /// `id["label"]`
    Box,
    /// `id("label")`
    Rounded,
    /// `id{"label"}`
    Diamond,
    /// `id(("label"))`
    Circle,
}

impl NodeShape {
    fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            NodeShape::Box => ("[\"", "\"]"),
            NodeShape::Rounded => ("(\"", "\")"),
            NodeShape::Diamond => ("{\"", "\"}"),
            NodeShape::Circle => ("((\"", "\"))"),
        }
    }
}

/// One line of the diagram. Labels are stored ready to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "statement", rename_all = "snake_case")]
pub enum Statement {
    Header {
        direction: String,
    },
    Node {
        id: String,
        shape: NodeShape,
        label: String,
    },
    Edge {
        from: String,
        to: String,
        label: Option<String>,
    },
    SubgraphOpen {
        id: String,
        title: String,
    },
    SubgraphClose,
}

impl Statement {
    pub fn header() -> Self {
        Statement::Header {
            direction: FLOWCHART_DIRECTION.to_string(),
        }
    }

    pub fn node(id: impl Into<String>, shape: NodeShape, label: impl Into<String>) -> Self {
        Statement::Node {
            id: id.into(),
            shape,
            label: label.into(),
        }
    }

    /// Edge whose label is dropped when empty.
    pub fn edge(from: impl Into<String>, to: impl Into<String>, label: &str) -> Self {
        Statement::Edge {
            from: from.into(),
            to: to.into(),
            label: (!label.is_empty()).then(|| label.to_string()),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Header { direction } => write!(f, "flowchart {}", direction),
            Statement::Node { id, shape, label } => {
                let (open, close) = shape.delimiters();
                write!(f, "{}{}{}{}", id, open, label, close)
            }
            Statement::Edge {
                from,
                to,
                label: Some(label),
            } => write!(f, "{} -->|{}| {}", from, label, to),
            Statement::Edge {
                from,
                to,
                label: None,
            } => write!(f, "{} --> {}", from, to),
            Statement::SubgraphOpen { id, title } => write!(f, "subgraph {}[\"{}\"]", id, title),
            Statement::SubgraphClose => write!(f, "end"),
        }
    }
}

/// An ordered statement list, serialized in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagram {
    pub statements: Vec<Statement>,
}

impl Diagram {
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn extend(&mut self, statements: impl IntoIterator<Item = Statement>) {
        self.statements.extend(statements);
    }

    /// Header at column 0, top-level statements at one indent level,
    /// statements inside a subgraph one level deeper.
    pub fn to_mermaid(&self) -> String {
        let mut w = LineWriter::new();
        for statement in &self.statements {
            match statement {
                Statement::Header { .. } | Statement::SubgraphOpen { .. } => {
                    w.line(&statement.to_string());
                    w.indent();
                }
                Statement::SubgraphClose => {
                    w.dedent();
                    w.line(&statement.to_string());
                }
                _ => w.line(&statement.to_string()),
            }
        }
        w.finish()
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_mermaid())
    }
}
