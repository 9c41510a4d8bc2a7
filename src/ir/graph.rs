//! petgraph-based directed graph of one step's wiring.
//!
//! Node and edge indices in a `DiGraph` are assigned in insertion order and
//! nothing is ever removed, so iterating indices reproduces insertion order.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Step,
    Trigger,
    Widget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Event,
    Transition,
    WidgetEvent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub kind: EdgeKind,
    pub label: String,
}

/// An edge with its endpoints resolved to node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub kind: EdgeKind,
    pub label: &'a str,
}

#[derive(Debug, Default)]
pub struct StepGraph {
    pub graph: DiGraph<GraphNode, GraphEdge>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl StepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or return the existing one untouched if `id` is taken.
    pub fn add_node(&mut self, id: &str, kind: NodeKind, label: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(GraphNode {
            id: id.to_string(),
            kind,
            label: label.to_string(),
        });
        self.node_indices.insert(id.to_string(), idx);
        idx
    }

    /// Append an edge. Parallel edges are kept.
    pub fn add_edge(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        kind: EdgeKind,
        label: &str,
    ) -> EdgeIndex {
        self.graph.add_edge(
            source,
            target,
            GraphEdge {
                kind,
                label: label.to_string(),
            },
        )
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_indices.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_indices.get(id).map(|&idx| &self.graph[idx])
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> {
        self.graph.edge_indices().filter_map(|e| {
            let (s, t) = self.graph.edge_endpoints(e)?;
            let edge = &self.graph[e];
            Some(EdgeView {
                source: &self.graph[s].id,
                target: &self.graph[t].id,
                kind: edge.kind,
                label: &edge.label,
            })
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
