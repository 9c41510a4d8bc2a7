//! Graph model shared by the graph builder and the diagram renderer.

pub mod graph;
pub mod ids;

pub use graph::{EdgeKind, EdgeView, GraphEdge, GraphNode, NodeKind, StepGraph};
