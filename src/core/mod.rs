//! Core-Domänentypen: Agenten, Graph, Canvas, Layout-Algorithmen.

pub mod activity;
pub mod canvas;
pub mod catalog;
pub mod graph;
/// Layout-Engine
///
/// Reine Funktionen ohne I/O:
/// - circular / hierarchical / force-directed / star / custom
pub mod layout;
pub mod node;

pub use activity::ActivityEntry;
pub use canvas::CanvasBounds;
pub use catalog::{default_catalog, default_hierarchy_levels, HUB_AGENT_ID};
pub use graph::{AgentGraph, Edge};
pub use layout::{
    compute_layout, ForceParams, LayoutConfig, LayoutMode, LayoutOutcome, NodePositions,
};
pub use node::{AgentNode, NodeStatus};
