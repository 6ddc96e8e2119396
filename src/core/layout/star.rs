//! Stern-Layout: Hub im Zentrum, alle übrigen Nodes auf einem Ring.

use super::circular::ring_positions;
use super::NodePositions;
use crate::core::{AgentGraph, CanvasBounds};

/// Gibt `None` zurück, wenn der Hub nicht im Graph existiert.
pub(super) fn layout(
    graph: &AgentGraph,
    hub_id: &str,
    canvas: CanvasBounds,
    radius: f32,
) -> Option<NodePositions> {
    if !graph.contains(hub_id) {
        return None;
    }

    let center = canvas.center();
    let spokes: Vec<&str> = graph.node_ids().filter(|id| *id != hub_id).collect();
    let ring = ring_positions(spokes.len(), center, radius);

    let mut positions = NodePositions::with_capacity(graph.len());
    positions.insert(hub_id.to_string(), center);
    for (id, pos) in spokes.into_iter().zip(ring) {
        positions.insert(id.to_string(), pos);
    }
    Some(positions)
}
