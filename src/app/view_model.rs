//! Builder für Snapshots aus dem VizState.

use crate::app::VizState;
use crate::shared::{EdgeView, FlowView, NodeView, VizSnapshot};

/// Baut einen VizSnapshot aus dem aktuellen VizState.
///
/// Kanten und Datenflüsse mit einem Endpunkt ohne Position (unbekannte ID oder
/// vom Layout ausgelassen) werden übersprungen.
pub fn build(state: &VizState) -> VizSnapshot {
    let dragging = state.drag.dragging_node_id();

    let nodes = state
        .graph
        .list_nodes()
        .filter_map(|node| {
            let position = state.position_of(&node.id)?;
            Some(NodeView {
                id: node.id.clone(),
                name: node.name.clone(),
                color: node.color,
                position,
                status: state.statuses.get(&node.id).copied().unwrap_or(node.status),
                selected: state.selected_node_id.as_deref() == Some(node.id.as_str()),
                dragging: dragging == Some(node.id.as_str()),
            })
        })
        .collect();

    let edges = state
        .graph
        .edges()
        .filter_map(|edge| {
            Some(EdgeView {
                from_pos: state.position_of(edge.from)?,
                to_pos: state.position_of(edge.to)?,
                from: edge.from.to_string(),
                to: edge.to.to_string(),
            })
        })
        .collect();

    let flows = state
        .flows
        .iter()
        .filter_map(|flow| {
            let from = state.position_of(&flow.from)?;
            let to = state.position_of(&flow.to)?;
            Some(FlowView {
                id: flow.id,
                from: flow.from.clone(),
                to: flow.to.clone(),
                label: flow.label.to_string(),
                progress: flow.progress,
                position: flow.interpolate(from, to),
            })
        })
        .collect();

    VizSnapshot {
        layout_mode: state.layout_mode,
        nodes,
        edges,
        flows,
        activity: state.activity.clone(),
        selected_node_id: state.selected_node_id.clone(),
        dragging_node_id: dragging.map(str::to_string),
    }
}
