//! Handler für Drag, Klick und Selektion.

use crate::app::drag::DragRelease;
use crate::app::VizState;
use crate::core::{compute_layout, LayoutMode};
use glam::Vec2;
use std::time::Duration;

/// Greift den Node `node_id` an der Zeigerposition.
pub fn begin(state: &mut VizState, node_id: String, pointer: Vec2) {
    let Some(node_pos) = state.position_of(&node_id) else {
        log::debug!("Drag auf Node '{}' ohne Position ignoriert", node_id);
        return;
    };
    state.drag.press(node_id, node_pos, pointer);
}

/// Führt den gegriffenen Node dem Zeiger nach.
pub fn drag_to(state: &mut VizState, pointer: Vec2) {
    let canvas = state.options.canvas();
    let margin = state.options.drag_margin;
    if let Some((node_id, pos)) = state.drag.drag_to(pointer, &canvas, margin) {
        if let Some(slot) = state.positions.get_mut(&node_id) {
            *slot = pos;
        }
    }
}

/// Beendet die Interaktion: Klick selektiert, Doppelklick navigiert, Drag wird gespeichert.
pub fn release(state: &mut VizState, at: Option<Duration>) -> anyhow::Result<()> {
    match state.drag.release(at) {
        DragRelease::Ignored => {}
        DragRelease::Cancelled { node_id } => {
            log::debug!("Drag auf '{}' ohne Bewegung abgebrochen", node_id);
        }
        DragRelease::Click { node_id, double } => {
            if double {
                if let Some(route) = state.graph.node(&node_id).and_then(|n| n.route.clone()) {
                    state.pending_navigation.push(route);
                }
            }
            state.selected_node_id = Some(node_id);
        }
        DragRelease::Dropped { node_id } => commit(state, &node_id)?,
    }
    Ok(())
}

/// Übernimmt die aktuellen Positionen als Custom-Layout und speichert sie.
///
/// Nodes ohne Position (z.B. nach einem Hierarchie-Layout mit lückenhafter
/// Ebenen-Tabelle) bekommen ihre Kreis-Position, damit das gespeicherte
/// Custom-Layout jeden Node abdeckt. Unbekannte Node-IDs sind ein No-op.
pub fn commit(state: &mut VizState, node_id: &str) -> anyhow::Result<()> {
    if !state.graph.contains(node_id) {
        log::debug!("Commit für unbekannten Node '{}' ignoriert", node_id);
        return Ok(());
    }

    fill_unplaced(state);
    state.layout_mode = LayoutMode::Custom;
    log::info!("Node '{}' abgelegt, Layout ist jetzt custom", node_id);
    state.persistence.save_positions(&state.positions)?;
    state.persistence.save_mode(LayoutMode::Custom)?;
    Ok(())
}

fn fill_unplaced(state: &mut VizState) {
    let missing = state
        .graph
        .node_ids()
        .filter(|id| !state.positions.contains_key(*id))
        .count();
    if missing == 0 {
        return;
    }

    let fallback = compute_layout(
        LayoutMode::Circular,
        &state.graph,
        &state.layout_config,
        None,
        &mut state.rng,
    );
    let canvas = state.options.canvas();
    let positions = state
        .graph
        .node_ids()
        .filter_map(|id| {
            let pos = state
                .positions
                .get(id)
                .or_else(|| fallback.positions.get(id))?;
            Some((id.to_string(), canvas.clamp(*pos, 0.0)))
        })
        .collect();
    state.positions = positions;
    log::debug!("{} Nodes ohne Position auf Kreis-Position gesetzt", missing);
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut VizState) {
    state.selected_node_id = None;
}
