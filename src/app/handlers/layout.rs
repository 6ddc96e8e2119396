//! Handler für Layout-Wechsel und Reset.

use crate::app::VizState;
use crate::core::{compute_layout, LayoutMode};

/// Berechnet das Layout für `mode` und übernimmt es in den State.
///
/// Ein gerade gezogener Node behält seine Live-Position. Der Modus wird nur
/// gespeichert, wenn er ohne Fallback angewendet werden konnte.
pub fn apply(state: &mut VizState, mode: LayoutMode) -> anyhow::Result<()> {
    let persisted = match mode {
        LayoutMode::Custom => state.persistence.load_positions(),
        _ => None,
    };
    let mut outcome = compute_layout(
        mode,
        &state.graph,
        &state.layout_config,
        persisted.as_ref(),
        &mut state.rng,
    );

    if let Some(dragged) = state.drag.dragging_node_id() {
        if let (Some(live), Some(slot)) = (
            state.positions.get(dragged),
            outcome.positions.get_mut(dragged),
        ) {
            *slot = *live;
        }
    }

    log::info!(
        "Layout '{}' angewendet ({} Nodes platziert)",
        outcome.mode,
        outcome.positions.len()
    );
    state.positions = outcome.positions;
    state.layout_mode = outcome.mode;

    if outcome.mode == mode {
        state.persistence.save_mode(mode)?;
    }
    Ok(())
}

/// Verwirft die gespeicherten Custom-Positionen.
pub fn clear_custom_positions(state: &mut VizState) -> anyhow::Result<()> {
    state.persistence.clear_positions()?;
    log::info!("Custom-Layout verworfen");
    Ok(())
}
