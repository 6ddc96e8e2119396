//! Handler für die Tick-Animation. Ticks verändern nie Positionen.

use crate::app::VizState;

/// Ersetzt die Status-Map durch neu gewürfelte Werte.
pub fn randomize_statuses(state: &mut VizState) {
    state.statuses = state
        .flow_animator
        .randomize_statuses(&state.graph, &mut state.rng);
}

/// Hängt einen neuen Datenfluss an.
pub fn spawn(state: &mut VizState) {
    let Some(flow) = state.flow_animator.spawn(&state.graph, &mut state.rng) else {
        log::debug!("Kein Node mit auflösbarer Verbindung, kein Datenfluss");
        return;
    };
    log::debug!(
        "Datenfluss #{} '{}': {} → {}",
        flow.id,
        flow.label,
        flow.from,
        flow.to
    );
    let mut flows = state.flows.clone();
    flows.push(flow);
    state.flows = flows;
}

/// Erhöht den Fortschritt aller Datenflüsse.
pub fn advance(state: &mut VizState) {
    state.flows = state.flow_animator.advance(&state.flows);
}
