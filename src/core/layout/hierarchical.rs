//! Hierarchisches Layout über eine fest konfigurierte Ebenen-Tabelle.
//!
//! Die Ebenen werden nicht aus dem Graph abgeleitet. Nodes ohne Eintrag in der
//! Tabelle bekommen keine Position. Passt die Tabelle mit dem konfigurierten
//! Ebenen-Abstand nicht auf den Canvas, wird der Abstand gestaucht.

use super::NodePositions;
use crate::core::{AgentGraph, CanvasBounds};
use glam::Vec2;

pub(super) fn layout(
    graph: &AgentGraph,
    levels: &[Vec<String>],
    canvas: CanvasBounds,
    top: f32,
    level_spacing: f32,
) -> NodePositions {
    let mut positions = NodePositions::with_capacity(graph.len());
    let level_spacing = fitted_spacing(levels.len(), canvas, top, level_spacing);

    for (level_index, level) in levels.iter().enumerate() {
        // Unbekannte IDs und Doppel-Einträge (erste Ebene gewinnt) vor dem Verteilen entfernen
        let members: Vec<&String> = level
            .iter()
            .filter(|id| graph.contains(id) && !positions.contains_key(*id))
            .fold(Vec::new(), |mut acc, id| {
                if !acc.contains(&id) {
                    acc.push(id);
                }
                acc
            });

        let y = top + level_index as f32 * level_spacing;
        let slots = (members.len() + 1) as f32;
        for (slot, id) in members.into_iter().enumerate() {
            let x = canvas.width * (slot + 1) as f32 / slots;
            positions.insert(id.clone(), Vec2::new(x, y));
        }
    }

    let omitted = graph.len() - positions.len();
    if omitted > 0 {
        log::debug!("Hierarchie-Layout: {} Nodes ohne Ebene ausgelassen", omitted);
    }
    positions
}

/// Abstand so stauchen, dass die unterste Ebene nicht über den Canvas-Rand ragt.
fn fitted_spacing(level_count: usize, canvas: CanvasBounds, top: f32, spacing: f32) -> f32 {
    if level_count < 2 {
        return spacing;
    }
    let gaps = (level_count - 1) as f32;
    if top + gaps * spacing <= canvas.height {
        return spacing;
    }
    let fitted = (canvas.height - top).max(0.0) / gaps;
    log::warn!(
        "Hierarchie: {} Ebenen passen nicht auf {} px Höhe, Abstand {} → {}",
        level_count,
        canvas.height,
        spacing,
        fitted
    );
    fitted
}
