//! Mapping von Host-Intents auf mutierende Viz-Commands.

use super::{VizCommand, VizIntent, VizState};
use crate::core::LayoutMode;


/// Übersetzt einen `VizIntent` in eine Sequenz ausführbarer `VizCommand`s.
pub fn map_intent_to_commands(state: &VizState, intent: VizIntent) -> Vec<VizCommand> {
    let dragging = state.drag.dragging_node_id().is_some();

    match intent {
        VizIntent::PointerDown { pos, .. } => match state.node_at(pos) {
            Some(node_id) if !dragging => vec![VizCommand::BeginDrag {
                node_id: node_id.to_string(),
                pointer: pos,
            }],
            Some(_) => vec![],
            None if dragging => vec![],
            None => vec![VizCommand::ClearSelection],
        },
        VizIntent::PointerMoved { pos } if dragging => vec![VizCommand::DragTo { pointer: pos }],
        VizIntent::PointerMoved { .. } => vec![],
        VizIntent::PointerUp { pos, at } if dragging => vec![
            VizCommand::DragTo { pointer: pos },
            VizCommand::ReleaseDrag { at: Some(at) },
        ],
        VizIntent::PointerUp { .. } => vec![],
        VizIntent::PointerLeft if dragging => vec![VizCommand::ReleaseDrag { at: None }],
        VizIntent::PointerLeft => vec![],
        VizIntent::LayoutModeRequested { mode } => vec![VizCommand::ApplyLayout { mode }],
        VizIntent::LayoutModeNameRequested { name } => vec![VizCommand::ApplyLayout {
            mode: LayoutMode::parse_lossy(&name),
        }],
        VizIntent::ResetLayoutRequested => vec![
            VizCommand::ApplyLayout {
                mode: LayoutMode::Circular,
            },
            VizCommand::ClearCustomPositions,
        ],
        VizIntent::ActivityFeedUpdated { entries } => {
            vec![VizCommand::SetActivityFeed { entries }]
        }
        VizIntent::CoarseTickElapsed => {
            vec![VizCommand::RandomizeStatuses, VizCommand::SpawnFlow]
        }
        VizIntent::FineTickElapsed => vec![VizCommand::AdvanceFlows],
    }
}
