//! Application Controller für zentrale Event-Verarbeitung.

use super::view_model;
use super::{VizCommand, VizIntent, VizState};
use crate::shared::VizSnapshot;

/// Orchestriert Host-Events und Feature-Handler auf den VizState.
#[derive(Debug, Default)]
pub struct VizController;

impl VizController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut VizState, intent: VizIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &VizState, intent: VizIntent) -> Vec<VizCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem VizState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(&mut self, state: &mut VizState, command: VizCommand) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Layout ===
            VizCommand::ApplyLayout { mode } => handlers::layout::apply(state, mode)?,
            VizCommand::ClearCustomPositions => handlers::layout::clear_custom_positions(state)?,

            // === Drag & Selektion ===
            VizCommand::BeginDrag { node_id, pointer } => {
                handlers::drag::begin(state, node_id, pointer)
            }
            VizCommand::DragTo { pointer } => handlers::drag::drag_to(state, pointer),
            VizCommand::ReleaseDrag { at } => handlers::drag::release(state, at)?,
            VizCommand::ClearSelection => handlers::drag::clear_selection(state),

            // === Feed ===
            VizCommand::SetActivityFeed { entries } => {
                handlers::feed::set_activity_feed(state, entries)
            }

            // === Animation ===
            VizCommand::RandomizeStatuses => handlers::flow::randomize_statuses(state),
            VizCommand::SpawnFlow => handlers::flow::spawn(state),
            VizCommand::AdvanceFlows => handlers::flow::advance(state),
        }

        Ok(())
    }

    /// Baut den Snapshot für den aktuellen Frame.
    pub fn build_snapshot(&self, state: &VizState) -> VizSnapshot {
        view_model::build(state)
    }
}
