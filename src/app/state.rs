//! Zustand einer Visualisierungs-Sitzung — zentrale Datenhaltung.

use super::drag::DragController;
use super::flow::{FlowAnimator, FlowEvent};
use super::CommandLog;
use crate::core::{
    ActivityEntry, AgentGraph, LayoutConfig, LayoutMode, NodePositions, NodeStatus,
};
use crate::persistence::LayoutPersistence;
use crate::shared::VizOptions;
use glam::Vec2;
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Hauptzustand der Visualisierung
pub struct VizState {
    /// Laufzeit-Optionen
    pub options: VizOptions,
    /// Aus `options` abgeleitete Layout-Konfiguration
    pub layout_config: LayoutConfig,
    /// Unveränderlicher Agenten-Katalog
    pub graph: Arc<AgentGraph>,
    /// Aktuell angewendeter Layout-Modus
    pub layout_mode: LayoutMode,
    /// Aktuelle Node-Positionen (Katalog-Reihenfolge)
    pub positions: NodePositions,
    /// Live-Status pro Agent
    pub statuses: IndexMap<String, NodeStatus>,
    /// Laufende Datenflüsse
    pub flows: Vec<FlowEvent>,
    /// Erzeugt und animiert Datenflüsse
    pub flow_animator: FlowAnimator,
    /// Drag-Zustandsmaschine
    pub drag: DragController,
    /// Per Klick selektierter Node
    pub selected_node_id: Option<String>,
    /// Aktivitäts-Feed (neueste zuerst, gekürzt)
    pub activity: Vec<ActivityEntry>,
    /// Gespeicherte Layouts
    pub persistence: LayoutPersistence,
    /// Zufallsquelle für Force-Layout und Simulation
    pub rng: StdRng,
    /// Ausstehende Navigationsziele (Doppelklick)
    pub pending_navigation: Vec<String>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl VizState {
    /// Erstellt den Zustand ohne berechnetes Layout.
    ///
    /// Positionen werden erst durch `VizCommand::ApplyLayout` gesetzt.
    pub fn new(options: VizOptions, graph: AgentGraph, persistence: LayoutPersistence) -> Self {
        let rng = match options.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let statuses = graph
            .list_nodes()
            .map(|node| (node.id.clone(), node.status))
            .collect();

        Self {
            layout_config: options.layout_config(),
            graph: Arc::new(graph),
            layout_mode: LayoutMode::Circular,
            positions: NodePositions::new(),
            statuses,
            flows: Vec::new(),
            flow_animator: FlowAnimator::new(options.flow_progress_step),
            drag: DragController::new(options.click_threshold_px, options.double_click_window()),
            selected_node_id: None,
            activity: Vec::new(),
            persistence,
            rng,
            pending_navigation: Vec::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Nächster Node innerhalb des Trefferradius um `pos`.
    ///
    /// Bei gleichem Abstand gewinnt der später gezeichnete Node.
    pub fn node_at(&self, pos: Vec2) -> Option<&str> {
        let radius = self.options.node_hit_radius;
        self.positions
            .iter()
            .map(|(id, node_pos)| (id, node_pos.distance(pos)))
            .filter(|(_, distance)| *distance <= radius)
            .fold(None, |best: Option<(&String, f32)>, (id, distance)| match best {
                Some((_, best_distance)) if best_distance < distance => best,
                _ => Some((id, distance)),
            })
            .map(|(id, _)| id.as_str())
    }

    /// Aktuelle Position eines Nodes.
    pub fn position_of(&self, id: &str) -> Option<Vec2> {
        self.positions.get(id).copied()
    }

    /// Anzahl der Nodes im Katalog
    pub fn node_count(&self) -> usize {
        self.graph.len()
    }
}

impl std::fmt::Debug for VizState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VizState")
            .field("layout_mode", &self.layout_mode)
            .field("nodes", &self.graph.len())
            .field("flows", &self.flows.len())
            .field("selected_node_id", &self.selected_node_id)
            .field("dragging", &self.drag.dragging_node_id())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{default_catalog, AgentNode};
    use crate::persistence::MemoryStore;

    fn state_with(positions: &[(&str, Vec2)]) -> VizState {
        let graph = AgentGraph::from_nodes(
            positions
                .iter()
                .map(|(id, _)| AgentNode::new(*id, id.to_uppercase(), [1.0; 4])),
        );
        let mut state = VizState::new(
            VizOptions::default(),
            graph,
            LayoutPersistence::new(MemoryStore::new()),
        );
        state.positions = positions
            .iter()
            .map(|(id, pos)| (id.to_string(), *pos))
            .collect();
        state
    }

    #[test]
    fn node_at_picks_nearest_within_radius() {
        let state = state_with(&[("a", Vec2::new(100.0, 100.0)), ("b", Vec2::new(150.0, 100.0))]);
        assert_eq!(state.node_at(Vec2::new(110.0, 100.0)), Some("a"));
        assert_eq!(state.node_at(Vec2::new(140.0, 100.0)), Some("b"));
        assert_eq!(state.node_at(Vec2::new(400.0, 400.0)), None);
    }

    #[test]
    fn node_at_tie_prefers_later_node() {
        let state = state_with(&[("a", Vec2::new(100.0, 100.0)), ("b", Vec2::new(100.0, 100.0))]);
        assert_eq!(state.node_at(Vec2::new(100.0, 100.0)), Some("b"));
    }

    #[test]
    fn new_state_copies_initial_statuses() {
        let graph = default_catalog();
        let expected: Vec<NodeStatus> = graph.list_nodes().map(|n| n.status).collect();
        let state = VizState::new(
            VizOptions::default(),
            graph,
            LayoutPersistence::new(MemoryStore::new()),
        );
        assert_eq!(state.statuses.values().copied().collect::<Vec<_>>(), expected);
        assert!(state.positions.is_empty());
        assert_eq!(state.layout_mode, LayoutMode::Circular);
    }
}
