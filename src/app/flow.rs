//! Synthetische Datenflüsse entlang der Graph-Kanten.
//!
//! Grober Tick: Status würfeln und einen Fluss erzeugen. Feiner Tick: Fortschritt
//! erhöhen. Beide liefern vollständige Ersatzwerte, der Aufrufer tauscht sie ein.

use crate::core::{AgentGraph, NodeStatus};
use glam::Vec2;
use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;

/// Beschriftungen der erzeugten Datenflüsse
pub const FLOW_LABELS: [&str; 6] = [
    "Patient Data",
    "Analysis",
    "Recommendation",
    "Query",
    "Update",
    "Alert",
];

/// Ein Datenfluss von `from` nach `to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEvent {
    /// Sitzungsweit eindeutige, aufsteigende ID
    pub id: u64,
    pub from: String,
    pub to: String,
    pub label: &'static str,
    /// Fortschritt in Prozent (0..=100)
    pub progress: u8,
}

impl FlowEvent {
    /// Fortschritt eines abgeschlossenen Flusses
    pub const COMPLETE: u8 = 100;

    /// Markerposition zwischen den Endpunkten.
    pub fn interpolate(&self, from: Vec2, to: Vec2) -> Vec2 {
        from.lerp(to, f32::from(self.progress.min(Self::COMPLETE)) / 100.0)
    }

    /// `true` sobald 100 % erreicht sind.
    pub fn is_complete(&self) -> bool {
        self.progress >= Self::COMPLETE
    }
}

/// Erzeugt und animiert Datenflüsse
#[derive(Debug, Clone)]
pub struct FlowAnimator {
    step: u8,
    next_id: u64,
}

impl FlowAnimator {
    /// `step` ist das Fortschritts-Inkrement pro feinem Tick (mindestens 1).
    pub fn new(step: u8) -> Self {
        Self {
            step: step.max(1),
            next_id: 1,
        }
    }

    /// Neue Status-Map mit gleichverteiltem Zufallsstatus pro Node.
    pub fn randomize_statuses<R: Rng + ?Sized>(
        &self,
        graph: &AgentGraph,
        rng: &mut R,
    ) -> IndexMap<String, NodeStatus> {
        graph
            .node_ids()
            .map(|id| {
                let status = NodeStatus::ALL[rng.gen_range(0..NodeStatus::ALL.len())];
                (id.to_string(), status)
            })
            .collect()
    }

    /// Erzeugt einen neuen Fluss.
    ///
    /// Quelle ist ein gleichverteilt gewählter Node mit mindestens einer
    /// auflösbaren Verbindung, Ziel eine davon. `None` wenn kein Node eine hat.
    pub fn spawn<R: Rng + ?Sized>(&mut self, graph: &AgentGraph, rng: &mut R) -> Option<FlowEvent> {
        let sources: Vec<&str> = graph
            .node_ids()
            .filter(|id| graph.resolved_neighbors_of(id).next().is_some())
            .collect();
        let from = *sources.choose(rng)?;
        let targets: Vec<&str> = graph.resolved_neighbors_of(from).collect();
        let to = *targets.choose(rng)?;
        let label = FLOW_LABELS[rng.gen_range(0..FLOW_LABELS.len())];

        let id = self.next_id;
        self.next_id += 1;
        Some(FlowEvent {
            id,
            from: from.to_string(),
            to: to.to_string(),
            label,
            progress: 0,
        })
    }

    /// Ein feiner Tick: abgeschlossene Flüsse entfallen, alle anderen rücken vor.
    pub fn advance(&self, flows: &[FlowEvent]) -> Vec<FlowEvent> {
        flows
            .iter()
            .filter(|flow| !flow.is_complete())
            .map(|flow| FlowEvent {
                progress: flow.progress.saturating_add(self.step).min(FlowEvent::COMPLETE),
                ..flow.clone()
            })
            .collect()
    }
}
