//! Read-only Snapshot als Übergabevertrag zwischen Sitzung und Renderer.
//!
//! Lebt im shared-Modul, da `app` ihn baut und der Host ihn konsumiert.

use crate::core::{ActivityEntry, LayoutMode, NodeStatus};
use glam::Vec2;
use serde::Serialize;

/// Darstellungsdaten eines Agenten
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub id: String,
    pub name: String,
    /// RGBA-Kategoriefarbe
    pub color: [f32; 4],
    pub position: Vec2,
    pub status: NodeStatus,
    /// Per Klick selektiert
    pub selected: bool,
    /// Wird gerade gezogen
    pub dragging: bool,
}

/// Eine gezeichnete Kante zwischen zwei platzierten Nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
    pub from_pos: Vec2,
    pub to_pos: Vec2,
}

/// Ein animierter Datenfluss mit aktueller Markerposition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowView {
    pub id: u64,
    pub from: String,
    pub to: String,
    pub label: String,
    pub progress: u8,
    pub position: Vec2,
}

/// Read-only Daten für einen Frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VizSnapshot {
    /// Aktuell angewendeter Layout-Modus
    pub layout_mode: LayoutMode,
    /// Platzierte Nodes in Katalog-Reihenfolge
    pub nodes: Vec<NodeView>,
    /// Kanten mit beidseitig platzierten Endpunkten
    pub edges: Vec<EdgeView>,
    /// Laufende Datenflüsse
    pub flows: Vec<FlowView>,
    /// Aktivitäts-Feed (neueste zuerst)
    pub activity: Vec<ActivityEntry>,
    pub selected_node_id: Option<String>,
    pub dragging_node_id: Option<String>,
}

impl VizSnapshot {
    /// Findet einen Node per ID.
    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Prüft ob die gerichtete Kante `from → to` gezeichnet wird.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|edge| edge.from == from && edge.to == to)
    }
}
