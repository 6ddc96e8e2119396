//! Layout-Engine: reine Funktionen von Node-Menge → 2D-Positionen.
//!
//! Jeder Algorithmus liefert geklemmte Canvas-Koordinaten. Unbekannte Modi und
//! unvollständige Custom-Daten fallen auf das Kreis-Layout zurück.

mod circular;
mod force_directed;
mod hierarchical;
mod star;


use super::{AgentGraph, CanvasBounds};
use glam::Vec2;
use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use force_directed::MIN_FORCE_DISTANCE;

/// Positionen aller platzierten Nodes (Node-ID → Canvas-Koordinate)
pub type NodePositions = IndexMap<String, Vec2>;

/// Aktiver Layout-Algorithmus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Vom Benutzer per Drag festgelegte Positionen
    Custom,
    /// Gleichmäßig auf einem Kreis
    #[default]
    Circular,
    /// Feste Ebenen von oben nach unten
    Hierarchical,
    /// Physik-Relaxation (Abstoßung + Anziehung)
    ForceDirected,
    /// Hub im Zentrum, Rest auf einem Ring
    Star,
}

impl LayoutMode {
    /// Alle Modi in Anzeige-Reihenfolge.
    pub const ALL: [LayoutMode; 5] = [
        LayoutMode::Custom,
        LayoutMode::Circular,
        LayoutMode::Hierarchical,
        LayoutMode::ForceDirected,
        LayoutMode::Star,
    ];

    /// Persistierte String-Form.
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Custom => "custom",
            LayoutMode::Circular => "circular",
            LayoutMode::Hierarchical => "hierarchical",
            LayoutMode::ForceDirected => "force-directed",
            LayoutMode::Star => "star",
        }
    }

    /// Parst die String-Form. Unbekannte Werte → `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }

    /// Parst die String-Form, unbekannte Werte werden zu `Circular`.
    pub fn parse_lossy(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            log::warn!("Unbekannter Layout-Modus '{}', verwende circular", value);
            LayoutMode::Circular
        })
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter der Force-Directed-Relaxation
#[derive(Debug, Clone, PartialEq)]
pub struct ForceParams {
    /// Feste Anzahl an Iterationen
    pub iterations: usize,
    /// Abstoßungskonstante k (Kraft = k / d²)
    pub repulsion: f32,
    /// Anziehungsfaktor c (Kraft = d · c)
    pub attraction: f32,
    /// Dämpfung der summierten Kraft pro Iteration
    pub damping: f32,
    /// Mindestabstand zum Canvas-Rand
    pub margin: f32,
}

/// Konfiguration aller Layout-Algorithmen
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Zeichenfläche
    pub canvas: CanvasBounds,
    /// Radius des Kreis-Layouts
    pub circular_radius: f32,
    /// Ring-Radius des Stern-Layouts
    pub star_radius: f32,
    /// Node im Zentrum des Stern-Layouts
    pub star_hub_id: String,
    /// Ebenen-Tabelle (Ebene → Node-IDs)
    pub hierarchy_levels: Vec<Vec<String>>,
    /// Y-Koordinate der obersten Ebene
    pub hierarchy_top: f32,
    /// Vertikaler Abstand zwischen Ebenen
    pub hierarchy_level_spacing: f32,
    /// Force-Directed-Parameter
    pub force: ForceParams,
}

/// Ergebnis einer Layout-Berechnung
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOutcome {
    /// Tatsächlich angewendeter Modus (nach evtl. Fallback)
    pub mode: LayoutMode,
    /// Berechnete Positionen
    pub positions: NodePositions,
}

/// Berechnet die Positionen für `mode`.
///
/// `persisted` wird nur für `Custom` gelesen. Sind die gespeicherten Positionen
/// unvollständig oder fehlen, wird kreisförmig gelegt und der Modus im Ergebnis
/// auf `Circular` gesetzt.
pub fn compute_layout<R: Rng + ?Sized>(
    mode: LayoutMode,
    graph: &AgentGraph,
    config: &LayoutConfig,
    persisted: Option<&NodePositions>,
    rng: &mut R,
) -> LayoutOutcome {
    let canvas = config.canvas;
    let (mode, positions) = match mode {
        LayoutMode::Circular => (mode, circular_layout(graph, config)),
        LayoutMode::Hierarchical => (
            mode,
            hierarchical::layout(
                graph,
                &config.hierarchy_levels,
                canvas,
                config.hierarchy_top,
                config.hierarchy_level_spacing,
            ),
        ),
        LayoutMode::ForceDirected => (
            mode,
            force_directed::layout(graph, canvas, &config.force, rng),
        ),
        LayoutMode::Star => {
            match star::layout(graph, &config.star_hub_id, canvas, config.star_radius) {
                Some(positions) => (mode, positions),
                None => {
                    log::warn!(
                        "Stern-Hub '{}' nicht im Graph, verwende circular",
                        config.star_hub_id
                    );
                    (LayoutMode::Circular, circular_layout(graph, config))
                }
            }
        }
        LayoutMode::Custom => match persisted.filter(|p| covers_graph(p, graph)) {
            Some(saved) => (
                mode,
                graph
                    .node_ids()
                    .filter_map(|id| saved.get(id).map(|pos| (id.to_string(), *pos)))
                    .collect(),
            ),
            None => {
                log::info!("Keine vollständigen Custom-Positionen gespeichert, verwende circular");
                (LayoutMode::Circular, circular_layout(graph, config))
            }
        },
    };

    let positions = positions
        .into_iter()
        .map(|(id, pos)| (id, canvas.clamp(pos, 0.0)))
        .collect();

    log::debug!("Layout '{}' für {} Nodes berechnet", mode, graph.len());
    LayoutOutcome { mode, positions }
}

/// Prüft ob für jeden Node des Graphs eine Position vorliegt.
pub fn covers_graph(positions: &NodePositions, graph: &AgentGraph) -> bool {
    graph.node_ids().all(|id| positions.contains_key(id))
}

fn circular_layout(graph: &AgentGraph, config: &LayoutConfig) -> NodePositions {
    let ring = circular::ring_positions(
        graph.len(),
        config.canvas.center(),
        config.circular_radius,
    );
    graph.node_ids().map(String::from).zip(ring).collect()
}
