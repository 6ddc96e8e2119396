//! Laden/Speichern von Layout-Modus und Custom-Positionen.
//!
//! Fehlerhafte Daten werden als "nicht vorhanden" behandelt, damit der Aufrufer
//! auf das Kreis-Layout zurückfallen kann.

use super::KeyValueStore;
use crate::core::{LayoutMode, NodePositions};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key für den Layout-Modus
pub const LAYOUT_MODE_KEY: &str = "layoutMode";
/// Key für die Custom-Positionen
pub const LAYOUT_POSITIONS_KEY: &str = "layoutPositions";

/// Serialisierte Form einer Position: `{"x": …, "y": …}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct StoredPosition {
    x: f32,
    y: f32,
}

/// Layout-Persistenz über einem austauschbaren Key-Value-Speicher
pub struct LayoutPersistence {
    store: Box<dyn KeyValueStore>,
}

impl LayoutPersistence {
    /// Erstellt die Persistenz über `store`.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Lädt den gespeicherten Modus. Fehlend oder unbekannt → `None`.
    pub fn load_mode(&self) -> Option<LayoutMode> {
        let raw = self.store.get(LAYOUT_MODE_KEY)?;
        let mode = LayoutMode::parse(&raw);
        if mode.is_none() {
            log::warn!("Gespeicherter Layout-Modus '{}' unbekannt, ignoriert", raw.trim());
        }
        mode
    }

    /// Speichert den Modus.
    pub fn save_mode(&mut self, mode: LayoutMode) -> anyhow::Result<()> {
        self.store.set(LAYOUT_MODE_KEY, mode.as_str())
    }

    /// Lädt die Custom-Positionen. Fehlend oder fehlerhaft → `None`.
    pub fn load_positions(&self) -> Option<NodePositions> {
        let raw = self.store.get(LAYOUT_POSITIONS_KEY)?;
        match serde_json::from_str::<BTreeMap<String, StoredPosition>>(&raw) {
            Ok(stored) => Some(
                stored
                    .into_iter()
                    .map(|(id, pos)| (id, Vec2::new(pos.x, pos.y)))
                    .collect(),
            ),
            Err(e) => {
                log::warn!("Gespeicherte Layout-Positionen fehlerhaft, ignoriert: {}", e);
                None
            }
        }
    }

    /// Speichert die Positionen als JSON-Objekt (Node-ID → `{x, y}`).
    pub fn save_positions(&mut self, positions: &NodePositions) -> anyhow::Result<()> {
        let stored: BTreeMap<&str, StoredPosition> = positions
            .iter()
            .map(|(id, pos)| (id.as_str(), StoredPosition { x: pos.x, y: pos.y }))
            .collect();
        let json = serde_json::to_string(&stored)?;
        self.store.set(LAYOUT_POSITIONS_KEY, &json)
    }

    /// Verwirft die gespeicherten Custom-Positionen.
    pub fn clear_positions(&mut self) -> anyhow::Result<()> {
        self.store.remove(LAYOUT_POSITIONS_KEY)
    }
}

impl std::fmt::Debug for LayoutPersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutPersistence").finish_non_exhaustive()
    }
}
