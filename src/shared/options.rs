//! Zentrale Konfiguration der Agenten-Netzwerk-Visualisierung.
//!
//! `VizOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{
    default_hierarchy_levels, CanvasBounds, ForceParams, LayoutConfig, HUB_AGENT_ID,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Canvas ──────────────────────────────────────────────────────────

/// Standard-Breite der Zeichenfläche in Pixeln.
pub const CANVAS_WIDTH: f32 = 800.0;
/// Standard-Höhe der Zeichenfläche in Pixeln.
pub const CANVAS_HEIGHT: f32 = 600.0;

// ── Layouts ─────────────────────────────────────────────────────────

/// Radius des Kreis-Layouts.
pub const CIRCULAR_RADIUS: f32 = 200.0;
/// Ring-Radius des Stern-Layouts.
pub const STAR_RADIUS: f32 = 200.0;
/// Y-Koordinate der obersten Hierarchie-Ebene.
pub const HIERARCHY_TOP: f32 = 100.0;
/// Vertikaler Abstand zwischen Hierarchie-Ebenen.
pub const HIERARCHY_LEVEL_SPACING: f32 = 150.0;
/// Iterationen der Force-Directed-Relaxation.
pub const FORCE_ITERATIONS: usize = 50;
/// Abstoßungskonstante k.
pub const FORCE_REPULSION: f32 = 5000.0;
/// Anziehungsfaktor c.
pub const FORCE_ATTRACTION: f32 = 0.01;
/// Dämpfung pro Iteration.
pub const FORCE_DAMPING: f32 = 0.1;
/// Randabstand beim Force-Layout.
pub const FORCE_MARGIN: f32 = 50.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Mindestabstand zum Rand beim Ziehen (Node-Glyph bleibt sichtbar).
pub const DRAG_MARGIN: f32 = 60.0;
/// Trefferradius um einen Node in Pixeln.
pub const NODE_HIT_RADIUS: f32 = 40.0;
/// Bewegung unterhalb dieser Schwelle (Pixel) gilt als Klick.
pub const CLICK_THRESHOLD_PX: f32 = 4.0;
/// Maximaler Abstand zweier Klicks für einen Doppelklick.
pub const DOUBLE_CLICK_MS: u64 = 300;

// ── Animation ───────────────────────────────────────────────────────

/// Intervall des groben Ticks (Status + neuer Datenfluss).
pub const COARSE_TICK_MS: u64 = 2000;
/// Intervall des feinen Ticks (Fortschritt der Datenflüsse).
pub const FINE_TICK_MS: u64 = 50;
/// Fortschritts-Inkrement pro feinem Tick.
pub const FLOW_PROGRESS_STEP: u8 = 10;

// ── Aktivitäts-Feed ─────────────────────────────────────────────────

/// Maximale Anzahl angezeigter Feed-Einträge.
pub const ACTIVITY_LIMIT: usize = 10;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `agent_network_viz.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Breite der Zeichenfläche
    pub canvas_width: f32,
    /// Höhe der Zeichenfläche
    pub canvas_height: f32,

    // ── Layouts ─────────────────────────────────────────────────
    /// Radius des Kreis-Layouts
    pub circular_radius: f32,
    /// Ring-Radius des Stern-Layouts
    pub star_radius: f32,
    /// Node-ID im Zentrum des Stern-Layouts
    pub star_hub_id: String,
    /// Ebenen-Tabelle für das hierarchische Layout
    pub hierarchy_levels: Vec<Vec<String>>,
    /// Y-Koordinate der obersten Ebene
    pub hierarchy_top: f32,
    /// Abstand zwischen Ebenen
    pub hierarchy_level_spacing: f32,
    /// Iterationen der Force-Relaxation
    pub force_iterations: usize,
    /// Abstoßungskonstante
    pub force_repulsion: f32,
    /// Anziehungsfaktor
    pub force_attraction: f32,
    /// Dämpfung
    pub force_damping: f32,
    /// Randabstand beim Force-Layout
    pub force_margin: f32,

    // ── Interaktion ─────────────────────────────────────────────
    /// Randabstand beim Ziehen
    pub drag_margin: f32,
    /// Trefferradius um Nodes
    pub node_hit_radius: f32,
    /// Klick-Schwelle in Pixeln
    pub click_threshold_px: f32,
    /// Doppelklick-Fenster in Millisekunden
    pub double_click_ms: u64,

    // ── Animation ───────────────────────────────────────────────
    /// Intervall des groben Ticks in Millisekunden
    pub coarse_tick_ms: u64,
    /// Intervall des feinen Ticks in Millisekunden
    pub fine_tick_ms: u64,
    /// Fortschritt pro feinem Tick (Prozentpunkte)
    pub flow_progress_step: u8,
    /// Fester Seed für reproduzierbare Simulation (sonst Entropie)
    pub rng_seed: Option<u64>,

    // ── Feed ────────────────────────────────────────────────────
    /// Maximale Anzahl angezeigter Feed-Einträge
    pub activity_limit: usize,
}

impl Default for VizOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            circular_radius: CIRCULAR_RADIUS,
            star_radius: STAR_RADIUS,
            star_hub_id: HUB_AGENT_ID.to_string(),
            hierarchy_levels: default_hierarchy_levels(),
            hierarchy_top: HIERARCHY_TOP,
            hierarchy_level_spacing: HIERARCHY_LEVEL_SPACING,
            force_iterations: FORCE_ITERATIONS,
            force_repulsion: FORCE_REPULSION,
            force_attraction: FORCE_ATTRACTION,
            force_damping: FORCE_DAMPING,
            force_margin: FORCE_MARGIN,

            drag_margin: DRAG_MARGIN,
            node_hit_radius: NODE_HIT_RADIUS,
            click_threshold_px: CLICK_THRESHOLD_PX,
            double_click_ms: DOUBLE_CLICK_MS,

            coarse_tick_ms: COARSE_TICK_MS,
            fine_tick_ms: FINE_TICK_MS,
            flow_progress_step: FLOW_PROGRESS_STEP,
            rng_seed: None,

            activity_limit: ACTIVITY_LIMIT,
        }
    }
}

impl VizOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        Self::binary_dir().join("agent_network_viz.toml")
    }

    /// Verzeichnis der laufenden Binary (Fallback: aktuelles Verzeichnis).
    pub fn binary_dir() -> std::path::PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(std::path::Path::to_path_buf))
            .unwrap_or_else(|| std::path::PathBuf::from("."))
    }

    /// Zeichenfläche aus Breite/Höhe.
    pub fn canvas(&self) -> CanvasBounds {
        CanvasBounds::new(self.canvas_width, self.canvas_height)
    }

    /// Übersetzt die Optionen in die Konfiguration der Layout-Engine.
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            canvas: self.canvas(),
            circular_radius: self.circular_radius,
            star_radius: self.star_radius,
            star_hub_id: self.star_hub_id.clone(),
            hierarchy_levels: self.hierarchy_levels.clone(),
            hierarchy_top: self.hierarchy_top,
            hierarchy_level_spacing: self.hierarchy_level_spacing,
            force: ForceParams {
                iterations: self.force_iterations,
                repulsion: self.force_repulsion,
                attraction: self.force_attraction,
                damping: self.force_damping,
                margin: self.force_margin,
            },
        }
    }

    /// Intervall des groben Ticks (mindestens 1 ms).
    pub fn coarse_interval(&self) -> Duration {
        Duration::from_millis(self.coarse_tick_ms.max(1))
    }

    /// Intervall des feinen Ticks (mindestens 1 ms).
    pub fn fine_interval(&self) -> Duration {
        Duration::from_millis(self.fine_tick_ms.max(1))
    }

    /// Doppelklick-Fenster.
    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let opts: VizOptions = toml::from_str("canvas_width = 1024.0\nrng_seed = 42\n")
            .expect("TOML sollte parsbar sein");
        assert_eq!(opts.canvas_width, 1024.0);
        assert_eq!(opts.rng_seed, Some(42));
        assert_eq!(opts.canvas_height, CANVAS_HEIGHT);
        assert_eq!(opts.hierarchy_levels, default_hierarchy_levels());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("viz.toml");
        let mut opts = VizOptions::default();
        opts.star_radius = 150.0;
        opts.save_to_file(&path).expect("Speichern sollte klappen");

        assert_eq!(VizOptions::load_from_file(&path), opts);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("viz.toml");
        std::fs::write(&path, "canvas_width = \"breit\"").expect("Schreiben");
        assert_eq!(VizOptions::load_from_file(&path), VizOptions::default());
    }
}
