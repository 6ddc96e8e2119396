use crate::core::{ActivityEntry, LayoutMode};
use std::time::Duration;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum VizCommand {
    /// Layout berechnen und anwenden
    ApplyLayout { mode: LayoutMode },
    /// Gespeicherte Custom-Positionen verwerfen
    ClearCustomPositions,
    /// Drag auf einem Node beginnen
    BeginDrag { node_id: String, pointer: glam::Vec2 },
    /// Gezogenen Node nachführen
    DragTo { pointer: glam::Vec2 },
    /// Drag beenden (`at = None`: Zeiger hat Fläche verlassen)
    ReleaseDrag { at: Option<Duration> },
    /// Selektion aufheben
    ClearSelection,
    /// Aktivitäts-Feed ersetzen
    SetActivityFeed { entries: Vec<ActivityEntry> },
    /// Status aller Agenten neu würfeln
    RandomizeStatuses,
    /// Neuen Datenfluss erzeugen
    SpawnFlow,
    /// Fortschritt aller Datenflüsse erhöhen
    AdvanceFlows,
}
