use crate::core::{ActivityEntry, LayoutMode};
use std::time::Duration;

/// App-Intent-Events der Visualisierung.
/// Intents sind Eingaben aus Host/Scheduler ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum VizIntent {
    /// Zeiger gedrückt (Canvas-Koordinaten, Zeitpunkt relativ zum Sitzungsstart)
    PointerDown { pos: glam::Vec2, at: Duration },
    /// Zeiger bewegt
    PointerMoved { pos: glam::Vec2 },
    /// Zeiger losgelassen
    PointerUp { pos: glam::Vec2, at: Duration },
    /// Zeiger hat die Zeichenfläche verlassen
    PointerLeft,
    /// Layout-Modus wechseln
    LayoutModeRequested { mode: LayoutMode },
    /// Layout-Modus per String wechseln (unbekannt → circular)
    LayoutModeNameRequested { name: String },
    /// Custom-Layout verwerfen und auf circular zurücksetzen
    ResetLayoutRequested,
    /// Neuer Stand des externen Aktivitäts-Feeds
    ActivityFeedUpdated { entries: Vec<ActivityEntry> },
    /// Grober Animations-Tick (Status + neuer Datenfluss)
    CoarseTickElapsed,
    /// Feiner Animations-Tick (Fortschritt der Datenflüsse)
    FineTickElapsed,
}
