//! Einträge des externen Aktivitäts-Feeds (nur Anzeige).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ein Eintrag im Aktivitäts-Log eines Agenten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Anzeigename des Agenten
    pub agent_name: String,
    /// Ausgeführte Aktion
    pub action: String,
    /// Konfidenz der Antwort (0.0–1.0), falls vom Backend geliefert
    #[serde(default)]
    pub confidence_score: Option<f32>,
    /// Zeitpunkt der Aktion
    pub timestamp: DateTime<Utc>,
}

/// Sortiert absteigend nach Zeitstempel und kürzt auf `limit` Einträge.
pub fn recent_first(mut entries: Vec<ActivityEntry>, limit: usize) -> Vec<ActivityEntry> {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries.truncate(limit);
    entries
}
