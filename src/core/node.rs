//! Repräsentiert einen Agenten-Knoten im Netzwerk.

use serde::{Deserialize, Serialize};

/// Laufzeit-Status eines Agenten (rein kosmetisch, wird simuliert)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    /// Agent arbeitet aktiv
    #[default]
    Active,
    /// Agent wartet
    Idle,
    /// Agent verarbeitet gerade eine Anfrage
    Processing,
}

impl NodeStatus {
    /// Alle Status-Werte in fester Reihenfolge (Basis für die Zufallsauswahl).
    pub const ALL: [NodeStatus; 3] = [
        NodeStatus::Active,
        NodeStatus::Idle,
        NodeStatus::Processing,
    ];

    /// String-Form für Anzeige und Logging.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeStatus::Active => "active",
            NodeStatus::Idle => "idle",
            NodeStatus::Processing => "processing",
        }
    }
}

/// Ein Agent im statischen Katalog
#[derive(Debug, Clone, PartialEq)]
pub struct AgentNode {
    /// Eindeutige ID
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Kategorie-Farbe (RGBA)
    pub color: [f32; 4],
    /// Optionales Navigationsziel (Route der Host-App)
    pub route: Option<String>,
    /// Ausgehende Verbindungen in Definitions-Reihenfolge (gerichtet)
    pub connections: Vec<String>,
    /// Status beim Start der Sitzung
    pub status: NodeStatus,
}

impl AgentNode {
    /// Erstellt einen neuen Agenten ohne Verbindungen und ohne Route.
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: [f32; 4]) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
            route: None,
            connections: Vec::new(),
            status: NodeStatus::Active,
        }
    }

    /// Setzt die Verbindungsliste (Builder-Stil).
    pub fn with_connections<I, S>(mut self, connections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connections = connections.into_iter().map(Into::into).collect();
        self
    }

    /// Setzt das Navigationsziel (Builder-Stil).
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Setzt den Start-Status (Builder-Stil).
    pub fn with_status(mut self, status: NodeStatus) -> Self {
        self.status = status;
        self
    }
}
