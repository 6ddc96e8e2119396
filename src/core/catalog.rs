//! Fest einkompilierter Agenten-Katalog der Gesundheits-App.

use super::{AgentGraph, AgentNode, NodeStatus};

/// ID des Koordinations-Agenten (Zentrum im Stern-Layout).
pub const HUB_AGENT_ID: &str = "coordinator";

// Kategorie-Farben (RGBA)
const COLOR_COORDINATION: [f32; 4] = [0.55, 0.36, 0.96, 1.0];
const COLOR_CLINICAL: [f32; 4] = [0.23, 0.51, 0.96, 1.0];
const COLOR_CARE: [f32; 4] = [0.06, 0.73, 0.51, 1.0];
const COLOR_DATA: [f32; 4] = [0.96, 0.62, 0.04, 1.0];

/// Baut den Standard-Katalog.
pub fn default_catalog() -> AgentGraph {
    AgentGraph::from_nodes([
        AgentNode::new(HUB_AGENT_ID, "Care Coordinator", COLOR_COORDINATION)
            .with_route("/agents/coordinator")
            .with_connections([
                "symptom",
                "diagnosis",
                "treatment",
                "appointment",
                "records",
                "wellness",
            ]),
        AgentNode::new("symptom", "Symptom Analyzer", COLOR_CLINICAL)
            .with_route("/symptom-checker")
            .with_connections(["diagnosis", HUB_AGENT_ID]),
        AgentNode::new("diagnosis", "Diagnosis Assistant", COLOR_CLINICAL)
            .with_route("/diagnosis")
            .with_connections(["treatment", "records"])
            .with_status(NodeStatus::Processing),
        AgentNode::new("treatment", "Treatment Planner", COLOR_CARE)
            .with_connections(["medicine", "appointment"]),
        AgentNode::new("medicine", "Medicine Tracker", COLOR_CARE)
            .with_route("/medicines")
            .with_connections(["records"])
            .with_status(NodeStatus::Idle),
        AgentNode::new("appointment", "Appointment Scheduler", COLOR_CARE)
            .with_route("/appointments")
            .with_connections([HUB_AGENT_ID]),
        AgentNode::new("records", "Health Records", COLOR_DATA)
            .with_route("/health-records")
            .with_connections([HUB_AGENT_ID]),
        AgentNode::new("wellness", "Wellness Coach", COLOR_DATA)
            .with_connections(["records", "symptom"])
            .with_status(NodeStatus::Idle),
    ])
}

/// Ebenen-Tabelle für das hierarchische Layout (oben → unten).
pub fn default_hierarchy_levels() -> Vec<Vec<String>> {
    [
        vec![HUB_AGENT_ID],
        vec!["symptom", "diagnosis", "wellness"],
        vec!["treatment", "appointment", "records"],
        vec!["medicine"],
    ]
    .into_iter()
    .map(|level| level.into_iter().map(String::from).collect())
    .collect()
}
