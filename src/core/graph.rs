//! Der unveränderliche Agenten-Graph (Katalog + Adjazenz).

use super::AgentNode;
use indexmap::IndexMap;

/// Eine aufgelöste, gerichtete Kante (beide Endpunkte existieren im Graph)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    /// Quell-Node-ID
    pub from: &'a str,
    /// Ziel-Node-ID
    pub to: &'a str,
}

/// Statischer Katalog aller Agenten, indexiert nach ID in Katalog-Reihenfolge
#[derive(Debug, Clone, Default)]
pub struct AgentGraph {
    nodes: IndexMap<String, AgentNode>,
}

impl AgentGraph {
    /// Baut den Graph aus einer Node-Liste. Doppelte IDs: die erste Definition gewinnt.
    pub fn from_nodes(nodes: impl IntoIterator<Item = AgentNode>) -> Self {
        let mut map = IndexMap::new();
        for node in nodes {
            if map.contains_key(&node.id) {
                log::warn!("Doppelte Agent-ID '{}' im Katalog ignoriert", node.id);
                continue;
            }
            map.insert(node.id.clone(), node);
        }
        Self { nodes: map }
    }

    /// Alle Nodes in Katalog-Reihenfolge.
    pub fn list_nodes(&self) -> impl Iterator<Item = &AgentNode> {
        self.nodes.values()
    }

    /// Alle Node-IDs in Katalog-Reihenfolge.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Deklarierte Nachbarn eines Nodes (unbekannte ID → leer).
    ///
    /// Enthält auch Verweise auf IDs, die nicht im Katalog stehen.
    pub fn neighbors_of(&self, id: &str) -> &[String] {
        self.nodes
            .get(id)
            .map(|node| node.connections.as_slice())
            .unwrap_or(&[])
    }

    /// Nachbarn eines Nodes, die tatsächlich im Katalog existieren.
    pub fn resolved_neighbors_of<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.neighbors_of(id)
            .iter()
            .map(String::as_str)
            .filter(move |target| self.nodes.contains_key(*target))
    }

    /// Findet einen Node per ID.
    pub fn node(&self, id: &str) -> Option<&AgentNode> {
        self.nodes.get(id)
    }

    /// Prüft ob ein Node existiert.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Alle aufgelösten Kanten. Verweise auf unbekannte IDs werden übersprungen.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.nodes.values().flat_map(move |node| {
            self.resolved_neighbors_of(&node.id).map(move |to| Edge {
                from: node.id.as_str(),
                to,
            })
        })
    }

    /// Anzahl der Nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt `true` zurück, wenn der Graph keine Nodes enthält.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Katalog-Index eines Nodes.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_graph() -> AgentGraph {
        AgentGraph::from_nodes([
            AgentNode::new("A", "Agent A", [1.0; 4]).with_connections(["B", "C"]),
            AgentNode::new("B", "Agent B", [1.0; 4]).with_connections(["A", "Z"]),
            AgentNode::new("C", "Agent C", [1.0; 4]),
        ])
    }

    #[test]
    fn neighbors_of_returns_declared_order() {
        let graph = abc_graph();
        assert_eq!(graph.neighbors_of("A"), ["B".to_string(), "C".to_string()]);
        assert!(graph.neighbors_of("C").is_empty());
        assert!(graph.neighbors_of("unbekannt").is_empty());
    }

    #[test]
    fn edges_skip_dangling_references() {
        let graph = abc_graph();
        let edges: Vec<_> = graph.edges().map(|e| (e.from, e.to)).collect();
        assert_eq!(edges, vec![("A", "B"), ("A", "C"), ("B", "A")]);
        // Deklariert bleibt der Verweis trotzdem sichtbar
        assert_eq!(graph.neighbors_of("B").len(), 2);
    }

    #[test]
    fn duplicate_ids_keep_first_definition() {
        let graph = AgentGraph::from_nodes([
            AgentNode::new("A", "Erster", [1.0; 4]),
            AgentNode::new("A", "Zweiter", [1.0; 4]),
        ]);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.node("A").map(|n| n.name.as_str()), Some("Erster"));
    }
}
