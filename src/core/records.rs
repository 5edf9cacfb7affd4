//! Record Store: Node- und Link-Datensätze des geladenen Dokuments.

use super::ParseError;
use glam::DVec3;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Gruppe für Datensätze ohne Sektion.
pub const DEFAULT_SECTION: &str = "Default";

/// Eindeutiger Netzwerk-Knoten (Schlüssel: Referenz-String)
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    /// Referenz aus der Quelldatei
    pub reference: String,
    /// Position beim ersten Auftreten
    pub position: DVec3,
}

/// Eine Verbindung (eine Zeile bzw. ein `Network`-Element)
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRecord {
    /// 0-basierter Index in Einfügereihenfolge
    pub index: usize,
    /// Anzeigename
    pub name: String,
    /// Referenz des Startpunkts
    pub origin_ref: String,
    /// Koordinaten des Startpunkts
    pub origin_pos: DVec3,
    /// Referenz des Endpunkts
    pub end_ref: String,
    /// Koordinaten des Endpunkts
    pub end_pos: DVec3,
    /// Länge laut Quelle
    pub length: f64,
    /// Dichte laut Quelle
    pub density: f64,
    /// Sicherheitsklasse
    pub safety: String,
    /// Route
    pub route: String,
    /// Action Number
    pub action_number: String,
    /// Sektion (Gruppierung im Tree)
    pub section: String,
}

impl LinkRecord {
    /// Erstellt einen Link mit leeren Zusatzattributen und Sektion `Default`.
    pub fn new(
        name: impl Into<String>,
        origin_ref: impl Into<String>,
        origin_pos: DVec3,
        end_ref: impl Into<String>,
        end_pos: DVec3,
    ) -> Self {
        Self {
            index: 0,
            name: name.into(),
            origin_ref: origin_ref.into(),
            origin_pos,
            end_ref: end_ref.into(),
            end_pos,
            length: 0.0,
            density: 0.0,
            safety: String::new(),
            route: String::new(),
            action_number: String::new(),
            section: DEFAULT_SECTION.to_string(),
        }
    }

    /// Geometrische Länge zwischen Start- und Endpunkt.
    pub fn span(&self) -> f64 {
        self.origin_pos.distance(self.end_pos)
    }
}

/// Zusammenfassung eines Ladevorgangs
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Anzahl eindeutiger Nodes
    pub nodes: usize,
    /// Anzahl Links
    pub links: usize,
    /// Anzahl registrierter Primitive/Sub-Shapes
    pub shapes: usize,
    /// Links ohne Primitiv (Länge ~0 oder Kernel-Fehler)
    pub skipped_links: usize,
    /// Ersetzte Werte
    pub parse_errors: Vec<ParseError>,
}

/// In-Memory-Ablage aller Node- und Link-Datensätze.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    nodes: IndexMap<String, NodeRecord>,
    links: Vec<LinkRecord>,
    node_links: HashMap<String, Vec<usize>>,
}

impl RecordStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Link hinzu und legt unbekannte Endpunkte als Nodes an.
    ///
    /// Der Index des Links wird neu vergeben und zurückgegeben.
    pub fn push_link(&mut self, mut link: LinkRecord) -> usize {
        let index = self.links.len();
        link.index = index;

        self.ensure_node(&link.origin_ref, link.origin_pos);
        self.ensure_node(&link.end_ref, link.end_pos);
        self.node_links
            .entry(link.origin_ref.clone())
            .or_default()
            .push(index);
        self.node_links
            .entry(link.end_ref.clone())
            .or_default()
            .push(index);

        self.links.push(link);
        index
    }

    fn ensure_node(&mut self, reference: &str, position: DVec3) {
        if !self.nodes.contains_key(reference) {
            self.nodes.insert(
                reference.to_string(),
                NodeRecord {
                    reference: reference.to_string(),
                    position,
                },
            );
        }
    }

    /// Alle Nodes in Reihenfolge des ersten Auftretens.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeRecord> {
        self.nodes.values()
    }

    /// Node über seinen Index (= `Identifier::Node`).
    pub fn node(&self, index: usize) -> Option<&NodeRecord> {
        self.nodes.get_index(index).map(|(_, node)| node)
    }

    /// Index eines Nodes über seine Referenz.
    pub fn node_index(&self, reference: &str) -> Option<usize> {
        self.nodes.get_index_of(reference)
    }

    /// Alle Links in Dateireihenfolge.
    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    /// Link über seinen Index.
    pub fn link(&self, index: usize) -> Option<&LinkRecord> {
        self.links.get(index)
    }

    /// Indizes aller Links, die den Node berühren (Dateireihenfolge).
    pub fn node_links(&self, reference: &str) -> &[usize] {
        self.node_links
            .get(reference)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Anzahl eindeutiger Nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl Links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Gibt `true` zurück, wenn keine Datensätze vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.nodes.is_empty()
    }

    /// Entfernt alle Datensätze.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.links.clear();
        self.node_links.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(name: &str, from: &str, to: &str) -> LinkRecord {
        LinkRecord::new(name, from, DVec3::ZERO, to, DVec3::X)
    }

    #[test]
    fn test_nodes_are_unique_by_reference_in_first_seen_order() {
        let mut store = RecordStore::new();
        store.push_link(link("L0", "A", "B"));
        store.push_link(link("L1", "C", "D"));
        store.push_link(link("L2", "A", "E"));

        assert_eq!(store.link_count(), 3);
        assert_eq!(store.node_count(), 5);
        let refs: Vec<&str> = store.nodes().map(|n| n.reference.as_str()).collect();
        assert_eq!(refs, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(store.node_index("E"), Some(4));
        assert_eq!(store.node_links("A"), &[0, 2]);
        assert!(store.node_links("missing").is_empty());
    }

    #[test]
    fn test_first_position_wins() {
        let mut store = RecordStore::new();
        store.push_link(LinkRecord::new("L0", "A", DVec3::ONE, "B", DVec3::ZERO));
        store.push_link(LinkRecord::new("L1", "A", DVec3::X, "B", DVec3::Y));
        assert_eq!(store.node(0).map(|n| n.position), Some(DVec3::ONE));
    }

    #[test]
    fn test_self_loop_is_listed_twice() {
        let mut store = RecordStore::new();
        store.push_link(link("Loop", "A", "A"));
        assert_eq!(store.node_count(), 1);
        assert_eq!(store.node_links("A"), &[0, 0]);
    }

    #[test]
    fn test_push_assigns_indices_and_clear_empties() {
        let mut store = RecordStore::new();
        let mut record = link("L", "A", "B");
        record.index = 99;
        assert_eq!(store.push_link(record), 0);
        assert_eq!(store.link(0).map(|l| l.index), Some(0));

        store.clear();
        assert!(store.is_empty());
        assert!(store.node_links("A").is_empty());
    }
}
