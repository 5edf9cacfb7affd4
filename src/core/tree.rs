//! Tree Index: hierarchische Sicht auf das Dokument.
//!
//! Jeder Tree-Node trägt die Bezeichner, die er repräsentiert: Leaves genau
//! einen, Gruppen die aller Nachfahren (für Gruppen-Highlight). Reine
//! Info-Nodes tragen keine Bezeichner.

use super::Identifier;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Index eines Nodes im Tree-Arena-Vektor
pub type TreeNodeId = usize;

/// Gruppe für Datensätze ohne Kategorie.
pub const DEFAULT_GROUP: &str = "Default";

/// Ein Eintrag im Tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// Anzeigetext
    pub label: String,
    /// Repräsentierte Bezeichner (Leaf: genau einer, Gruppe: alle Nachfahren)
    pub ids: Vec<Identifier>,
    /// Kinder in Einfügereihenfolge
    pub children: Vec<TreeNodeId>,
    /// Eltern-Node (`None` für Roots)
    pub parent: Option<TreeNodeId>,
}

/// Arena-basierter Tree mit O(1)-Zugriff auf das Leaf eines Bezeichners.
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    nodes: Vec<TreeNode>,
    roots: Vec<TreeNodeId>,
    leaves: HashMap<Identifier, TreeNodeId>,
}

impl TreeIndex {
    /// Erstellt einen leeren Tree.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, parent: Option<TreeNodeId>, label: String) -> TreeNodeId {
        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            label,
            ids: Vec::new(),
            children: Vec::new(),
            parent,
        });
        match parent.and_then(|p| self.nodes.get_mut(p)) {
            Some(parent_node) => parent_node.children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Fügt einen Root-Node hinzu.
    pub fn add_root(&mut self, label: impl Into<String>) -> TreeNodeId {
        self.push(None, label.into())
    }

    /// Fügt einen Gruppen- oder Info-Node ohne eigenen Bezeichner hinzu.
    pub fn add_child(&mut self, parent: TreeNodeId, label: impl Into<String>) -> TreeNodeId {
        self.push(Some(parent), label.into())
    }

    /// Fügt ein Leaf für `id` hinzu und propagiert den Bezeichner an alle Vorfahren.
    pub fn add_leaf(
        &mut self,
        parent: TreeNodeId,
        label: impl Into<String>,
        id: Identifier,
    ) -> TreeNodeId {
        let leaf = self.push(Some(parent), label.into());
        self.attach(leaf, id);
        leaf
    }

    /// Hängt `id` an einen bestehenden Node und all seine Vorfahren.
    ///
    /// Der Node wird zum Leaf für `id` (für `leaf_for`).
    pub fn attach(&mut self, node: TreeNodeId, id: Identifier) {
        let mut current = Some(node);
        while let Some(index) = current {
            let Some(entry) = self.nodes.get_mut(index) else {
                break;
            };
            entry.ids.push(id.clone());
            current = entry.parent;
        }
        self.leaves.insert(id, node);
    }

    /// Node über seinen Index.
    pub fn node(&self, id: TreeNodeId) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Root-Nodes in Einfügereihenfolge.
    pub fn roots(&self) -> &[TreeNodeId] {
        &self.roots
    }

    /// Leaf, das `id` trägt.
    pub fn leaf_for(&self, id: &Identifier) -> Option<TreeNodeId> {
        self.leaves.get(id).copied()
    }

    /// Vorfahren von `node`, vom direkten Elternteil bis zum Root.
    pub fn ancestors(&self, node: TreeNodeId) -> Vec<TreeNodeId> {
        let mut result = Vec::new();
        let mut current = self.nodes.get(node).and_then(|n| n.parent);
        while let Some(index) = current {
            result.push(index);
            current = self.nodes.get(index).and_then(|n| n.parent);
        }
        result
    }

    /// Anzahl aller Nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt `true` zurück, wenn der Tree leer ist.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Anzahl Bezeichner mit Leaf.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Entfernt alle Nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.leaves.clear();
    }
}

/// Lazily angelegte Gruppen unter einem gemeinsamen Eltern-Node.
///
/// Gruppen entstehen beim ersten Auftreten eines Kategorie-Werts; leere
/// Werte landen in [`DEFAULT_GROUP`].
#[derive(Debug)]
pub struct LazyGroups<F> {
    parent: TreeNodeId,
    groups: IndexMap<String, TreeNodeId>,
    label: F,
}

impl<F: Fn(&str) -> String> LazyGroups<F> {
    /// Gruppen unter `parent`; `label` erzeugt den Anzeigetext aus dem Kategorie-Wert.
    pub fn new(parent: TreeNodeId, label: F) -> Self {
        Self {
            parent,
            groups: IndexMap::new(),
            label,
        }
    }

    /// Gruppe für `key` (wird bei Bedarf angelegt).
    pub fn get_or_create(&mut self, tree: &mut TreeIndex, key: &str) -> TreeNodeId {
        let key = match key.trim() {
            "" => DEFAULT_GROUP,
            trimmed => trimmed,
        };
        if let Some(&group) = self.groups.get(key) {
            return group;
        }
        let group = tree.add_child(self.parent, (self.label)(key));
        self.groups.insert(key.to_string(), group);
        group
    }

    /// Anzahl angelegter Gruppen.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Gibt `true` zurück, wenn noch keine Gruppe angelegt wurde.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_ids_propagate_to_all_ancestors() {
        let mut tree = TreeIndex::new();
        let root = tree.add_root("NETWORK AIRPLANE");
        let group = tree.add_child(root, "Network Geometry A");
        let leaf = tree.add_leaf(group, "Link 0", Identifier::Link(0));
        tree.add_leaf(group, "Link 1", Identifier::Link(1));

        assert_eq!(tree.node(leaf).map(|n| n.ids.len()), Some(1));
        assert_eq!(tree.node(group).map(|n| n.ids.len()), Some(2));
        assert_eq!(tree.node(root).map(|n| n.ids.len()), Some(2));
        assert_eq!(tree.leaf_for(&Identifier::Link(0)), Some(leaf));
        assert_eq!(tree.ancestors(leaf), vec![group, root]);
        assert!(tree.ancestors(root).is_empty());
    }

    #[test]
    fn test_info_nodes_carry_no_ids() {
        let mut tree = TreeIndex::new();
        let root = tree.add_root("Net");
        let devices = tree.add_child(root, "Equloc");
        let device = tree.add_child(devices, "Device 1");

        assert!(tree.node(device).is_some_and(|n| n.ids.is_empty()));
        assert_eq!(tree.leaf_count(), 0);
    }

    #[test]
    fn test_lazy_groups_reuse_and_default() {
        let mut tree = TreeIndex::new();
        let root = tree.add_root("root");
        let mut groups = LazyGroups::new(root, |key| format!("Network Geometry {key}"));

        let a = groups.get_or_create(&mut tree, "A");
        let a_again = groups.get_or_create(&mut tree, " A ");
        let default = groups.get_or_create(&mut tree, "   ");

        assert_eq!(a, a_again);
        assert_ne!(a, default);
        assert_eq!(groups.len(), 2);
        assert_eq!(
            tree.node(default).map(|n| n.label.as_str()),
            Some("Network Geometry Default")
        );
        assert_eq!(tree.node(root).map(|n| n.children.len()), Some(2));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut tree = TreeIndex::new();
        let root = tree.add_root("root");
        tree.add_leaf(root, "Node: A", Identifier::Node(0));
        tree.clear();

        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());
        assert_eq!(tree.leaf_for(&Identifier::Node(0)), None);
    }
}
