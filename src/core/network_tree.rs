//! Tree-Aufbau für Netzwerk-Dokumente (Tabelle und XML).

use super::{Identifier, LazyGroups, LinkRecord, RecordStore, TreeIndex, TreeNodeId};

/// Root-Label für Tabellen-Dokumente.
pub const ROOT_LABEL: &str = "NETWORK AIRPLANE";
/// Gruppe aller Node-Leaves.
pub const NODES_GROUP_LABEL: &str = "Network Nodes";

/// Baut den Tree eines Tabellen-Dokuments.
///
/// Root → `Network Nodes` + eine Gruppe je Sektion; Link-Leaves vor
/// Node-Leaves, damit die Root-Bezeichner der Dateireihenfolge folgen.
pub fn build_sheet_tree(tree: &mut TreeIndex, records: &RecordStore) -> TreeNodeId {
    let root = tree.add_root(ROOT_LABEL);
    let nodes_group = tree.add_child(root, NODES_GROUP_LABEL);
    let mut sections = LazyGroups::new(root, |section| format!("Network Geometry {section}"));

    for link in records.links() {
        let group = sections.get_or_create(tree, &link.section);
        let leaf = tree.add_leaf(group, link.name.as_str(), Identifier::Link(link.index));
        add_link_details(tree, leaf, link);
    }
    add_node_leaves(tree, nodes_group, records);
    root
}

/// Detail-Kinder eines Link-Leafs (reine Info-Nodes).
pub fn add_link_details(tree: &mut TreeIndex, leaf: TreeNodeId, link: &LinkRecord) {
    let origin = tree.add_child(leaf, "Origin");
    tree.add_child(origin, format!("refOrigine= {}", link.origin_ref));
    tree.add_child(origin, format!("Xorigine= {}", link.origin_pos.x));
    tree.add_child(origin, format!("Yorigine= {}", link.origin_pos.y));
    tree.add_child(origin, format!("Zorigine= {}", link.origin_pos.z));

    let extremite = tree.add_child(leaf, "Extremite");
    tree.add_child(extremite, format!("RefExtremite= {}", link.end_ref));
    tree.add_child(extremite, format!("Xextremite= {}", link.end_pos.x));
    tree.add_child(extremite, format!("Yextremite= {}", link.end_pos.y));
    tree.add_child(extremite, format!("Zextremite= {}", link.end_pos.z));

    let other = tree.add_child(leaf, "Other Info");
    tree.add_child(other, format!("Length= {}", link.length));
    tree.add_child(other, format!("Density= {}", link.density));
    tree.add_child(other, format!("Safety= {}", link.safety));
    tree.add_child(other, format!("Route= {}", link.route));
    tree.add_child(other, format!("Action Number= {}", link.action_number));
    tree.add_child(other, format!("Section= {}", link.section));
}

/// Ein Leaf `Node: {ref}` je Node, mit Koordinaten als Info-Kindern.
pub fn add_node_leaves(tree: &mut TreeIndex, group: TreeNodeId, records: &RecordStore) {
    for (index, node) in records.nodes().enumerate() {
        let leaf = tree.add_leaf(
            group,
            format!("Node: {}", node.reference),
            Identifier::Node(index),
        );
        tree.add_child(leaf, format!("X= {}", node.position.x));
        tree.add_child(leaf, format!("Y= {}", node.position.y));
        tree.add_child(leaf, format!("Z= {}", node.position.z));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_sheet_tree_has_one_leaf_per_record() {
        let mut records = RecordStore::new();
        let mut a = LinkRecord::new("L0", "A", DVec3::ZERO, "B", DVec3::X);
        a.section = "Cabin".into();
        records.push_link(a);
        records.push_link(LinkRecord::new("L1", "B", DVec3::X, "C", DVec3::Y));

        let mut tree = TreeIndex::new();
        let root = build_sheet_tree(&mut tree, &records);

        assert_eq!(tree.leaf_count(), records.link_count() + records.node_count());
        let root_node = tree.node(root).expect("Root existiert");
        assert_eq!(root_node.label, ROOT_LABEL);
        assert_eq!(
            root_node.ids[..2],
            [Identifier::Link(0), Identifier::Link(1)]
        );
        let labels: Vec<&str> = root_node
            .children
            .iter()
            .filter_map(|&c| tree.node(c))
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                NODES_GROUP_LABEL,
                "Network Geometry Cabin",
                "Network Geometry Default"
            ]
        );

        let node_leaf = tree.leaf_for(&Identifier::Node(2)).expect("Node C hat ein Leaf");
        assert_eq!(tree.node(node_leaf).map(|n| n.label.as_str()), Some("Node: C"));
    }
}
