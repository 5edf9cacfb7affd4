//! Info-Texte für selektierte Shapes.

use super::{Document, Identifier, LinkRecord};
use glam::DVec3;
use std::fmt::Write as _;

/// Standard-Statustext ohne Selektion.
pub const DEFAULT_STATUS: &str = "Click a 3D shape to display details";

/// Maximale Anzahl aufgelisteter Links im Node-Info.
pub const MAX_LISTED_LINKS: usize = 10;

/// Text für Info-Panel und Statusleiste
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoText {
    /// Mehrzeiliger Inhalt des Info-Panels
    pub body: String,
    /// Einzeiliger Statustext
    pub status: String,
}

fn coords(p: DVec3) -> String {
    format!("X={}, Y={}, Z={}", p.x, p.y, p.z)
}

/// Info zu einer Selektion (erster Bezeichner bestimmt den Inhalt).
///
/// Gibt `None` zurück, wenn der Bezeichner im Dokument nicht existiert.
pub fn describe(doc: &Document, ids: &[Identifier]) -> Option<InfoText> {
    match ids.first()? {
        Identifier::Node(index) => node_info(doc, *index),
        Identifier::Link(index) => doc.records.link(*index).map(link_info),
        Identifier::Imported(id) => imported_info(doc, id, ids.len() - 1),
    }
}

/// Zusammenfassung eines Nodes mit seinen verbundenen Links.
pub fn node_info(doc: &Document, index: usize) -> Option<InfoText> {
    let node = doc.records.node(index)?;
    let links = doc.records.node_links(&node.reference);

    let mut body = format!(
        "Node Ref: {}\n(Internal ID: node_{})\nCoordinates: {}\nConnected links: {}",
        node.reference,
        index,
        coords(node.position),
        links.len()
    );
    for &link_index in links.iter().take(MAX_LISTED_LINKS) {
        if let Some(link) = doc.records.link(link_index) {
            let _ = write!(body, "\n- {} (ID: {})", link.name, link_index);
        }
    }
    if links.len() > MAX_LISTED_LINKS {
        let _ = write!(body, "\n... and {} more links", links.len() - MAX_LISTED_LINKS);
    }

    Some(InfoText {
        body,
        status: format!("Selected node: {}", node.reference),
    })
}

/// Zusammenfassung eines Links mit beiden Endpunkten.
pub fn link_info(link: &LinkRecord) -> InfoText {
    let body = format!(
        "Link: {}\n(Internal ID: {})\n\n\
         Origin Ref: {}\nOrigin Coordinates: {}\n\n\
         Extremite Ref: {}\nExtremite Coordinates: {}\n\n\
         Length: {}\nDensity: {}\nSafety: {}\nRoute: {}\nAction Number: {}\nSection: {}",
        link.name,
        link.index,
        link.origin_ref,
        coords(link.origin_pos),
        link.end_ref,
        coords(link.end_pos),
        link.length,
        link.density,
        link.safety,
        link.route,
        link.action_number,
        link.section,
    );
    InfoText {
        body,
        status: format!("Selected link: {}", link.name),
    }
}

/// Info zu einem importierten Sub-Shape; `more` zählt weitere selektierte Shapes.
pub fn imported_info(doc: &Document, id: &str, more: usize) -> Option<InfoText> {
    let kind = doc.imported.get(id)?;
    let mut body = format!("Selected shape ID: {}\nType: {}", id, kind.label());
    if more > 0 {
        let _ = write!(body, "\n(and {more} more shapes)");
    }
    Some(InfoText {
        body,
        status: format!("Selected imported shape: {id}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::TopoKind;

    fn doc_with_star(links: usize) -> Document {
        let mut doc = Document::default();
        for i in 0..links {
            doc.records.push_link(LinkRecord::new(
                format!("L{i}"),
                "HUB",
                DVec3::new(1.5, -2.0, 0.25),
                format!("N{i}"),
                DVec3::new(i as f64, 0.0, 0.0),
            ));
        }
        doc
    }

    #[test]
    fn test_node_info_lists_at_most_ten_links() {
        let doc = doc_with_star(12);
        let info = node_info(&doc, 0).expect("HUB sollte existieren");

        assert!(info.body.starts_with("Node Ref: HUB\n(Internal ID: node_0)"));
        assert!(info.body.contains("Coordinates: X=1.5, Y=-2, Z=0.25"));
        assert!(info.body.contains("Connected links: 12"));
        assert!(info.body.contains("- L9 (ID: 9)"));
        assert!(!info.body.contains("- L10 (ID: 10)"));
        assert!(info.body.ends_with("... and 2 more links"));
        assert_eq!(info.status, "Selected node: HUB");
    }

    #[test]
    fn test_link_info_prints_endpoints_verbatim() {
        let doc = doc_with_star(3);
        let info = describe(&doc, &[Identifier::Link(2)]).expect("Link 2 sollte existieren");

        assert!(info.body.contains("Origin Ref: HUB"));
        assert!(info.body.contains("Origin Coordinates: X=1.5, Y=-2, Z=0.25"));
        assert!(info.body.contains("Extremite Ref: N2"));
        assert!(info.body.contains("Extremite Coordinates: X=2, Y=0, Z=0"));
        assert!(info.body.contains("Section: Default"));
        assert_eq!(info.status, "Selected link: L2");
    }

    #[test]
    fn test_imported_info_counts_group_members() {
        let mut doc = Document::default();
        doc.imported.insert("face_0_42".into(), TopoKind::Face);
        doc.imported.insert("face_1_7".into(), TopoKind::Face);

        let ids = vec![
            Identifier::Imported("face_0_42".into()),
            Identifier::Imported("face_1_7".into()),
        ];
        let info = describe(&doc, &ids).expect("Import sollte existieren");
        assert_eq!(
            info.body,
            "Selected shape ID: face_0_42\nType: Face\n(and 1 more shapes)"
        );
        assert_eq!(info.status, "Selected imported shape: face_0_42");
    }

    #[test]
    fn test_unknown_ids_yield_none() {
        let doc = Document::default();
        assert!(describe(&doc, &[]).is_none());
        assert!(describe(&doc, &[Identifier::Node(0)]).is_none());
        assert!(describe(&doc, &[Identifier::Imported("x".into())]).is_none());
    }
}
