//! Stabile Bezeichner für registrierte Shapes.

use std::fmt;

/// Herkunft eines registrierten Shapes.
///
/// Gültig nur innerhalb des aktuell geladenen Dokuments; jeder Reload
/// vergibt die Bezeichner neu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identifier {
    /// Node-Kugel (Position in der Node-Reihenfolge des Record Store)
    Node(usize),
    /// Link-Zylinder (0-basierter Zeilen-/Element-Index)
    Link(usize),
    /// Sub-Shape einer importierten CAD-Datei
    Imported(String),
}

impl Identifier {
    /// Gibt `true` zurück für Node-Bezeichner.
    pub fn is_node(&self) -> bool {
        matches!(self, Identifier::Node(_))
    }

    /// Gibt `true` zurück für importierte Sub-Shapes.
    pub fn is_imported(&self) -> bool {
        matches!(self, Identifier::Imported(_))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Node(index) => write!(f, "node_{index}"),
            Identifier::Link(index) => write!(f, "{index}"),
            Identifier::Imported(id) => f.write_str(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_internal_ids() {
        assert_eq!(Identifier::Node(3).to_string(), "node_3");
        assert_eq!(Identifier::Link(7).to_string(), "7");
        assert_eq!(
            Identifier::Imported("solid_0_123".into()).to_string(),
            "solid_0_123"
        );
    }

    #[test]
    fn test_kinds_never_collide() {
        assert_ne!(Identifier::Node(1), Identifier::Link(1));
        assert!(Identifier::Node(0).is_node());
        assert!(!Identifier::Link(0).is_node());
        assert!(Identifier::Imported("x".into()).is_imported());
    }
}
