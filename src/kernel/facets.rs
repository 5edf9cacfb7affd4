//! Aufbau facettierter Solids mit geteilten Vertices und Kanten.

use super::shape::Shape;
use glam::DVec3;
use std::collections::HashMap;

/// Baut Faces aus Punkt-Indizes auf und teilt Vertices/Kanten zwischen
/// benachbarten Faces.
///
/// Punkte werden über einen frei wählbaren Schlüssel (`usize`) adressiert,
/// z.B. der Gitter-Index eines Primitivs.
#[derive(Default)]
pub struct FacetBuilder {
    points: HashMap<usize, (DVec3, Shape)>,
    edges: HashMap<(usize, usize), Shape>,
    faces: Vec<Shape>,
}

impl FacetBuilder {
    /// Erstellt einen leeren Builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Punkt unter `key` (ein vorhandener Punkt bleibt erhalten).
    pub fn add_point(&mut self, key: usize, position: DVec3) {
        self.points
            .entry(key)
            .or_insert_with(|| (position, Shape::vertex(position)));
    }

    /// Fügt ein Face über die Punkt-Schlüssel hinzu.
    ///
    /// Gibt `false` zurück (und fügt nichts hinzu), wenn weniger als drei
    /// Punkte übergeben werden oder ein Schlüssel unbekannt ist.
    pub fn add_face(&mut self, keys: &[usize]) -> bool {
        if keys.len() < 3 || keys.iter().any(|k| !self.points.contains_key(k)) {
            return false;
        }

        let mut polygon = Vec::with_capacity(keys.len());
        let mut face_edges = Vec::with_capacity(keys.len());
        for (i, &a) in keys.iter().enumerate() {
            let b = keys[(i + 1) % keys.len()];
            let Some(edge) = self.edge_between(a, b) else {
                return false;
            };
            if let Some((p, _)) = self.points.get(&a) {
                polygon.push(*p);
            }
            face_edges.push(edge);
        }

        self.faces.push(Shape::face(polygon, face_edges));
        true
    }

    fn edge_between(&mut self, a: usize, b: usize) -> Option<Shape> {
        let key = (a.min(b), a.max(b));
        if let Some(edge) = self.edges.get(&key) {
            return Some(edge.clone());
        }
        let start = self.points.get(&a)?.1.clone();
        let end = self.points.get(&b)?.1.clone();
        let edge = Shape::edge(&start, &end);
        self.edges.insert(key, edge.clone());
        Some(edge)
    }

    /// Anzahl bisher erzeugter Faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Schließt den Aufbau als Shell ab.
    pub fn into_shell(self) -> Shape {
        Shape::shell(self.faces)
    }

    /// Schließt den Aufbau als Solid (mit einer Shell) ab.
    pub fn into_solid(self) -> Shape {
        Shape::solid(vec![self.into_shell()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::TopoKind;

    #[test]
    fn test_adjacent_faces_share_edge() {
        let mut builder = FacetBuilder::new();
        builder.add_point(0, DVec3::ZERO);
        builder.add_point(1, DVec3::X);
        builder.add_point(2, DVec3::Y);
        builder.add_point(3, DVec3::new(1.0, 1.0, 0.0));

        assert!(builder.add_face(&[0, 1, 2]));
        assert!(builder.add_face(&[1, 3, 2]));
        let solid = builder.into_solid();

        let edges = solid.explore(TopoKind::Edge);
        assert_eq!(edges.len(), 6);
        // Kante 1-2 taucht in beiden Faces auf, ist aber dieselbe Struktur
        let shared = edges
            .iter()
            .filter(|e| edges.iter().filter(|o| o.is_same(e)).count() == 2)
            .count();
        assert_eq!(shared, 2);
    }

    #[test]
    fn test_rejects_unknown_or_short_faces() {
        let mut builder = FacetBuilder::new();
        builder.add_point(0, DVec3::ZERO);
        builder.add_point(1, DVec3::X);
        assert!(!builder.add_face(&[0, 1]));
        assert!(!builder.add_face(&[0, 1, 7]));
        assert_eq!(builder.face_count(), 0);
    }
}
