//! Welt-Geometrie aller registrierten Shapes, einmal pro Redraw-Generation gebaut.

use crate::core::ShapeRegistry;
use crate::kernel::{ShapeKey, TopoKind};
use glam::DVec3;
use std::collections::HashMap;

/// Dreieck in Weltkoordinaten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTriangle {
    /// Eckpunkte
    pub vertices: [DVec3; 3],
    /// Normale (normiert, oder 0 bei degenerierten Dreiecken)
    pub normal: DVec3,
    /// RGBA
    pub color: [f32; 4],
}

/// Freie Kante in Weltkoordinaten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldSegment {
    /// Startpunkt
    pub start: DVec3,
    /// Endpunkt
    pub end: DVec3,
    /// RGBA
    pub color: [f32; 4],
}

/// Alle zeichenbaren Primitive der Registry.
///
/// Faces und Kanten, die in mehreren Einträgen vorkommen (Solid, Shell und
/// Face desselben Imports), werden nur einmal aufgenommen. Ein hervorgehobener
/// Eintrag färbt seine Faces auch dann, wenn sie zuerst über einen anderen
/// Eintrag gefunden wurden.
#[derive(Debug, Clone, Default)]
pub struct WorldMesh {
    /// Dreiecke (Fächer-Triangulierung der Faces)
    pub triangles: Vec<WorldTriangle>,
    /// Kanten ohne Face
    pub segments: Vec<WorldSegment>,
}

struct FaceEntry {
    triangles: Vec<[DVec3; 3]>,
    color: [f32; 4],
}

impl WorldMesh {
    /// Baut die Welt-Geometrie aus der Registry.
    pub fn from_registry(registry: &ShapeRegistry) -> Self {
        let mut faces: Vec<FaceEntry> = Vec::new();
        let mut face_index: HashMap<ShapeKey, usize> = HashMap::new();
        let mut segments: Vec<WorldSegment> = Vec::new();
        let mut segment_index: HashMap<ShapeKey, std::ops::Range<usize>> = HashMap::new();

        for entry in registry.iter() {
            let shape_faces = entry.shape.explore(TopoKind::Face);
            if shape_faces.is_empty() {
                for edge in entry.shape.explore(TopoKind::Edge) {
                    match segment_index.get(&edge.key()) {
                        Some(range) if entry.highlighted => {
                            for segment in &mut segments[range.clone()] {
                                segment.color = entry.color;
                            }
                        }
                        Some(_) => {}
                        None => {
                            let first = segments.len();
                            for [start, end] in edge.edge_segments() {
                                segments.push(WorldSegment {
                                    start,
                                    end,
                                    color: entry.color,
                                });
                            }
                            segment_index.insert(edge.key(), first..segments.len());
                        }
                    }
                }
                continue;
            }

            for face in shape_faces {
                let face_triangles = face.face_triangles();
                if face_triangles.is_empty() {
                    continue;
                }
                match face_index.get(&face.key()) {
                    Some(&i) if entry.highlighted => faces[i].color = entry.color,
                    Some(_) => {}
                    None => {
                        face_index.insert(face.key(), faces.len());
                        faces.push(FaceEntry {
                            triangles: face_triangles,
                            color: entry.color,
                        });
                    }
                }
            }
        }

        let mut triangles = Vec::new();
        for face in &faces {
            for &vertices in &face.triangles {
                let normal = (vertices[1] - vertices[0])
                    .cross(vertices[2] - vertices[0])
                    .normalize_or_zero();
                triangles.push(WorldTriangle {
                    vertices,
                    normal,
                    color: face.color,
                });
            }
        }

        Self {
            triangles,
            segments,
        }
    }

    /// Gibt `true` zurück, wenn nichts zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty() && self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Identifier, ShapePalette};
    use crate::kernel::{GeometryKernel, MeshKernel, Shape, Tessellation};

    fn cylinder() -> Shape {
        MeshKernel::new(Tessellation {
            segments: 4,
            rings: 2,
        })
        .make_cylinder(DVec3::ZERO, DVec3::Z, 1.0, 2.0)
        .expect("gültiger Zylinder")
    }

    #[test]
    fn test_shared_faces_are_drawn_once() {
        let solid = cylinder();
        let faces = solid.explore(TopoKind::Face);
        let mut registry = ShapeRegistry::new(ShapePalette::default());
        registry.register(Identifier::Imported("solid".into()), solid.clone());
        registry.register(Identifier::Imported("face".into()), faces[0].clone());

        let mesh = WorldMesh::from_registry(&registry);
        // 4 Seiten-Quads (je 2) + 2 Deckel-Quadrate (je 2)
        assert_eq!(mesh.triangles.len(), 12);
        assert!(mesh.segments.is_empty());
    }

    #[test]
    fn test_highlighted_face_wins_over_earlier_entry() {
        let solid = cylinder();
        let face = solid.explore(TopoKind::Face)[0].clone();
        let palette = ShapePalette::default();
        let mut registry = ShapeRegistry::new(palette);
        registry.register(Identifier::Imported("solid".into()), solid);
        let face_id = Identifier::Imported("face".into());
        registry.register(face_id.clone(), face);
        registry.set_highlighted(&[face_id], true);

        let mesh = WorldMesh::from_registry(&registry);
        let highlighted = mesh
            .triangles
            .iter()
            .filter(|t| t.color == palette.shape_highlight)
            .count();
        assert_eq!(highlighted, 2);
    }

    #[test]
    fn test_edges_without_faces_become_segments() {
        let a = Shape::vertex(DVec3::ZERO);
        let b = Shape::vertex(DVec3::X);
        let mut registry = ShapeRegistry::new(ShapePalette::default());
        registry.register(Identifier::Imported("edge".into()), Shape::edge(&a, &b));

        let mesh = WorldMesh::from_registry(&registry);
        assert!(mesh.triangles.is_empty());
        assert_eq!(mesh.segments.len(), 1);
        assert_eq!(mesh.segments[0].end, DVec3::X);
    }
}
