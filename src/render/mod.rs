//! Rendering der registrierten Shapes als egui-Mesh.
//!
//! Die Welt-Geometrie wird nur neu aufgebaut, wenn sich die Redraw-Generation
//! der Registry ändert; pro Frame werden lediglich Projektion, Tiefensortierung
//! und Schattierung neu berechnet.

mod projection;
mod world_mesh;

pub use crate::shared::RenderScene;
pub use projection::{project_segments, project_triangles, ScreenSegment, ScreenTriangle, AMBIENT};
pub use world_mesh::{WorldMesh, WorldSegment, WorldTriangle};

use eframe::egui;
use glam::Vec2;

/// Linienstärke freier Kanten in Pixeln.
const SEGMENT_WIDTH_PX: f32 = 1.5;

fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

/// Haupt-Renderer für den 3D-Viewport.
#[derive(Default)]
pub struct SceneRenderer {
    mesh: WorldMesh,
    generation: Option<u64>,
}

impl SceneRenderer {
    /// Erstellt einen Renderer ohne Geometrie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut die Welt-Geometrie neu, falls sich die Registry geändert hat.
    ///
    /// Gibt `true` zurück, wenn neu gebaut wurde.
    pub fn sync(&mut self, scene: &RenderScene) -> bool {
        let generation = scene.generation();
        if self.generation == Some(generation) {
            return false;
        }
        self.mesh = WorldMesh::from_registry(scene.registry);
        self.generation = Some(generation);
        log::debug!(
            "Render-Cache neu gebaut: {} Dreiecke, {} Kanten (Generation {})",
            self.mesh.triangles.len(),
            self.mesh.segments.len(),
            generation
        );
        true
    }

    /// Aktuelle Welt-Geometrie.
    pub fn mesh(&self) -> &WorldMesh {
        &self.mesh
    }

    /// Zeichnet die Szene in `rect`.
    pub fn paint(&mut self, painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
        self.sync(scene);
        painter.rect_filled(rect, 0.0, color32(scene.background_color));
        if self.mesh.is_empty() {
            return;
        }

        let viewport = Vec2::new(rect.width(), rect.height());
        let offset = rect.min.to_vec2();
        let to_pos = |p: Vec2| egui::pos2(p.x, p.y) + offset;

        let mut mesh = egui::Mesh::default();
        for tri in project_triangles(scene.camera, viewport, &self.mesh) {
            let base = mesh.vertices.len() as u32;
            let color = color32(tri.color);
            for point in tri.points {
                mesh.colored_vertex(to_pos(point), color);
            }
            mesh.add_triangle(base, base + 1, base + 2);
        }
        painter.add(egui::Shape::mesh(mesh));

        for seg in project_segments(scene.camera, viewport, &self.mesh) {
            painter.line_segment(
                [to_pos(seg.start), to_pos(seg.end)],
                egui::Stroke::new(SEGMENT_WIDTH_PX, color32(seg.color)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Camera3D, Identifier, ShapePalette, ShapeRegistry};
    use crate::kernel::{GeometryKernel, MeshKernel};
    use glam::DVec3;

    #[test]
    fn test_sync_rebuilds_only_on_generation_change() {
        let mut registry = ShapeRegistry::new(ShapePalette::default());
        let kernel = MeshKernel::default();
        registry.register(
            Identifier::Node(0),
            kernel.make_sphere(DVec3::ZERO, 1.0).expect("gültige Kugel"),
        );
        let camera = Camera3D::new();
        let mut renderer = SceneRenderer::new();

        let scene = RenderScene {
            registry: &registry,
            camera: &camera,
            viewport_size: [800.0, 600.0],
            background_color: [0.0, 0.0, 0.0, 1.0],
        };
        assert!(renderer.sync(&scene));
        assert!(!renderer.sync(&scene));
        assert!(!renderer.mesh().triangles.is_empty());

        registry.set_highlighted(&[Identifier::Node(0)], true);
        let scene = RenderScene {
            registry: &registry,
            camera: &camera,
            viewport_size: [800.0, 600.0],
            background_color: [0.0, 0.0, 0.0, 1.0],
        };
        assert!(renderer.sync(&scene));
        assert_eq!(
            renderer.mesh().triangles[0].color,
            ShapePalette::default().node_highlight
        );
    }
}
