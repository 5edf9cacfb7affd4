//! Projektion der Welt-Geometrie in den Viewport (Painter-Algorithmus).

use super::WorldMesh;
use crate::core::Camera3D;
use glam::Vec2;

/// Grundhelligkeit für Flächen, die vom Licht abgewandt sind.
pub const AMBIENT: f32 = 0.35;

/// Projiziertes, schattiertes Dreieck
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTriangle {
    /// Eckpunkte in Viewport-Pixeln
    pub points: [Vec2; 3],
    /// Mittlere Tiefe entlang der Blickrichtung
    pub depth: f64,
    /// Schattierte Farbe (RGBA)
    pub color: [f32; 4],
}

/// Projiziertes Liniensegment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSegment {
    /// Start in Viewport-Pixeln
    pub start: Vec2,
    /// Ende in Viewport-Pixeln
    pub end: Vec2,
    /// RGBA
    pub color: [f32; 4],
}

fn shade(color: [f32; 4], intensity: f32) -> [f32; 4] {
    [
        color[0] * intensity,
        color[1] * intensity,
        color[2] * intensity,
        color[3],
    ]
}

/// Projiziert und schattiert alle Dreiecke, sortiert von hinten nach vorne.
///
/// Dreiecke mit einem Eckpunkt hinter der Kamera werden verworfen. Beleuchtet
/// wird mit einem Kopflicht, beidseitig (die Orientierung importierter Faces
/// ist nicht verlässlich).
pub fn project_triangles(camera: &Camera3D, viewport: Vec2, mesh: &WorldMesh) -> Vec<ScreenTriangle> {
    let (forward, _, _) = camera.basis();
    let mut projected: Vec<ScreenTriangle> = mesh
        .triangles
        .iter()
        .filter_map(|tri| {
            let (a, da) = camera.project(tri.vertices[0], viewport)?;
            let (b, db) = camera.project(tri.vertices[1], viewport)?;
            let (c, dc) = camera.project(tri.vertices[2], viewport)?;
            let lambert = tri.normal.dot(forward).abs() as f32;
            Some(ScreenTriangle {
                points: [a, b, c],
                depth: (da + db + dc) / 3.0,
                color: shade(tri.color, AMBIENT + (1.0 - AMBIENT) * lambert),
            })
        })
        .collect();
    projected.sort_by(|x, y| y.depth.total_cmp(&x.depth));
    projected
}

/// Projiziert alle freien Kanten.
pub fn project_segments(camera: &Camera3D, viewport: Vec2, mesh: &WorldMesh) -> Vec<ScreenSegment> {
    mesh.segments
        .iter()
        .filter_map(|seg| {
            let (start, _) = camera.project(seg.start, viewport)?;
            let (end, _) = camera.project(seg.end, viewport)?;
            Some(ScreenSegment {
                start,
                end,
                color: seg.color,
            })
        })
        .collect()
}
