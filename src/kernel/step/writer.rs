use crate::kernel::{Geometry, Shape, TopoKind, TransferStatus};
use glam::DVec3;
use std::collections::HashMap;
use std::path::Path;
use truck_modeling::{builder, Edge, Face, Point3, Shell, Solid, Vertex, Wire};
use truck_stepio::out::{CompleteStepDisplay, StepHeaderDescriptor, StepModels};

/// Schreibt `shape` als STEP-Datei.
pub fn write_file(shape: &Shape, path: &Path) -> TransferStatus {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("model");
    let Some(content) = write_string(shape, name) else {
        log::warn!("STEP-Export: Shape enthält keine Faces");
        return TransferStatus::Void;
    };
    match std::fs::write(path, content) {
        Ok(()) => TransferStatus::Done,
        Err(e) => {
            log::error!("STEP-Datei konnte nicht geschrieben werden: {}", e);
            TransferStatus::Error
        }
    }
}

/// Serialisiert `shape` als STEP-Text (`None`, wenn nichts Darstellbares enthalten ist).
///
/// Jede Shell wird ein eigener Körper; geschlossene Shells werden als
/// Solid geschrieben.
pub fn write_string(shape: &Shape, name: &str) -> Option<String> {
    let mut bodies = Vec::new();
    for faces in body_faces(shape) {
        let mut body = BodyBuilder::default();
        for face in &faces {
            body.add_face(face);
        }
        if body.faces.is_empty() {
            continue;
        }
        let shell = Shell::from(body.faces);
        bodies.push(match Solid::try_new(vec![shell.clone()]) {
            Ok(solid) => Compressed::Solid(solid.compress()),
            Err(_) => Compressed::Shell(shell.compress()),
        });
    }
    if bodies.is_empty() {
        return None;
    }

    let mut models = StepModels::default();
    for body in &bodies {
        match body {
            Compressed::Solid(solid) => models.push_solid(solid),
            Compressed::Shell(shell) => models.push_shell(shell),
        }
    }
    let header = StepHeaderDescriptor {
        file_name: format!("{name}.step"),
        organization_system: format!("airnet_viewer {}", env!("CARGO_PKG_VERSION")),
        ..Default::default()
    };
    log::info!("STEP-Export '{}': {} Körper", name, bodies.len());
    Some(CompleteStepDisplay::new(models, header).to_string())
}

enum Compressed<Sh, So> {
    Shell(Sh),
    Solid(So),
}

/// Face-Gruppen je Körper: eine pro Shell, lose Faces zusammen in einer.
fn body_faces(shape: &Shape) -> Vec<Vec<Shape>> {
    let mut bodies: Vec<Vec<Shape>> = Vec::new();
    let mut seen: Vec<Shape> = Vec::new();
    for shell in shape.explore(TopoKind::Shell) {
        if seen.iter().any(|s| s.is_same(&shell)) {
            continue;
        }
        bodies.push(shell.explore(TopoKind::Face));
        seen.push(shell);
    }
    if bodies.is_empty() {
        let loose = shape.explore(TopoKind::Face);
        if !loose.is_empty() {
            bodies.push(loose);
        }
    }
    bodies
}

fn position_key(p: DVec3) -> [u64; 3] {
    [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
}

/// Baut die truck-Faces eines Körpers mit geteilten Vertices und Kanten.
#[derive(Default)]
struct BodyBuilder {
    vertices: HashMap<[u64; 3], Vertex>,
    /// Schlüssel (kleinerer, größerer Punkt) → Kante und ihr Startpunkt
    edges: HashMap<([u64; 3], [u64; 3]), (Edge, [u64; 3])>,
    faces: Vec<Face>,
}

impl BodyBuilder {
    fn vertex(&mut self, p: DVec3) -> Vertex {
        self.vertices
            .entry(position_key(p))
            .or_insert_with(|| builder::vertex(Point3::new(p.x, p.y, p.z)))
            .clone()
    }

    fn edge(&mut self, a: DVec3, b: DVec3) -> Edge {
        let (ka, kb) = (position_key(a), position_key(b));
        let key = if ka <= kb { (ka, kb) } else { (kb, ka) };
        if let Some((edge, start)) = self.edges.get(&key) {
            return if *start == ka {
                edge.clone()
            } else {
                edge.inverse()
            };
        }
        let (va, vb) = (self.vertex(a), self.vertex(b));
        let edge = builder::line(&va, &vb);
        self.edges.insert(key, (edge.clone(), ka));
        edge
    }

    fn planar_face(&mut self, points: &[DVec3]) -> bool {
        let mut loop_points: Vec<DVec3> = Vec::with_capacity(points.len());
        for &p in points {
            if loop_points.last() != Some(&p) {
                loop_points.push(p);
            }
        }
        while loop_points.len() > 1 && loop_points.first() == loop_points.last() {
            loop_points.pop();
        }
        if loop_points.len() < 3 {
            return false;
        }

        let n = loop_points.len();
        let edges: Vec<Edge> = (0..n)
            .map(|i| self.edge(loop_points[i], loop_points[(i + 1) % n]))
            .collect();
        match builder::try_attach_plane(&[Wire::from(edges)]) {
            Ok(face) => {
                self.faces.push(face);
                true
            }
            Err(e) => {
                log::debug!("STEP-Export: Fläche nicht planar anhängbar: {}", e);
                false
            }
        }
    }

    fn add_face(&mut self, face: &Shape) {
        match face.geometry() {
            Geometry::Polygon(points) if self.planar_face(points) => {}
            _ => {
                // Nicht-planare Polygone und Meshes: ein Face pro Dreieck
                let mut skipped = 0;
                for triangle in face.face_triangles() {
                    if !self.planar_face(&triangle) {
                        skipped += 1;
                    }
                }
                if skipped > 0 {
                    log::warn!("STEP-Export: {} degenerierte Dreiecke übersprungen", skipped);
                }
            }
        }
    }
}
