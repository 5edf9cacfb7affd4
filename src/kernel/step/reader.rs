use super::to_dvec;
use crate::kernel::{ReadOutcome, Shape, TransferStatus};
use glam::DVec3;
use ruststep::parser::parse;
use std::path::Path;
use truck_meshalgo::prelude::*;
use truck_stepio::r#in::Table;

/// Grobe Toleranz für den ersten Tessellierungsdurchlauf
const COARSE_TOLERANCE: f64 = 0.01;
/// Feine Toleranz relativ zur Diagonale der Shell
const RELATIVE_TOLERANCE: f64 = 0.001;

/// Liest eine STEP-Datei.
pub fn read_file(path: &Path) -> ReadOutcome {
    match std::fs::read_to_string(path) {
        Ok(content) => read_str(&content),
        Err(e) => ReadOutcome::failed(
            TransferStatus::Error,
            format!("Datei nicht lesbar: {} ({})", path.display(), e),
        ),
    }
}

/// Liest STEP-Text. Mehrere Shells werden zu einem Compound zusammengefasst.
pub fn read_str(content: &str) -> ReadOutcome {
    let exchange = match parse(content) {
        Ok(exchange) => exchange,
        Err(e) => {
            return ReadOutcome::failed(
                TransferStatus::Fail,
                format!("STEP-Datei nicht parsebar: {e}"),
            )
        }
    };
    let Some(data) = exchange.data.first() else {
        return ReadOutcome::failed(TransferStatus::Fail, "Kein DATA-Abschnitt gefunden");
    };
    let table = Table::from_data_section(data);

    let mut shell_entries: Vec<_> = table.shell.iter().collect();
    shell_entries.sort_by_key(|(id, _)| **id);
    if shell_entries.is_empty() {
        return ReadOutcome::failed(TransferStatus::Void, "Keine Shells im DATA-Abschnitt");
    }

    let mut messages = Vec::new();
    let mut bodies = Vec::new();
    for (id, holder) in shell_entries {
        let compressed = match table.to_compressed_shell(holder) {
            Ok(compressed) => compressed,
            Err(e) => {
                log::warn!("STEP: Shell #{} übersprungen: {}", id, e);
                messages.push(format!("Shell #{id} übersprungen: {e}"));
                continue;
            }
        };

        // Zwei Durchläufe: die Größe der Shell bestimmt die feine Toleranz
        let coarse = compressed.robust_triangulation(COARSE_TOLERANCE).to_polygon();
        let mut tolerance = coarse.bounding_box().diameter() * RELATIVE_TOLERANCE;
        if !tolerance.is_normal() {
            tolerance = COARSE_TOLERANCE;
        }
        let meshed = compressed.robust_triangulation(tolerance);

        let vertices: Vec<Shape> = meshed
            .vertices
            .iter()
            .map(|p| Shape::vertex(to_dvec(*p)))
            .collect();
        let edges: Vec<Option<Shape>> = meshed
            .edges
            .iter()
            .map(|edge| {
                let (a, b) = edge.vertices;
                let points = edge.curve.0.iter().map(|p| to_dvec(*p)).collect();
                Some(Shape::polyline_edge(vertices.get(a)?, vertices.get(b)?, points))
            })
            .collect();

        let mut edge_uses = vec![0usize; edges.len()];
        let mut faces = Vec::with_capacity(meshed.faces.len());
        for (index, face) in meshed.faces.iter().enumerate() {
            let Some(surface) = face.surface.as_ref() else {
                messages.push(format!("Shell #{id}: Face {} nicht tessellierbar", index + 1));
                continue;
            };
            let mesh = match face.orientation {
                true => surface.clone(),
                false => surface.inverse(),
            };
            let triangles = mesh_triangles(&mesh);
            if triangles.is_empty() {
                continue;
            }

            let mut face_edges = Vec::new();
            for edge_index in face.boundaries.iter().flatten() {
                if let Some(Some(edge)) = edges.get(edge_index.index) {
                    edge_uses[edge_index.index] += 1;
                    face_edges.push(edge.clone());
                }
            }
            faces.push(Shape::mesh_face(triangles, face_edges));
        }

        if faces.is_empty() {
            messages.push(format!("Shell #{id} enthält keine darstellbaren Faces"));
            continue;
        }
        let closed = !edge_uses.is_empty() && edge_uses.iter().all(|&uses| uses == 2);
        let shell = Shape::shell(faces);
        bodies.push(if closed {
            Shape::solid(vec![shell])
        } else {
            shell
        });
    }

    log::info!("STEP gelesen: {} Körper, {} Meldungen", bodies.len(), messages.len());
    let shape = match bodies.len() {
        0 => {
            messages.push("Keine Shell konnte übertragen werden".to_string());
            return ReadOutcome {
                shape: None,
                status: TransferStatus::Fail,
                messages,
            };
        }
        1 => bodies.remove(0),
        _ => Shape::compound(bodies),
    };
    ReadOutcome {
        shape: Some(shape),
        status: TransferStatus::Done,
        messages,
    }
}

fn mesh_triangles(mesh: &PolygonMesh) -> Vec<[DVec3; 3]> {
    let positions = mesh.positions();
    mesh.tri_faces()
        .iter()
        .filter_map(|tri| {
            Some([
                to_dvec(positions.get(tri[0].pos)?),
                to_dvec(positions.get(tri[1].pos)?),
                to_dvec(positions.get(tri[2].pos)?),
            ])
        })
        .collect()
}
