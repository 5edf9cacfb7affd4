//! STEP-Austausch (ISO 10303-21) über `ruststep` und `truck`.
//!
//! Lesen: Datei parsen, B-Rep-Shells in truck-Topologie überführen und
//! tessellieren. Jede truck-Shell wird zu einer [`Shape`]-Shell mit
//! Mesh-Faces und Polyline-Kanten; geschlossene Shells werden zu Solids.
//!
//! Schreiben: planare Faces werden als truck-Faces mit Geraden-Kanten
//! aufgebaut und als `ADVANCED_FACE`-B-Rep ausgegeben.

mod reader;
mod writer;

pub use reader::{read_file, read_str};
pub use writer::{write_file, write_string};

use glam::DVec3;

fn to_dvec(p: truck_meshalgo::prelude::Point3) -> DVec3 {
    DVec3::new(p.x, p.y, p.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{GeometryKernel, MeshKernel, Shape, Tessellation, TopoKind, TransferStatus};
    use approx::assert_relative_eq;
    use std::path::{Path, PathBuf};

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    fn distinct(shapes: Vec<Shape>) -> Vec<Shape> {
        let mut unique: Vec<Shape> = Vec::new();
        for shape in shapes {
            if !unique.iter().any(|u| u.is_same(&shape)) {
                unique.push(shape);
            }
        }
        unique
    }

    #[test]
    fn test_read_advanced_brep_cube() {
        let outcome = read_file(&fixture("cube.step"));
        assert_eq!(outcome.status, TransferStatus::Done, "{:?}", outcome.messages);
        let shape = outcome.shape.expect("Shape erwartet");

        assert_eq!(shape.kind(), TopoKind::Solid);
        assert_eq!(shape.explore(TopoKind::Shell).len(), 1);
        assert_eq!(shape.explore(TopoKind::Face).len(), 6);
        // 6 Faces × 4 Kanten, jede Kante von zwei Faces geteilt
        assert_eq!(shape.explore(TopoKind::Edge).len(), 24);
        assert_eq!(distinct(shape.explore(TopoKind::Edge)).len(), 12);
        assert!(shape.triangles().len() >= 12);

        let (min, max) = shape.bounds().expect("Bounds");
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(max.z, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_read_open_surface_model_stays_shell() {
        let outcome = read_file(&fixture("plate.step"));
        assert_eq!(outcome.status, TransferStatus::Done, "{:?}", outcome.messages);
        let shape = outcome.shape.expect("Shape erwartet");

        assert_eq!(shape.kind(), TopoKind::Shell);
        assert_eq!(shape.explore(TopoKind::Face).len(), 1);
        assert_eq!(shape.explore(TopoKind::Edge).len(), 4);
        // Offene Fläche: keine freien Kanten, die Dreiecke werden gezeichnet
        assert!(shape.free_segments().is_empty());
        assert!(shape.triangles().len() >= 2);
    }

    #[test]
    fn test_garbage_is_fail() {
        let outcome = read_str("kein STEP");
        assert_eq!(outcome.status, TransferStatus::Fail);
        assert!(outcome.shape.is_none());
        assert!(!outcome.messages.is_empty());
    }

    #[test]
    fn test_empty_data_is_void() {
        let outcome = read_str(
            "ISO-10303-21;\nHEADER;\nFILE_DESCRIPTION((''),'2;1');\nFILE_NAME('','',(''),(''),'','','');\nFILE_SCHEMA(('AUTOMOTIVE_DESIGN'));\nENDSEC;\nDATA;\nENDSEC;\nEND-ISO-10303-21;\n",
        );
        assert_eq!(outcome.status, TransferStatus::Void);
        assert!(outcome.shape.is_none());
    }

    #[test]
    fn test_write_then_read_keeps_solid_and_faces() {
        let kernel = MeshKernel::new(Tessellation {
            segments: 6,
            rings: 3,
        });
        let cylinder = kernel
            .make_cylinder(DVec3::ZERO, DVec3::Z, 1.0, 4.0)
            .expect("Zylinder sollte erzeugbar sein");

        let text = write_string(&cylinder, "cylinder").expect("STEP-Text erwartet");
        assert!(text.starts_with("ISO-10303-21;"));
        assert!(text.contains("ADVANCED_FACE"));

        let reread = read_str(&text).shape.expect("Shape erwartet");
        assert_eq!(reread.kind(), TopoKind::Solid);
        // 6 Mantelflächen + 2 Deckel
        assert_eq!(reread.explore(TopoKind::Face).len(), 8);
        assert!(!reread.is_same(&cylinder));
        let (_, max) = reread.bounds().expect("Bounds");
        assert_relative_eq!(max.z, 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_reexport_of_imported_mesh_faces() {
        let cube = read_file(&fixture("cube.step"))
            .shape
            .expect("Shape erwartet");
        let text = write_string(&cube, "cube").expect("STEP-Text erwartet");

        // Mesh-Faces werden dreieckweise geschrieben
        let reread = read_str(&text).shape.expect("Shape erwartet");
        assert_eq!(reread.kind(), TopoKind::Solid);
        assert_eq!(
            reread.explore(TopoKind::Face).len(),
            cube.triangles().len()
        );
    }

    #[test]
    fn test_edges_only_shape_is_not_writable() {
        let a = Shape::vertex(DVec3::ZERO);
        let b = Shape::vertex(DVec3::X);
        assert!(write_string(&Shape::edge(&a, &b), "edge").is_none());
    }
}
