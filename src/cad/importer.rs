//! CAD-Import: Root-Shape lesen und in Sub-Shapes je Topologie-Art zerlegen.

use crate::core::{
    Document, DocumentSource, Identifier, ImportError, LoadError, LoadMonitor, LoadReport,
    LoadSettings,
};
use crate::kernel::{CadFormat, CadReader, Shape, ShapeKey, TopoKind, TransferStatus};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;

/// Topologie-Arten, in die zerlegt wird (in dieser Reihenfolge).
pub const EXPLODED_KINDS: [TopoKind; 4] = [
    TopoKind::Solid,
    TopoKind::Shell,
    TopoKind::Face,
    TopoKind::Edge,
];

/// Obergrenze für den Hash-Anteil der Bezeichner.
pub const ID_HASH_UPPER: u64 = 1_000_000;

/// Eindeutige Sub-Shapes je Art, in Entdeckungsreihenfolge.
pub fn unique_subshapes(root: &Shape) -> IndexMap<TopoKind, Vec<Shape>> {
    let mut seen: HashSet<ShapeKey> = HashSet::new();
    let mut result = IndexMap::new();
    for kind in EXPLODED_KINDS {
        let unique: Vec<Shape> = root
            .explore(kind)
            .into_iter()
            .filter(|shape| seen.insert(shape.key()))
            .collect();
        if !unique.is_empty() {
            result.insert(kind, unique);
        }
    }
    result
}

/// Bezeichner eines importierten Sub-Shapes: `{art}_{zähler}_{hash}`.
pub fn imported_id(kind: TopoKind, counter: usize, shape: &Shape) -> String {
    format!("{}_{}_{}", kind.slug(), counter, shape.hash_code(ID_HASH_UPPER))
}

/// Liest eine CAD-Datei und baut ein neues Dokument daraus.
///
/// Meldet der Reader keinen Erfolg, wird ein [`ImportError`] mit Status
/// und Meldungen zurückgegeben; es entsteht kein Dokument.
pub fn import_cad<R: CadReader + ?Sized>(
    path: &Path,
    format: CadFormat,
    reader: &R,
    settings: LoadSettings,
    monitor: &dyn LoadMonitor,
) -> Result<(Document, LoadReport), LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    if !reader.can_read(format) {
        log::warn!("{}-Import vom Kernel nicht unterstützt: {}", format, path.display());
        return Err(ImportError {
            format,
            path: path.to_path_buf(),
            status: TransferStatus::NotSupported,
            messages: vec![format!("{format}-Import wird vom Kernel nicht unterstützt")],
        }
        .into());
    }

    monitor.begin("Reading", 0);
    log::info!("{}-Import: {}", format, path.display());
    let outcome = reader.read(path, format);
    for message in &outcome.messages {
        log::warn!("{}-Reader: {}", format, message);
    }
    let root = match outcome.shape {
        Some(shape) if outcome.status.is_done() => shape,
        _ => {
            return Err(ImportError {
                format,
                path: path.to_path_buf(),
                status: outcome.status,
                messages: outcome.messages,
            }
            .into())
        }
    };

    let mut doc = Document::new(settings.palette);
    let mut report = LoadReport::default();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let groups = unique_subshapes(&root);
    let total: usize = groups.values().map(Vec::len).sum();
    monitor.begin("Sub-shapes", total);

    let tree_root = doc.tree.add_root(format!("{format} Model: {file_name}"));
    let mut counter = 0;
    for (kind, shapes) in &groups {
        let group = doc
            .tree
            .add_child(tree_root, format!("{} ({})", kind.label(), shapes.len()));
        for shape in shapes {
            monitor.advance()?;
            let id = imported_id(*kind, counter, shape);
            counter += 1;

            doc.registry
                .register(Identifier::Imported(id.clone()), shape.clone());
            doc.imported.insert(id.clone(), *kind);
            doc.tree.add_leaf(
                group,
                format!("{} ID: {}", kind.label(), id),
                Identifier::Imported(id),
            );
        }
    }

    report.shapes = counter;
    doc.main_shape = Some(root);
    doc.source = DocumentSource::Cad {
        format,
        path: path.to_path_buf(),
    };
    log::info!(
        "{}-Import abgeschlossen: {} Sub-Shapes in {} Gruppen",
        format,
        counter,
        groups.len()
    );
    Ok((doc, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{JobProgress, Unmonitored};
    use crate::kernel::{GeometryKernel, MeshKernel, ReadOutcome, Tessellation, TransferStatus};
    use glam::DVec3;
    use std::path::PathBuf;

    struct FixedReader(ReadOutcome);

    impl CadReader for FixedReader {
        fn read(&self, _path: &Path, _format: CadFormat) -> ReadOutcome {
            self.0.clone()
        }
    }

    fn existing_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")
    }

    fn cylinder() -> Shape {
        MeshKernel::new(Tessellation {
            segments: 4,
            rings: 2,
        })
        .make_cylinder(DVec3::ZERO, DVec3::Z, 1.0, 2.0)
        .expect("gültiger Zylinder")
    }

    #[test]
    fn test_unique_subshapes_deduplicates_shared_edges() {
        let groups = unique_subshapes(&cylinder());
        assert_eq!(groups[&TopoKind::Solid].len(), 1);
        assert_eq!(groups[&TopoKind::Shell].len(), 1);
        // 4 Seiten + 2 Deckel
        assert_eq!(groups[&TopoKind::Face].len(), 6);
        // 4 unten + 4 oben + 4 senkrecht
        assert_eq!(groups[&TopoKind::Edge].len(), 12);
    }

    #[test]
    fn test_import_builds_registry_tree_and_kinds() {
        let reader = FixedReader(ReadOutcome {
            shape: Some(cylinder()),
            status: TransferStatus::Done,
            messages: Vec::new(),
        });
        let (doc, report) = import_cad(
            &existing_path(),
            CadFormat::Step,
            &reader,
            LoadSettings::default(),
            &Unmonitored,
        )
        .expect("Import sollte gelingen");

        assert_eq!(report.shapes, 20);
        assert_eq!(doc.registry.len(), 20);
        assert_eq!(doc.imported.len(), 20);
        assert!(doc.main_shape.is_some());

        let root = doc.tree.roots()[0];
        let root_node = doc.tree.node(root).expect("Root existiert");
        assert_eq!(root_node.label, "STEP Model: Cargo.toml");
        assert_eq!(root_node.ids.len(), 20);
        let group_labels: Vec<&str> = root_node
            .children
            .iter()
            .filter_map(|&c| doc.tree.node(c))
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(
            group_labels,
            vec!["Solid (1)", "Shell (1)", "Face (6)", "Edge (12)"]
        );

        let (first_id, kind) = doc.imported.get_index(0).expect("erster Eintrag");
        assert!(first_id.starts_with("solid_0_"));
        assert_eq!(*kind, TopoKind::Solid);
    }

    #[test]
    fn test_failed_read_is_import_error() {
        let reader = FixedReader(ReadOutcome::failed(TransferStatus::Fail, "kaputt"));
        let err = import_cad(
            &existing_path(),
            CadFormat::Iges,
            &reader,
            LoadSettings::default(),
            &Unmonitored,
        )
        .expect_err("Import sollte fehlschlagen");

        let LoadError::Import(import) = err else {
            panic!("ImportError erwartet");
        };
        assert_eq!(import.status, TransferStatus::Fail);
        assert_eq!(import.messages, vec!["kaputt".to_string()]);
    }

    /// Fordert nach `after` Sub-Shapes den Abbruch an, wie es der UI-Thread tut.
    struct CancelDuringExplosion {
        progress: JobProgress,
        after: usize,
    }

    impl LoadMonitor for CancelDuringExplosion {
        fn begin(&self, phase: &str, total: usize) {
            self.progress.begin(phase, total);
        }

        fn advance(&self) -> Result<(), LoadError> {
            if self.progress.phase() == "Sub-shapes" && self.progress.counts().0 >= self.after {
                self.progress.request_cancel();
            }
            self.progress.advance()
        }
    }

    #[test]
    fn test_cancel_during_subshape_explosion() {
        let reader = FixedReader(ReadOutcome {
            shape: Some(cylinder()),
            status: TransferStatus::Done,
            messages: Vec::new(),
        });
        let monitor = CancelDuringExplosion {
            progress: JobProgress::new(),
            after: 5,
        };

        let err = import_cad(
            &existing_path(),
            CadFormat::Step,
            &reader,
            LoadSettings::default(),
            &monitor,
        )
        .expect_err("Import sollte abgebrochen werden");

        assert!(err.is_cancelled());
        assert_eq!(monitor.progress.counts(), (5, 20));
        assert!(monitor.progress.is_cancel_requested());
    }

    struct StepOnlyReader;

    impl CadReader for StepOnlyReader {
        fn read(&self, _path: &Path, _format: CadFormat) -> ReadOutcome {
            panic!("read darf für nicht unterstützte Formate nicht aufgerufen werden");
        }

        fn can_read(&self, format: CadFormat) -> bool {
            format == CadFormat::Step
        }
    }

    #[test]
    fn test_unsupported_format_is_rejected_before_reading() {
        let err = import_cad(
            &existing_path(),
            CadFormat::Iges,
            &StepOnlyReader,
            LoadSettings::default(),
            &Unmonitored,
        )
        .expect_err("IGES sollte abgelehnt werden");

        let LoadError::Import(import) = err else {
            panic!("ImportError erwartet");
        };
        assert_eq!(import.status, TransferStatus::NotSupported);
        assert_eq!(import.format, CadFormat::Iges);
        assert!(import.messages[0].contains("IGES"));
    }
}
