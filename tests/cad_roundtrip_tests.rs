use airnet_viewer::cad::{export_document, import_cad, ExportOutcome};
use airnet_viewer::core::{DocumentSource, ExportError, LoadError, LoadSettings, Unmonitored};
use airnet_viewer::kernel::{TopoKind, TransferStatus};
use airnet_viewer::{load_network_xml, CadFormat, Document, MeshKernel};
use std::path::Path;

fn network_doc(kernel: &MeshKernel) -> Document {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/network.xml");
    let (doc, _) = load_network_xml(&path, kernel, LoadSettings::default(), &Unmonitored)
        .expect("Fixture sollte ladbar sein");
    doc
}

fn count_kind(doc: &Document, kind: TopoKind) -> usize {
    doc.imported.values().filter(|&&k| k == kind).count()
}

#[test]
fn test_network_export_reimports_as_one_solid_per_primitive() {
    let kernel = MeshKernel::default();
    let doc = network_doc(&kernel);
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis sollte erstellbar sein");
    let path = dir.path().join("network.step");

    let outcome = export_document(&doc, &path, &kernel).expect("Export sollte gelingen");
    assert!(matches!(
        outcome,
        ExportOutcome::Written {
            format: CadFormat::Step,
            ..
        }
    ));
    let text = std::fs::read_to_string(&path).expect("STEP-Datei sollte lesbar sein");
    assert!(text.starts_with("ISO-10303-21;"));

    let (imported, report) = import_cad(
        &path,
        CadFormat::Step,
        &kernel,
        LoadSettings::default(),
        &Unmonitored,
    )
    .expect("Reimport sollte gelingen");

    // 4 Links + 5 Nodes
    assert_eq!(count_kind(&imported, TopoKind::Solid), 9);
    assert_eq!(count_kind(&imported, TopoKind::Shell), 9);
    assert!(count_kind(&imported, TopoKind::Face) > 9);
    assert_eq!(imported.registry.len(), imported.imported.len());
    assert_eq!(report.shapes, imported.registry.len());
    assert!(matches!(imported.source, DocumentSource::Cad { .. }));

    let root = imported.tree.roots()[0];
    assert_eq!(
        imported.tree.node(root).map(|n| n.label.as_str()),
        Some("STEP Model: network.step")
    );
}

#[test]
fn test_reexport_of_imported_document_uses_main_shape() {
    let kernel = MeshKernel::default();
    let doc = network_doc(&kernel);
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis sollte erstellbar sein");
    let first = dir.path().join("first.stp");
    export_document(&doc, &first, &kernel).expect("Export sollte gelingen");

    let (imported, _) = import_cad(
        &first,
        CadFormat::Step,
        &kernel,
        LoadSettings::default(),
        &Unmonitored,
    )
    .expect("Reimport sollte gelingen");
    assert!(imported.main_shape.is_some());

    let second = dir.path().join("second.step");
    match export_document(&imported, &second, &kernel).expect("Zweiter Export sollte gelingen") {
        ExportOutcome::Written { description, .. } => {
            assert!(!description.is_empty());
        }
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    }
    assert!(second.exists());
}

#[test]
fn test_cad_brep_with_advanced_faces_imports_as_solid() {
    let kernel = MeshKernel::default();
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/cube.step");

    let (doc, report) = import_cad(
        &path,
        CadFormat::Step,
        &kernel,
        LoadSettings::default(),
        &Unmonitored,
    )
    .expect("B-Rep-Würfel sollte importierbar sein");

    assert_eq!(count_kind(&doc, TopoKind::Solid), 1);
    assert_eq!(count_kind(&doc, TopoKind::Shell), 1);
    assert_eq!(count_kind(&doc, TopoKind::Face), 6);
    assert_eq!(count_kind(&doc, TopoKind::Edge), 12);
    assert_eq!(report.shapes, 20);

    let root = doc.tree.roots()[0];
    assert_eq!(
        doc.tree.node(root).map(|n| n.label.as_str()),
        Some("STEP Model: cube.step")
    );
}

#[test]
fn test_open_surface_model_imports_as_shell() {
    let kernel = MeshKernel::default();
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/plate.step");

    let (doc, _) = import_cad(
        &path,
        CadFormat::Step,
        &kernel,
        LoadSettings::default(),
        &Unmonitored,
    )
    .expect("Offene Fläche sollte importierbar sein");

    assert_eq!(count_kind(&doc, TopoKind::Solid), 0);
    assert_eq!(count_kind(&doc, TopoKind::Shell), 1);
    assert_eq!(count_kind(&doc, TopoKind::Face), 1);
    assert_eq!(count_kind(&doc, TopoKind::Edge), 4);
}

#[test]
fn test_failed_step_read_is_import_error_without_document() {
    let kernel = MeshKernel::default();
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis sollte erstellbar sein");
    let path = dir.path().join("garbage.step");
    std::fs::write(&path, "this is not a step file").expect("Datei sollte schreibbar sein");

    let err = import_cad(
        &path,
        CadFormat::Step,
        &kernel,
        LoadSettings::default(),
        &Unmonitored,
    )
    .expect_err("Lesen sollte fehlschlagen");

    match err {
        LoadError::Import(import) => {
            assert_eq!(import.format, CadFormat::Step);
            assert_eq!(import.status, TransferStatus::Fail);
            assert_eq!(import.path, path);
        }
        other => panic!("Unerwarteter Fehler: {other:?}"),
    }
}

#[test]
fn test_iges_is_reported_as_not_supported() {
    let kernel = MeshKernel::default();
    let doc = network_doc(&kernel);
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis sollte erstellbar sein");
    let path = dir.path().join("network.igs");

    let err = export_document(&doc, &path, &kernel).expect_err("IGES-Export sollte scheitern");
    assert_eq!(
        err,
        ExportError::Transfer {
            format: CadFormat::Iges,
            path: path.clone(),
            status: TransferStatus::NotSupported,
        }
    );

    std::fs::write(&path, "S      1\n").expect("Datei sollte schreibbar sein");
    let err = import_cad(
        &path,
        CadFormat::Iges,
        &kernel,
        LoadSettings::default(),
        &Unmonitored,
    )
    .expect_err("IGES-Import sollte scheitern");
    assert!(matches!(
        err,
        LoadError::Import(ref e) if e.status == TransferStatus::NotSupported
    ));
}

#[test]
fn test_unknown_export_extension_is_rejected() {
    let kernel = MeshKernel::default();
    let doc = network_doc(&kernel);
    let err = export_document(&doc, Path::new("network.obj"), &kernel)
        .expect_err("Unbekannte Endung sollte scheitern");
    assert!(matches!(err, ExportError::UnsupportedFormat(_)));
}
