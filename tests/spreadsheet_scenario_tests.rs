use airnet_viewer::core::{
    DocumentSource, Identifier, LoadError, LoadMonitor, LoadSettings, SelectionController,
    SelectionState, Unmonitored,
};
use airnet_viewer::sheet::{document_from_table, SheetTable};
use airnet_viewer::MeshKernel;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

const HEADER: &[&str] = &[
    "Link Name",
    "refOrigine",
    "Xorigine",
    "Yorigine",
    "Zorigine",
    "RefExtremite",
    "Xextremite",
    "Yextremite",
    "Zextremite",
    "Length",
    "Density",
    "Safety",
    "Route",
    "Action Number",
    "Section",
];

fn source() -> DocumentSource {
    DocumentSource::Spreadsheet(PathBuf::from("harness.xlsx"))
}

/// Bricht beim `cancel_at`-ten Schritt ab.
struct CancelAfter {
    steps: AtomicUsize,
    cancel_at: usize,
}

impl CancelAfter {
    fn new(cancel_at: usize) -> Self {
        Self {
            steps: AtomicUsize::new(0),
            cancel_at,
        }
    }
}

impl LoadMonitor for CancelAfter {
    fn begin(&self, _phase: &str, _total: usize) {}

    fn advance(&self) -> Result<(), LoadError> {
        let step = self.steps.fetch_add(1, Ordering::Relaxed) + 1;
        if step >= self.cancel_at {
            Err(LoadError::Cancelled)
        } else {
            Ok(())
        }
    }
}

fn three_rows() -> SheetTable {
    SheetTable::from_rows(
        HEADER,
        &[
            &[
                "W1", "A", "0", "0", "0", "B", "100", "0", "0", "100", "0.5", "S1", "R1", "10",
                "Cabin",
            ],
            &[
                "W2", "C", "0", "200", "0", "D", "100", "200", "0", "100", "0.5", "S1", "R1", "11",
                "Cabin",
            ],
            &[
                "W3", "A", "1.5", "-2.25", "3.125", "E", "0", "300", "0", "301", "0.75", "S2",
                "R2", "12", "Cargo",
            ],
        ],
    )
}

#[test]
fn test_shared_reference_yields_one_node_per_distinct_ref() {
    let (doc, report) = document_from_table(
        &three_rows(),
        source(),
        &MeshKernel::default(),
        LoadSettings::default(),
        &Unmonitored,
    )
    .expect("Tabelle sollte ladbar sein");

    assert_eq!(doc.records.link_count(), 3);
    assert_eq!(doc.records.node_count(), 5);
    let refs: Vec<&str> = doc.records.nodes().map(|n| n.reference.as_str()).collect();
    assert_eq!(refs, vec!["A", "B", "C", "D", "E"]);
    assert_eq!(doc.records.node_links("A").to_vec(), vec![0, 2]);
    // Erste Position gewinnt
    let a = doc.records.node(0).expect("Node A");
    assert_eq!(a.position, glam::DVec3::ZERO);

    assert_eq!(report.links, 3);
    assert!(report.parse_errors.is_empty());
}

#[test]
fn test_every_record_has_one_leaf_and_one_registry_entry() {
    let (doc, _) = document_from_table(
        &three_rows(),
        source(),
        &MeshKernel::default(),
        LoadSettings::default(),
        &Unmonitored,
    )
    .expect("Tabelle sollte ladbar sein");

    let ids: Vec<Identifier> = (0..doc.records.link_count())
        .map(Identifier::Link)
        .chain((0..doc.records.node_count()).map(Identifier::Node))
        .collect();
    for id in &ids {
        assert!(doc.tree.leaf_for(id).is_some(), "Leaf fehlt für {id}");
        assert!(doc.registry.contains(id), "Registry-Eintrag fehlt für {id}");
    }
    assert_eq!(doc.registry.len(), ids.len());
    assert_eq!(doc.tree.leaf_count(), ids.len());
}

#[test]
fn test_clicking_link_two_highlights_only_that_shape_and_shows_endpoints() {
    let (mut doc, _) = document_from_table(
        &three_rows(),
        source(),
        &MeshKernel::default(),
        LoadSettings::default(),
        &Unmonitored,
    )
    .expect("Tabelle sollte ladbar sein");
    let mut selection = SelectionController::new();

    let leaf = doc
        .tree
        .leaf_for(&Identifier::Link(2))
        .expect("Leaf für Link 2");
    let change = selection.tree_click(&mut doc, leaf);

    assert_eq!(doc.registry.highlighted_ids(), vec![Identifier::Link(2)]);
    assert_eq!(
        selection.state(),
        &SelectionState::Selected {
            ids: vec![Identifier::Link(2)],
            node: Some(leaf),
        }
    );

    let info = match change {
        airnet_viewer::core::SelectionChange::Selected { info, .. } => info,
        other => panic!("Unerwartete Änderung: {other:?}"),
    };
    assert!(info.body.contains("Origin Coordinates: X=1.5, Y=-2.25, Z=3.125"));
    assert!(info.body.contains("Extremite Coordinates: X=0, Y=300, Z=0"));
    assert!(info.body.contains("Section: Cargo"));
}

#[test]
fn test_cancel_at_row_fifty_of_hundred_rolls_back_everything() {
    let names: Vec<String> = (0..100).map(|i| format!("W{i}")).collect();
    let origins: Vec<String> = (0..100).map(|i| format!("N{i}")).collect();
    let ends: Vec<String> = (0..100).map(|i| format!("N{}", i + 1)).collect();
    let xs: Vec<String> = (0..=100).map(|i| (i * 10).to_string()).collect();

    let rows: Vec<Vec<&str>> = (0..100)
        .map(|i| {
            vec![
                names[i].as_str(),
                origins[i].as_str(),
                xs[i].as_str(),
                "0",
                "0",
                ends[i].as_str(),
                xs[i + 1].as_str(),
                "0",
                "0",
            ]
        })
        .collect();
    let row_refs: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
    let table = SheetTable::from_rows(&HEADER[..9], &row_refs);

    let monitor = CancelAfter::new(50);
    let result = document_from_table(
        &table,
        source(),
        &MeshKernel::default(),
        LoadSettings::default(),
        &monitor,
    );

    // Kein Teil-Dokument: der Abbruch liefert nur den Fehler
    assert!(matches!(result, Err(LoadError::Cancelled)));
    assert_eq!(monitor.steps.load(Ordering::Relaxed), 50);
}
