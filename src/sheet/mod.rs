//! Tabellen-Import (xlsx/xlsm/xls/ods) in ein neues Dokument.
//!
//! Die erste Zeile des ersten Arbeitsblatts ist die Kopfzeile, jede weitere
//! Zeile ein Link.

pub mod columns;
pub mod reader;
pub mod rows;

pub use columns::{Column, HeaderMap};
pub use reader::{is_sheet_path, read_table, SheetTable, SHEET_EXTENSIONS};
pub use rows::{parse_row, records_from_table};

use crate::core::{
    network_tree, register_network_primitives, Document, DocumentSource, LoadError, LoadMonitor,
    LoadReport, LoadSettings,
};
use crate::kernel::GeometryKernel;
use std::path::Path;

/// Baut ein Dokument aus einer bereits gelesenen Tabelle.
///
/// Bei Abbruch wird das halb gebaute Dokument verworfen.
pub fn document_from_table<K: GeometryKernel + ?Sized>(
    table: &SheetTable,
    source: DocumentSource,
    kernel: &K,
    settings: LoadSettings,
    monitor: &dyn LoadMonitor,
) -> Result<(Document, LoadReport), LoadError> {
    let mut report = LoadReport::default();
    let mut doc = Document::new(settings.palette);
    doc.records = records_from_table(table, monitor, &mut report)?;
    register_network_primitives(&mut doc, kernel, settings.radii, monitor, &mut report)?;
    network_tree::build_sheet_tree(&mut doc.tree, &doc.records);
    doc.source = source;
    Ok((doc, report))
}

/// Liest eine Tabellen-Datei und baut das Dokument.
pub fn load_spreadsheet<K: GeometryKernel + ?Sized>(
    path: &Path,
    kernel: &K,
    settings: LoadSettings,
    monitor: &dyn LoadMonitor,
) -> Result<(Document, LoadReport), LoadError> {
    monitor.begin("Reading", 0);
    let table = read_table(path)?;
    document_from_table(
        &table,
        DocumentSource::Spreadsheet(path.to_path_buf()),
        kernel,
        settings,
        monitor,
    )
}
