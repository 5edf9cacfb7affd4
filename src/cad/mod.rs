//! Import/Export von CAD-Dateien (STEP, IGES) über die Kernel-Traits.

pub mod exporter;
pub mod importer;

pub use exporter::{export_document, export_selection, ExportOutcome, ExportSelection};
pub use importer::{import_cad, imported_id, unique_subshapes, EXPLODED_KINDS};
