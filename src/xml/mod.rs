//! Netzwerk-XML-Import.
//!
//! Unterstützt `Net`, `MultiDeviceNet` und `TwoDeviceNet` als Netz-Container
//! mit `SubNet` → `Segement` → `Network` → `StartPoint`/`EndPoint`.

pub mod network;

pub use network::{parse_network_into, NET_TAGS};

use crate::core::{
    register_network_primitives, Document, DocumentSource, LoadError, LoadMonitor, LoadReport,
    LoadSettings,
};
use crate::kernel::GeometryKernel;
use std::path::Path;

/// Gibt `true` zurück für `.xml`-Dateien.
pub fn is_xml_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}

/// Baut ein Dokument aus XML-Text.
pub fn document_from_xml<K: GeometryKernel + ?Sized>(
    content: &str,
    path: &Path,
    kernel: &K,
    settings: LoadSettings,
    monitor: &dyn LoadMonitor,
) -> Result<(Document, LoadReport), LoadError> {
    let mut report = LoadReport::default();
    let mut doc = Document::new(settings.palette);
    parse_network_into(&mut doc, content, path, monitor, &mut report)?;
    register_network_primitives(&mut doc, kernel, settings.radii, monitor, &mut report)?;
    doc.source = DocumentSource::NetworkXml(path.to_path_buf());
    Ok((doc, report))
}

/// Liest eine Netzwerk-XML-Datei und baut das Dokument.
pub fn load_network_xml<K: GeometryKernel + ?Sized>(
    path: &Path,
    kernel: &K,
    settings: LoadSettings,
    monitor: &dyn LoadMonitor,
) -> Result<(Document, LoadReport), LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    log::info!("Lade Netzwerk-XML: {}", path.display());
    document_from_xml(&content, path, kernel, settings, monitor)
}
