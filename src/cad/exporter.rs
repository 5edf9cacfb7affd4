//! CAD-Export des aktuellen Dokuments.

use crate::core::{Document, ExportError, Identifier};
use crate::kernel::{CadFormat, CadWriter, GeometryKernel, Shape, TransferStatus};
use std::path::Path;

/// Was exportiert wird
#[derive(Debug, Clone)]
pub struct ExportSelection {
    /// Zu exportierende Shapes
    pub shapes: Vec<Shape>,
    /// Beschreibung für Dialoge und Log
    pub description: String,
    /// `true`, wenn `shapes` genau das importierte Root-Shape ist
    pub is_main_shape: bool,
}

/// Ergebnis eines Exports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Datei geschrieben
    Written {
        /// Zielformat
        format: CadFormat,
        /// Beschreibung des Inhalts
        description: String,
    },
    /// Dokument enthält keine Shapes
    NothingToExport,
}

/// Wählt die Export-Quelle: Root-Shape, sonst importierte Sub-Shapes, sonst Links und Nodes.
pub fn export_selection(doc: &Document) -> Option<ExportSelection> {
    if let Some(main) = &doc.main_shape {
        return Some(ExportSelection {
            shapes: vec![main.clone()],
            description: "main imported model".into(),
            is_main_shape: true,
        });
    }

    let imported: Vec<Shape> = doc
        .registry
        .iter()
        .filter(|entry| entry.id.is_imported())
        .map(|entry| entry.shape.clone())
        .collect();
    if !imported.is_empty() {
        return Some(ExportSelection {
            description: format!("{} imported shapes", imported.len()),
            shapes: imported,
            is_main_shape: false,
        });
    }

    let mut links = Vec::new();
    let mut nodes = Vec::new();
    for entry in doc.registry.iter() {
        match entry.id {
            Identifier::Link(_) => links.push(entry.shape.clone()),
            Identifier::Node(_) => nodes.push(entry.shape.clone()),
            Identifier::Imported(_) => {}
        }
    }
    if links.is_empty() && nodes.is_empty() {
        return None;
    }
    let description = format!("{} links and {} nodes", links.len(), nodes.len());
    links.extend(nodes);
    Some(ExportSelection {
        shapes: links,
        description,
        is_main_shape: false,
    })
}

/// Exportiert das Dokument; das Format folgt der Dateiendung.
///
/// Mehrere Shapes (oder ein einzelnes, das nicht das Root-Shape ist) werden
/// vor dem Schreiben in einen Compound gepackt.
pub fn export_document<K: GeometryKernel + CadWriter + ?Sized>(
    doc: &Document,
    path: &Path,
    kernel: &K,
) -> Result<ExportOutcome, ExportError> {
    let format =
        CadFormat::from_path(path).ok_or_else(|| ExportError::UnsupportedFormat(path.to_path_buf()))?;
    if !kernel.can_write(format) {
        log::warn!("{}-Export vom Kernel nicht unterstützt", format);
        return Err(ExportError::Transfer {
            format,
            path: path.to_path_buf(),
            status: TransferStatus::NotSupported,
        });
    }

    let Some(selection) = export_selection(doc) else {
        log::warn!("Keine Shapes zum Exportieren");
        return Ok(ExportOutcome::NothingToExport);
    };

    let shape = match selection.shapes.as_slice() {
        [single] if selection.is_main_shape => single.clone(),
        shapes => kernel.make_compound(shapes),
    };

    log::info!(
        "{}-Export ({}) nach {}",
        format,
        selection.description,
        path.display()
    );
    let status = kernel.write(&shape, path, format);
    if !status.is_done() {
        return Err(ExportError::Transfer {
            format,
            path: path.to_path_buf(),
            status,
        });
    }
    Ok(ExportOutcome::Written {
        format,
        description: selection.description,
    })
}
