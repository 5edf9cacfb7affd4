//! Dokument-Kontext: Record Store, Shape Registry und Tree Index eines Ladevorgangs.

use super::{PrimitiveRadii, RecordStore, ShapePalette, ShapeRegistry, TreeIndex};
use crate::kernel::{CadFormat, Shape, TopoKind};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Herkunft des aktuellen Dokuments
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DocumentSource {
    /// Nichts geladen
    #[default]
    Empty,
    /// Tabelle (xlsx/xls/xlsm/ods)
    Spreadsheet(PathBuf),
    /// Netzwerk-XML
    NetworkXml(PathBuf),
    /// Importierte CAD-Datei
    Cad {
        /// Format der Datei
        format: CadFormat,
        /// Quelldatei
        path: PathBuf,
    },
}

impl DocumentSource {
    /// Pfad der Quelldatei (falls vorhanden).
    pub fn path(&self) -> Option<&Path> {
        match self {
            DocumentSource::Empty => None,
            DocumentSource::Spreadsheet(p) | DocumentSource::NetworkXml(p) => Some(p),
            DocumentSource::Cad { path, .. } => Some(path),
        }
    }
}

/// Einstellungen für den Aufbau eines neuen Dokuments
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadSettings {
    /// Farben der Registry
    pub palette: ShapePalette,
    /// Radien der Netzwerk-Primitive
    pub radii: PrimitiveRadii,
}

/// Alles, was zum aktuell geladenen Dokument gehört.
///
/// Wird bei jedem Laden komplett neu aufgebaut und als Ganzes ausgetauscht.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Node- und Link-Datensätze
    pub records: RecordStore,
    /// Darstellbare Shapes
    pub registry: ShapeRegistry,
    /// Hierarchische Sicht
    pub tree: TreeIndex,
    /// Topologie-Art je importiertem Bezeichner
    pub imported: IndexMap<String, TopoKind>,
    /// Root-Shape einer importierten CAD-Datei
    pub main_shape: Option<Shape>,
    /// Herkunft
    pub source: DocumentSource,
}

impl Document {
    /// Erstellt ein leeres Dokument mit der angegebenen Palette.
    pub fn new(palette: ShapePalette) -> Self {
        Self {
            registry: ShapeRegistry::new(palette),
            ..Self::default()
        }
    }

    /// Gibt `true` zurück, wenn nichts geladen ist.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
            && self.registry.is_empty()
            && self.tree.is_empty()
            && self.imported.is_empty()
            && self.main_shape.is_none()
    }

    /// Leert alle Strukturen (Palette bleibt erhalten).
    pub fn clear(&mut self) {
        self.records.clear();
        self.registry.clear();
        self.tree.clear();
        self.imported.clear();
        self.main_shape = None;
        self.source = DocumentSource::Empty;
    }

    /// Ersetzt den Inhalt durch `other`, ohne die Redraw-Generation zurückzusetzen.
    ///
    /// Die Generation des neuen Dokuments wird über die alte gehoben, damit
    /// Render-Caches zuverlässig neu aufgebaut werden.
    pub fn replace_with(&mut self, mut other: Document) {
        let floor = self.registry.generation() + 1;
        other.registry.advance_generation_to(floor);
        *self = other;
    }

    /// Dateiname der Quelle für Titel/Status.
    pub fn display_name(&self) -> Option<String> {
        self.source
            .path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }
}
