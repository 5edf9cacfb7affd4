//! Geometrie-Kernel: Topologie-Handles, Primitive, CAD-Lese-/Schreibfähigkeit.
//!
//! Der Rest der Anwendung spricht ausschließlich über die Traits
//! [`GeometryKernel`], [`CadReader`] und [`CadWriter`] mit dem Kernel.
//! [`MeshKernel`] ist die eingebaute Implementierung (facettierte Primitive,
//! STEP über `ruststep`/`truck`).

mod facets;
mod mesh_kernel;
mod shape;
pub mod step;

pub use facets::FacetBuilder;
pub use mesh_kernel::{MeshKernel, Tessellation};
pub use shape::{Geometry, Shape, ShapeKey, TopoKind};

use glam::DVec3;
use std::fmt;
use std::path::Path;

/// Fehler beim Erzeugen von Primitiven
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KernelError {
    /// Radius ist nicht positiv oder nicht endlich
    #[error("Ungültiger Radius: {0}")]
    InvalidRadius(f64),
    /// Zylinderachse hat Länge 0 (oder ist nicht endlich)
    #[error("Degenerierte Achse (Höhe {height})")]
    DegenerateAxis {
        /// Gewünschte Höhe
        height: f64,
    },
    /// Position enthält NaN/Inf
    #[error("Ungültige Position: {0}")]
    InvalidPosition(DVec3),
}

/// Unterstützte CAD-Austauschformate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CadFormat {
    /// ISO 10303-21 (STEP)
    Step,
    /// IGES
    Iges,
}

impl CadFormat {
    /// Ermittelt das Format anhand der Dateiendung (`.step/.stp`, `.iges/.igs`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "step" | "stp" => Some(CadFormat::Step),
            "iges" | "igs" => Some(CadFormat::Iges),
            _ => None,
        }
    }

    /// Alle Formate, in Dialog-Reihenfolge.
    pub const ALL: [CadFormat; 2] = [CadFormat::Step, CadFormat::Iges];

    /// Standard-Dateiendung für Speicherdialoge.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            CadFormat::Step => &["step", "stp"],
            CadFormat::Iges => &["iges", "igs"],
        }
    }
}

impl fmt::Display for CadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CadFormat::Step => f.write_str("STEP"),
            CadFormat::Iges => f.write_str("IGES"),
        }
    }
}

/// Ergebnis-Status einer Lese- oder Schreiboperation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStatus {
    /// Erfolgreich
    Done,
    /// Nichts zu übertragen (leere Datei / leeres Shape)
    Void,
    /// Datei konnte nicht gelesen/geschrieben werden
    Error,
    /// Inhalt fehlerhaft, Transfer abgebrochen
    Fail,
    /// Format wird vom Kernel nicht unterstützt
    NotSupported,
}

impl TransferStatus {
    /// Gibt `true` zurück, wenn der Transfer erfolgreich war.
    pub fn is_done(self) -> bool {
        self == TransferStatus::Done
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TransferStatus::Done => "RetDone",
            TransferStatus::Void => "RetVoid",
            TransferStatus::Error => "RetError",
            TransferStatus::Fail => "RetFail",
            TransferStatus::NotSupported => "NotSupported",
        };
        f.write_str(text)
    }
}

/// Ergebnis von [`CadReader::read`]
#[derive(Debug, Clone)]
pub struct ReadOutcome {
    /// Root-Shape (mehrere Roots werden zu einem Compound zusammengefasst)
    pub shape: Option<Shape>,
    /// Status des Lesevorgangs
    pub status: TransferStatus,
    /// Meldungen des Readers (Warnungen, Fehlertexte)
    pub messages: Vec<String>,
}

impl ReadOutcome {
    /// Fehlgeschlagenes Lesen mit Meldung.
    pub fn failed(status: TransferStatus, message: impl Into<String>) -> Self {
        Self {
            shape: None,
            status,
            messages: vec![message.into()],
        }
    }
}

/// Erzeugt Primitive und Compounds.
pub trait GeometryKernel: Send + Sync {
    /// Kugel um `center`.
    fn make_sphere(&self, center: DVec3, radius: f64) -> Result<Shape, KernelError>;

    /// Zylinder ab `base` entlang `axis` (wird normiert) mit Höhe `height`.
    fn make_cylinder(
        &self,
        base: DVec3,
        axis: DVec3,
        radius: f64,
        height: f64,
    ) -> Result<Shape, KernelError>;

    /// Fasst Shapes zu einem Compound zusammen.
    fn make_compound(&self, shapes: &[Shape]) -> Shape {
        Shape::compound(shapes.to_vec())
    }
}

/// Liest CAD-Dateien in ein Root-Shape.
pub trait CadReader: Send + Sync {
    /// Liest `path` im angegebenen Format.
    fn read(&self, path: &Path, format: CadFormat) -> ReadOutcome;

    /// Gibt `true` zurück, wenn der Reader das Format lesen kann.
    fn can_read(&self, _format: CadFormat) -> bool {
        true
    }
}

/// Schreibt ein Shape als CAD-Datei.
pub trait CadWriter: Send + Sync {
    /// Schreibt `shape` nach `path` im angegebenen Format.
    fn write(&self, shape: &Shape, path: &Path, format: CadFormat) -> TransferStatus;

    /// Gibt `true` zurück, wenn der Writer das Format schreiben kann.
    fn can_write(&self, _format: CadFormat) -> bool {
        true
    }
}

/// Vollständiger Kernel, wie ihn die Anwendung benötigt.
pub trait ViewerKernel: GeometryKernel + CadReader + CadWriter {}

impl<T: GeometryKernel + CadReader + CadWriter> ViewerKernel for T {}
