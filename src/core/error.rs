//! Fehlertypen für Laden, Import und Export.

use crate::kernel::{CadFormat, TransferStatus};
use std::path::PathBuf;

/// Fehler in einem einzelnen Datensatz (Zeile / Network-Element).
///
/// Wird nie propagiert: der Wert wird ersetzt, der Fehler geloggt und im
/// [`LoadReport`](super::LoadReport) gezählt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Wert fehlt oder ist leer
    #[error("Datensatz {record}: '{field}' fehlt, verwende '{fallback}'")]
    Missing {
        /// Datensatz-Index (0-basiert)
        record: usize,
        /// Spalte bzw. Attribut
        field: String,
        /// Ersatzwert
        fallback: String,
    },
    /// Wert ist keine gültige Zahl
    #[error("Datensatz {record}: '{value}' in '{field}' ist keine Zahl, verwende {fallback}")]
    InvalidNumber {
        /// Datensatz-Index (0-basiert)
        record: usize,
        /// Spalte bzw. Attribut
        field: String,
        /// Gelesener Rohwert
        value: String,
        /// Ersatzwert
        fallback: f64,
    },
}

/// CAD-Reader hat keinen Erfolg gemeldet.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{format}-Import von '{}' fehlgeschlagen (Status: {status}){}", .path.display(), detail_suffix(.messages))]
pub struct ImportError {
    /// Dateiformat
    pub format: CadFormat,
    /// Quelldatei
    pub path: PathBuf,
    /// Status des Readers
    pub status: TransferStatus,
    /// Meldungen des Readers
    pub messages: Vec<String>,
}

fn detail_suffix(messages: &[String]) -> String {
    match messages.first() {
        Some(first) => format!(": {first}"),
        None => String::new(),
    }
}

/// Fehler beim Laden eines Dokuments.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Datei existiert nicht
    #[error("Datei nicht gefunden: {}", .0.display())]
    FileNotFound(PathBuf),
    /// Dateiendung wird nicht unterstützt
    #[error("Nicht unterstütztes Dateiformat: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Datei ist syntaktisch fehlerhaft (z.B. kein wohlgeformtes XML)
    #[error("Fehlerhafte Datei {}: {message}", .path.display())]
    Malformed {
        /// Quelldatei
        path: PathBuf,
        /// Beschreibung des Fehlers
        message: String,
    },
    /// CAD-Import fehlgeschlagen
    #[error(transparent)]
    Import(#[from] ImportError),
    /// Vom Benutzer abgebrochen
    #[error("Laden abgebrochen")]
    Cancelled,
    /// Alles andere
    #[error("Unerwarteter Fehler: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl LoadError {
    /// Abbruch ist kein Fehler im eigentlichen Sinne.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoadError::Cancelled)
    }
}

/// Fehler beim Export.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    /// Dateiendung passt zu keinem Exportformat
    #[error("Unbekanntes Exportformat: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Writer hat keinen Erfolg gemeldet
    #[error("{format}-Export nach '{}' fehlgeschlagen (Status: {status})", .path.display())]
    Transfer {
        /// Zielformat
        format: CadFormat,
        /// Zieldatei
        path: PathBuf,
        /// Status des Writers
        status: TransferStatus,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_message_contains_status_and_detail() {
        let err = ImportError {
            format: CadFormat::Step,
            path: PathBuf::from("/tmp/broken.step"),
            status: TransferStatus::Fail,
            messages: vec!["Kein DATA-Abschnitt gefunden".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("STEP-Import"));
        assert!(msg.contains("RetFail"));
        assert!(msg.contains("Kein DATA-Abschnitt"));
    }

    #[test]
    fn test_load_error_wraps_import_error() {
        let err: LoadError = ImportError {
            format: CadFormat::Iges,
            path: PathBuf::from("a.igs"),
            status: TransferStatus::NotSupported,
            messages: Vec::new(),
        }
        .into();
        assert!(matches!(err, LoadError::Import(_)));
        assert!(!err.is_cancelled());
        assert!(LoadError::Cancelled.is_cancelled());
    }
}
