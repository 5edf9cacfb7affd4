//! Liest das erste Arbeitsblatt einer Tabelle als Text-Zellen.

use crate::core::LoadError;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Unterstützte Tabellen-Endungen.
pub const SHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// Kopfzeile und Datenzeilen eines Arbeitsblatts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetTable {
    /// Erste Zeile
    pub header: Vec<String>,
    /// Alle weiteren Zeilen
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Baut eine Tabelle aus String-Slices (Tests, Benchmarks).
    pub fn from_rows(header: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            header: header.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }
}

/// Gibt `true` zurück, wenn die Endung eine Tabelle bezeichnet.
pub fn is_sheet_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SHEET_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext)))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Öffnet die Datei und liest das erste Arbeitsblatt.
pub fn read_table(path: &Path) -> Result<SheetTable, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }
    let malformed = |message: String| LoadError::Malformed {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| malformed(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| malformed("Arbeitsmappe enthält kein Arbeitsblatt".into()))?
        .map_err(|e| malformed(e.to_string()))?;

    let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
    let header = rows.next().unwrap_or_default();
    let rows: Vec<Vec<String>> = rows.collect();
    log::info!(
        "Tabelle gelesen: {} ({} Spalten, {} Zeilen)",
        path.display(),
        header.len(),
        rows.len()
    );
    Ok(SheetTable { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_extensions_case_insensitive() {
        assert!(is_sheet_path(Path::new("net.XLSX")));
        assert!(is_sheet_path(Path::new("net.ods")));
        assert!(!is_sheet_path(Path::new("net.xml")));
        assert!(!is_sheet_path(Path::new("net")));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = read_table(Path::new("/nonexistent/net.xlsx")).expect_err("Datei fehlt");
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }
}
