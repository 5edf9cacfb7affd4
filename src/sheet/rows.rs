//! Zeilen → Link-Datensätze mit Ersatzwerten für fehlerhafte Zellen.

use super::columns::{Column, HeaderMap};
use super::reader::SheetTable;
use crate::core::{
    LinkRecord, LoadError, LoadMonitor, LoadReport, ParseError, RecordStore, DEFAULT_SECTION,
};
use glam::DVec3;

/// Liest eine Zeile und sammelt ersetzte Werte.
struct RowReader<'a> {
    index: usize,
    row: &'a [String],
    headers: &'a HeaderMap,
    errors: Vec<ParseError>,
}

impl<'a> RowReader<'a> {
    fn text(&mut self, column: Column, fallback: impl FnOnce() -> String) -> String {
        match self.headers.cell(self.row, column) {
            Some(value) => value.to_string(),
            None => {
                let fallback = fallback();
                self.errors.push(ParseError::Missing {
                    record: self.index,
                    field: column.header().to_string(),
                    fallback: fallback.clone(),
                });
                fallback
            }
        }
    }

    fn optional_text(&self, column: Column) -> String {
        self.headers
            .cell(self.row, column)
            .unwrap_or_default()
            .to_string()
    }

    fn number(&mut self, column: Column) -> f64 {
        let Some(raw) = self.headers.cell(self.row, column) else {
            self.errors.push(ParseError::Missing {
                record: self.index,
                field: column.header().to_string(),
                fallback: "0".to_string(),
            });
            return 0.0;
        };
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                self.errors.push(ParseError::InvalidNumber {
                    record: self.index,
                    field: column.header().to_string(),
                    value: raw.to_string(),
                    fallback: 0.0,
                });
                0.0
            }
        }
    }

    fn point(&mut self, x: Column, y: Column, z: Column) -> DVec3 {
        DVec3::new(self.number(x), self.number(y), self.number(z))
    }
}

/// Wandelt eine einzelne Zeile in einen Link um; Ersatzwerte landen in `errors`.
pub fn parse_row(
    index: usize,
    row: &[String],
    headers: &HeaderMap,
    errors: &mut Vec<ParseError>,
) -> LinkRecord {
    let mut reader = RowReader {
        index,
        row,
        headers,
        errors: Vec::new(),
    };

    let name = reader.text(Column::LinkName, || format!("Link_{index}"));
    let origin_ref = reader.text(Column::RefOrigine, || format!("Origin_{index}"));
    let origin_pos = reader.point(Column::XOrigine, Column::YOrigine, Column::ZOrigine);
    let end_ref = reader.text(Column::RefExtremite, || format!("Extremite_{index}"));
    let end_pos = reader.point(Column::XExtremite, Column::YExtremite, Column::ZExtremite);

    let mut link = LinkRecord::new(name, origin_ref, origin_pos, end_ref, end_pos);
    link.length = reader.number(Column::Length);
    link.density = reader.number(Column::Density);
    link.safety = reader.optional_text(Column::Safety);
    link.route = reader.optional_text(Column::Route);
    link.action_number = reader.optional_text(Column::ActionNumber);
    link.section = reader.text(Column::Section, || DEFAULT_SECTION.to_string());

    errors.append(&mut reader.errors);
    link
}

/// Überträgt alle Zeilen in einen neuen Record Store.
///
/// Prüft vor jeder Zeile auf Abbruch. Zeilen ohne jeden Inhalt werden
/// übersprungen.
pub fn records_from_table(
    table: &SheetTable,
    monitor: &dyn LoadMonitor,
    report: &mut LoadReport,
) -> Result<RecordStore, LoadError> {
    let headers = HeaderMap::from_header(&table.header);
    let missing = headers.missing();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|c| c.header()).collect();
        log::warn!("Spalten fehlen in der Kopfzeile: {}", names.join(", "));
    }

    let mut store = RecordStore::new();
    monitor.begin("Rows", table.rows.len());
    for (index, row) in table.rows.iter().enumerate() {
        monitor.advance()?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            log::debug!("Zeile {} ist leer, übersprungen", index);
            continue;
        }

        let mut errors = Vec::new();
        let link = parse_row(index, row, &headers, &mut errors);
        for error in &errors {
            log::warn!("{}", error);
        }
        report.parse_errors.extend(errors);
        store.push_link(link);
    }

    report.links = store.link_count();
    report.nodes = store.node_count();
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{JobProgress, Unmonitored};

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

    #[test]
    fn test_complete_row_is_parsed_verbatim() {
        let table = SheetTable::from_rows(
            HEADER,
            &[&[
                "W1", "A", "1.5", "2", "-3", "B", "4", "5", "6", "7.25", "0.5", "S1", "R2",
                "AN-3", "Cabin",
            ]],
        );
        let mut report = LoadReport::default();
        let store = records_from_table(&table, &Unmonitored, &mut report)
            .expect("Tabelle sollte ohne Fehler geladen werden");

        let link = store.link(0).expect("Link 0 existiert");
        assert_eq!(link.name, "W1");
        assert_eq!(link.origin_pos, DVec3::new(1.5, 2.0, -3.0));
        assert_eq!(link.end_ref, "B");
        assert_eq!(link.length, 7.25);
        assert_eq!(link.action_number, "AN-3");
        assert_eq!(link.section, "Cabin");
        assert!(report.parse_errors.is_empty());
        assert_eq!((report.links, report.nodes), (1, 2));
    }

    #[test]
    fn test_defaults_replace_missing_and_invalid_cells() {
        let table = SheetTable::from_rows(
            &["refOrigine", "Xorigine"],
            &[&["", "abc"], &["A", "1"]],
        );
        let mut report = LoadReport::default();
        let store = records_from_table(&table, &Unmonitored, &mut report)
            .expect("Tabelle sollte ohne Fehler geladen werden");

        let first = store.link(0).expect("Link 0 existiert");
        assert_eq!(first.name, "Link_0");
        assert_eq!(first.origin_ref, "Origin_0");
        assert_eq!(first.end_ref, "Extremite_0");
        assert_eq!(first.origin_pos, DVec3::ZERO);
        assert_eq!(first.section, DEFAULT_SECTION);
        assert!(first.safety.is_empty());
        assert!(report.parse_errors.iter().any(|e| matches!(
            e,
            ParseError::InvalidNumber { record: 0, value, .. } if value == "abc"
        )));
        assert_eq!(store.link(1).map(|l| l.name.as_str()), Some("Link_1"));
    }

    #[test]
    fn test_shared_reference_yields_distinct_nodes() {
        let table = SheetTable::from_rows(
            &["Link Name", "refOrigine", "RefExtremite"],
            &[&["L0", "A", "B"], &["L1", "C", "D"], &["L2", "A", "E"]],
        );
        let mut report = LoadReport::default();
        let store = records_from_table(&table, &Unmonitored, &mut report)
            .expect("Tabelle sollte ohne Fehler geladen werden");

        assert_eq!(store.link_count(), 3);
        assert_eq!(store.node_count(), 5);
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let table = SheetTable::from_rows(&["Link Name"], &[&["  "], &["L"]]);
        let mut report = LoadReport::default();
        let store = records_from_table(&table, &Unmonitored, &mut report)
            .expect("Tabelle sollte ohne Fehler geladen werden");
        assert_eq!(store.link_count(), 1);
    }

    #[test]
    fn test_cancel_aborts_with_cancelled() {
        let table = SheetTable::from_rows(&["Link Name"], &[&["L0"], &["L1"]]);
        let progress = JobProgress::new();
        progress.request_cancel();
        let result = records_from_table(&table, &progress, &mut LoadReport::default());
        assert!(matches!(result, Err(LoadError::Cancelled)));
    }
}
