//! Spalten der Netzwerk-Tabelle und Zuordnung über die Kopfzeile.

use std::collections::HashMap;

/// Bekannte Spalten (Zuordnung über den Kopfzeilen-Text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    LinkName,
    RefOrigine,
    XOrigine,
    YOrigine,
    ZOrigine,
    RefExtremite,
    XExtremite,
    YExtremite,
    ZExtremite,
    Length,
    Density,
    Safety,
    Route,
    ActionNumber,
    Section,
}

impl Column {
    /// Alle Spalten in kanonischer Reihenfolge.
    pub const ALL: [Column; 15] = [
        Column::LinkName,
        Column::RefOrigine,
        Column::XOrigine,
        Column::YOrigine,
        Column::ZOrigine,
        Column::RefExtremite,
        Column::XExtremite,
        Column::YExtremite,
        Column::ZExtremite,
        Column::Length,
        Column::Density,
        Column::Safety,
        Column::Route,
        Column::ActionNumber,
        Column::Section,
    ];

    /// Kopfzeilen-Text der Spalte.
    pub fn header(self) -> &'static str {
        match self {
            Column::LinkName => "Link Name",
            Column::RefOrigine => "refOrigine",
            Column::XOrigine => "Xorigine",
            Column::YOrigine => "Yorigine",
            Column::ZOrigine => "Zorigine",
            Column::RefExtremite => "RefExtremite",
            Column::XExtremite => "Xextremite",
            Column::YExtremite => "Yextremite",
            Column::ZExtremite => "Zextremite",
            Column::Length => "Length",
            Column::Density => "Density",
            Column::Safety => "Safety",
            Column::Route => "Route",
            Column::ActionNumber => "Action Number",
            Column::Section => "Section",
        }
    }
}

/// Spaltenindex je bekannter Spalte
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    indices: HashMap<Column, usize>,
}

impl HeaderMap {
    /// Ordnet die Kopfzeile zu (getrimmt, erste Fundstelle gewinnt).
    pub fn from_header(header: &[String]) -> Self {
        let mut indices = HashMap::new();
        for (index, text) in header.iter().enumerate() {
            let text = text.trim();
            if let Some(column) = Column::ALL.iter().find(|c| c.header() == text) {
                indices.entry(*column).or_insert(index);
            }
        }
        Self { indices }
    }

    /// Getrimmter, nicht-leerer Zellinhalt einer Spalte.
    pub fn cell<'a>(&self, row: &'a [String], column: Column) -> Option<&'a str> {
        let index = *self.indices.get(&column)?;
        row.get(index)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    /// Spalten ohne Kopfzeilen-Eintrag.
    pub fn missing(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| !self.indices.contains_key(c))
            .collect()
    }
}
