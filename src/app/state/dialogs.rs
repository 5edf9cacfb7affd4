//! UI- und Dialog-Zustand.

use super::SelectionPanelState;
use crate::core::DEFAULT_STATUS;
use std::path::PathBuf;

/// UI-bezogener Anwendungszustand
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob der Export-Dialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Einzeiliger Statustext
    pub status_message: String,
    /// Info-Panel und Tree-Fokus der aktuellen Selektion
    pub selection: SelectionPanelState,
    /// Pfad der aktuell geladenen Datei
    pub current_file_path: Option<PathBuf>,
    /// Fehlermeldung für das Fehlerfenster
    pub error_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_file_dialog: false,
            show_export_dialog: false,
            status_message: DEFAULT_STATUS.to_string(),
            selection: SelectionPanelState::new(),
            current_file_path: None,
            error_message: None,
        }
    }

    /// Setzt Info-Panel und Status auf den Ruhezustand.
    pub fn clear_selection_info(&mut self) {
        self.selection.clear();
        self.status_message = DEFAULT_STATUS.to_string();
    }

    /// Zeigt eine Fehlermeldung im Fehlerfenster.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_selection_info_resets_panel_and_status() {
        let mut ui = UiState::new();
        ui.selection.info_text = "Link: W101".to_string();
        ui.selection.tree_focus = Some(3);
        ui.status_message = "W101 selektiert".to_string();

        ui.clear_selection_info();

        assert!(!ui.selection.has_info());
        assert!(ui.selection.tree_focus.is_none());
        assert_eq!(ui.status_message, DEFAULT_STATUS);
        assert!(!ui.show_file_dialog);
    }
}
