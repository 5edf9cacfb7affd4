//! Handler für Datei-Operationen (Öffnen, Laden, Export).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::file_io::request_open_file(state);
}

/// Öffnet den Export-Dialog.
pub fn request_export(state: &mut AppState) {
    use_cases::file_io::request_export_file(state);
}

/// Startet das Laden im Hintergrund.
pub fn start_load(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::start_load(state, path)
}

/// Lädt synchron.
pub fn load_now(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::load_file_now(state, path)
}

/// Bricht den laufenden Ladevorgang ab.
pub fn cancel_load(state: &mut AppState) {
    use_cases::file_io::cancel_load(state);
}

/// Exportiert das aktuelle Dokument.
pub fn export(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::export_document(state, path)
}
