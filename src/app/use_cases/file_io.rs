//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (Laden, Export) laufen hier zusammen.

use crate::app::loader::{load_document, LoadJob, LoadResult};
use crate::app::AppState;
use crate::cad::ExportOutcome;
use crate::core::{LoadReport, Unmonitored};
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Export-Dialog über UI-State.
pub fn request_export_file(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Räumt den aktuellen Zustand vor einem neuen Ladevorgang ab.
///
/// Ein noch laufender Job wird abgebrochen und verworfen.
fn begin_load(state: &mut AppState) {
    if let Some(job) = state.load_job.take() {
        log::info!("Vorheriger Lade-Job wird verworfen: {}", job.path().display());
        job.cancel();
    }
    state.selection.reset();
    state.document.clear();
    state.document.registry.set_palette(state.options.palette());
    state.ui.clear_selection_info();
    state.ui.current_file_path = None;
    state.last_report = None;
}

/// Startet das Laden einer Datei als Hintergrund-Job.
///
/// Das aktuelle Dokument wird sofort geleert; das neue erscheint erst,
/// wenn [`poll_load`] das Ergebnis abholt.
pub fn start_load(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    begin_load(state);
    state.ui.status_message = format!("Loading {}...", file_label(&path));
    let job = LoadJob::spawn(
        path,
        Arc::clone(&state.kernel),
        state.options.load_settings(),
    )?;
    state.load_job = Some(job);
    Ok(())
}

/// Lädt eine Datei synchron (Startdatei, Tests).
pub fn load_file_now(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    begin_load(state);
    log::info!("Lade Datei: {}", path.display());
    let result = load_document(
        &path,
        state.kernel.as_ref(),
        state.options.load_settings(),
        &Unmonitored,
    );
    finish_load(state, path, result)
}

/// Fordert den Abbruch des laufenden Jobs an.
pub fn cancel_load(state: &mut AppState) {
    if let Some(job) = &state.load_job {
        job.cancel();
        state.ui.status_message = "Cancelling...".into();
        log::info!("Abbruch angefordert: {}", job.path().display());
    }
}

/// Holt das Ergebnis eines fertigen Jobs ab und übernimmt es.
///
/// Gibt `Ok(true)` zurück, wenn ein Job in diesem Aufruf beendet wurde.
pub fn poll_load(state: &mut AppState) -> anyhow::Result<bool> {
    let Some(job) = state.load_job.as_mut() else {
        return Ok(false);
    };
    let Some(result) = job.poll() else {
        return Ok(false);
    };
    let path = job.path().to_path_buf();
    state.load_job = None;
    finish_load(state, path, result)?;
    Ok(true)
}

fn load_summary(name: &str, report: &LoadReport) -> String {
    let mut summary = if report.links > 0 || report.nodes > 0 {
        format!(
            "Loaded {}: {} nodes, {} links",
            name, report.nodes, report.links
        )
    } else {
        format!("Loaded {}: {} shapes", name, report.shapes)
    };
    if !report.parse_errors.is_empty() {
        summary.push_str(&format!(", {} values replaced", report.parse_errors.len()));
    }
    if report.skipped_links > 0 {
        summary.push_str(&format!(", {} links without geometry", report.skipped_links));
    }
    summary
}

/// Übernimmt ein Ladeergebnis in den State.
///
/// Abbruch ist kein Fehler und lässt das Dokument leer. Andere Fehler
/// lassen das Dokument ebenfalls leer und werden an den Aufrufer gegeben.
fn finish_load(state: &mut AppState, path: PathBuf, result: LoadResult) -> anyhow::Result<()> {
    let name = file_label(&path);
    match result {
        Ok((doc, report)) => {
            state.document.replace_with(doc);
            let summary = load_summary(&name, &report);
            log::info!("{}", summary);
            state.ui.status_message = summary;
            state.ui.current_file_path = Some(path);
            state.last_report = Some(report);
            super::camera::fit_all(state);
            Ok(())
        }
        Err(e) if e.is_cancelled() => {
            log::info!("Laden abgebrochen: {}", path.display());
            state.ui.status_message = "Loading cancelled".into();
            Ok(())
        }
        Err(e) => {
            state.ui.status_message = format!("Failed to load {}", name);
            Err(e.into())
        }
    }
}

/// Exportiert das aktuelle Dokument; das Format folgt der Dateiendung.
pub fn export_document(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let outcome = crate::cad::export_document(&state.document, &path, state.kernel.as_ref())?;
    state.ui.status_message = match outcome {
        ExportOutcome::Written {
            format,
            description,
        } => format!(
            "Exported {} as {} to {}",
            description,
            format,
            file_label(&path)
        ),
        ExportOutcome::NothingToExport => "No shapes to export".into(),
    };
    log::info!("{}", state.ui.status_message);
    Ok(())
}
