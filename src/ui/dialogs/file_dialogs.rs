use crate::app::{AppIntent, UiState};
use crate::kernel::{CadFormat, ViewerKernel};
use crate::sheet::SHEET_EXTENSIONS;

const XML_EXTENSIONS: &[&str] = &["xml"];

/// Vorschlag für den Export-Dateinamen aus der geladenen Datei.
fn default_export_name(ui_state: &UiState) -> String {
    ui_state
        .current_file_path
        .as_deref()
        .and_then(|p| p.file_stem())
        .and_then(|n| n.to_str())
        .map(|stem| format!("{stem}.step"))
        .unwrap_or_else(|| "export.step".to_string())
}

/// CAD-Formate, die der Kernel lesen kann.
fn readable_formats(kernel: &dyn ViewerKernel) -> Vec<CadFormat> {
    CadFormat::ALL
        .into_iter()
        .filter(|&f| kernel.can_read(f))
        .collect()
}

/// CAD-Formate, die der Kernel schreiben kann.
fn writable_formats(kernel: &dyn ViewerKernel) -> Vec<CadFormat> {
    CadFormat::ALL
        .into_iter()
        .filter(|&f| kernel.can_write(f))
        .collect()
}

/// Alle Endungen für den Filter "Alle unterstützten Dateien".
fn open_extensions(cad_formats: &[CadFormat]) -> Vec<&'static str> {
    SHEET_EXTENSIONS
        .iter()
        .chain(XML_EXTENSIONS)
        .copied()
        .chain(cad_formats.iter().flat_map(|f| f.extensions().iter().copied()))
        .collect()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
///
/// CAD-Filter werden nur für Formate angeboten, die der Kernel beherrscht.
pub fn handle_file_dialogs(ui_state: &mut UiState, kernel: &dyn ViewerKernel) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Open-Datei-Dialog
    if ui_state.show_file_dialog {
        ui_state.show_file_dialog = false;

        let cad_formats = readable_formats(kernel);
        let all = open_extensions(&cad_formats);
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Alle unterstützten Dateien", all.as_slice())
            .add_filter("Tabellen", SHEET_EXTENSIONS)
            .add_filter("Netzwerk-XML", XML_EXTENSIONS);
        for format in &cad_formats {
            dialog = dialog.add_filter(format.to_string(), format.extensions());
        }

        if let Some(path) = dialog.pick_file() {
            events.push(AppIntent::FileSelected { path });
        }
    }

    // Export-Dialog
    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        let mut dialog = rfd::FileDialog::new().set_file_name(default_export_name(ui_state));
        for format in writable_formats(kernel) {
            dialog = dialog.add_filter(format.to_string(), format.extensions());
        }

        if let Some(path) = dialog.save_file() {
            events.push(AppIntent::ExportPathSelected { path });
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::MeshKernel;
    use std::path::PathBuf;

    #[test]
    fn test_default_export_name_follows_loaded_file() {
        let mut ui_state = UiState::new();
        assert_eq!(default_export_name(&ui_state), "export.step");

        ui_state.current_file_path = Some(PathBuf::from("/data/harness_A320.xlsx"));
        assert_eq!(default_export_name(&ui_state), "harness_A320.step");
    }

    #[test]
    fn test_filters_offer_only_kernel_formats() {
        let kernel = MeshKernel::default();
        assert_eq!(readable_formats(&kernel), vec![CadFormat::Step]);
        assert_eq!(writable_formats(&kernel), vec![CadFormat::Step]);

        let all = open_extensions(&readable_formats(&kernel));
        assert!(all.contains(&"xml"));
        assert!(all.contains(&"stp"));
        assert!(!all.contains(&"igs"));
        assert!(!all.contains(&"iges"));
    }
}
