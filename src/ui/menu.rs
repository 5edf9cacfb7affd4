//! Top-Menü (File, Edit, View).

use crate::app::{AppIntent, AppState};
use crate::core::ViewPreset;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let loading = state.is_loading();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open...").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                let can_export = !loading && !state.document.registry.is_empty();
                if ui
                    .add_enabled(can_export, egui::Button::new("Export..."))
                    .clicked()
                {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(
                        !state.selection.is_idle(),
                        egui::Button::new("Clear Selection (Esc)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::ClearSelectionRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                for (label, preset) in [
                    ("Front", ViewPreset::Front),
                    ("Top", ViewPreset::Top),
                    ("Right", ViewPreset::Right),
                    ("Iso", ViewPreset::Iso),
                ] {
                    if ui.button(label).clicked() {
                        events.push(AppIntent::ViewPresetRequested { preset });
                        ui.close();
                    }
                }

                ui.separator();

                if ui.button("Fit All").clicked() {
                    events.push(AppIntent::FitAllRequested);
                    ui.close();
                }
                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }
                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
