//! Info-Panel (rechte Seitenleiste) mit den Details der Selektion.

use crate::app::{AppIntent, AppState};

/// Rendert das Info-Panel und gibt erzeugte Events zurück.
pub fn render_info_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("info_panel")
        .default_width(280.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Details");
            ui.separator();

            if !state.ui.selection.has_info() {
                ui.label("Keine Selektion");
                return;
            }

            if ui.button("Selektion aufheben").clicked() {
                events.push(AppIntent::ClearSelectionRequested);
            }
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let text = egui::RichText::new(&state.ui.selection.info_text).monospace();
                    ui.add(egui::Label::new(text).wrap());
                });
        });

    events
}
