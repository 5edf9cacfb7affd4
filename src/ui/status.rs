//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(state.ui.status_message.as_str());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(name) = state.document.display_name() {
                    ui.label(format!("Datei: {}", name));
                    ui.separator();
                }

                if state.node_count() + state.link_count() > 0 {
                    ui.label(format!(
                        "Nodes: {} | Links: {} | Shapes: {}",
                        state.node_count(),
                        state.link_count(),
                        state.shape_count()
                    ));
                } else if state.shape_count() > 0 {
                    ui.label(format!("Shapes: {}", state.shape_count()));
                } else {
                    ui.label("No file loaded");
                }
            });
        });
    });
}
