use crate::app::AppIntent;

/// Zeigt eine Fehlermeldung als modales Fenster.
pub fn show_error_dialog(ctx: &egui::Context, message: Option<&str>) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = message else {
        return events;
    };

    egui::Window::new("Fehler")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(message);
                ui.add_space(10.0);

                if ui.button("OK").clicked() {
                    events.push(AppIntent::ErrorDismissed);
                }
            });
        });

    events
}
