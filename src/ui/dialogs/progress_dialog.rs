use crate::app::{AppIntent, LoadJob};

/// Zeigt den Fortschritt eines laufenden Ladevorgangs mit Abbrechen-Button.
pub fn show_progress_dialog(ctx: &egui::Context, job: Option<&LoadJob>) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(job) = job else {
        return events;
    };

    let file_name = job
        .path()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    egui::Window::new("Laden")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.label(format!("Datei: {}", file_name));
            ui.label(job.progress().phase());
            ui.add_space(6.0);

            let (done, total) = job.progress().counts();
            let bar = egui::ProgressBar::new(job.progress().fraction()).show_percentage();
            let bar = if total > 0 {
                bar.text(format!("{done} / {total}"))
            } else {
                bar.animate(true)
            };
            ui.add(bar);
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                let cancelling = job.is_cancel_requested();
                let label = if cancelling { "Wird abgebrochen..." } else { "Abbrechen" };
                if ui
                    .add_enabled(!cancelling, egui::Button::new(label))
                    .clicked()
                {
                    events.push(AppIntent::CancelLoadRequested);
                }
            });
        });

    events
}
