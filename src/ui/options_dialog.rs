//! Optionen-Dialog für Primitive, Farben, Kamera und Picking.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Primitive ───────────────────────────────────
                    ui.collapsing("Primitive", |ui| {
                        ui.label("Wirkt ab dem nächsten Laden.");
                        ui.horizontal(|ui| {
                            ui.label("Node-Radius:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.node_radius)
                                        .range(0.1..=10_000.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Link-Radius:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.link_radius)
                                        .range(0.1..=10_000.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Segmente:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.tessellation_segments).range(3..=64))
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Ringe:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.tessellation_rings).range(2..=32))
                                .changed();
                        });
                    });

                    // ── Farben ──────────────────────────────────────
                    ui.collapsing("Farben", |ui| {
                        changed |= color_edit(ui, "Nodes:", &mut opts.node_color);
                        changed |= color_edit(ui, "Links:", &mut opts.link_color);
                        changed |= color_edit(ui, "Importiert:", &mut opts.imported_color);
                        changed |= color_edit(ui, "Node selektiert:", &mut opts.node_highlight_color);
                        changed |=
                            color_edit(ui, "Shape selektiert:", &mut opts.shape_highlight_color);
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Orbit (°/px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.orbit_deg_per_pixel)
                                        .range(0.05..=5.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Scroll-Zoom-Faktor:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.scroll_zoom_step)
                                        .range(1.01..=3.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Button-Zoom-Faktor:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.button_zoom_step)
                                        .range(1.01..=5.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                    });

                    // ── Picking ─────────────────────────────────────
                    ui.collapsing("Picking", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Kanten-Toleranz (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.pick_tolerance_px)
                                        .range(0.0..=50.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
