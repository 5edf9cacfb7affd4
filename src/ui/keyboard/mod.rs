//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    has_selection: bool,
    loading: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Ctrl+O (Öffnen), Ctrl+E (Export), Escape (Abbrechen / Selektion aufheben)
    let (modifiers, key_o_pressed, key_e_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::E),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenFileRequested);
    }

    if modifiers.command && key_e_pressed {
        events.push(AppIntent::ExportRequested);
    }

    if key_escape_pressed {
        if loading {
            events.push(AppIntent::CancelLoadRequested);
        } else if has_selection {
            events.push(AppIntent::ClearSelectionRequested);
        }
    }

    // F (Alles zeigen), +/- (Zoom)
    let (key_f_pressed, key_plus_pressed, key_minus_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::F),
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
        )
    });

    if !modifiers.command {
        if key_f_pressed {
            events.push(AppIntent::FitAllRequested);
        }
        if key_plus_pressed {
            events.push(AppIntent::ZoomInRequested);
        }
        if key_minus_pressed {
            events.push(AppIntent::ZoomOutRequested);
        }
    }

    events
}
