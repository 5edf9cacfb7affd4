//! Viewport-Input-Handling: Maus-Events, Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks` — Linksklick (Picking)
//! - `pointer_delta` — Orbit/Pan während aktiver Drags
//! - `zoom` — Mausrad-Zoom

mod clicks;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::AppIntent;

/// Art des laufenden Kamera-Drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ViewDragMode {
    #[default]
    None,
    Orbit,
    Pan,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub has_selection: bool,
    pub loading: bool,
}

/// Verwaltet den Input-Zustand für das Viewport (Drag-Modus)
#[derive(Default)]
pub struct InputState {
    pub(crate) drag_mode: ViewDragMode,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            drag_mode: ViewDragMode::None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Tastatur-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        has_selection: bool,
        loading: bool,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            has_selection,
            loading,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(
            ui,
            ctx.has_selection,
            ctx.loading,
        ));

        self.update_drag_mode(&ctx);
        self.handle_clicks(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }

    /// Legt beim Drag-Start fest, ob orbitiert oder verschoben wird.
    fn update_drag_mode(&mut self, ctx: &ViewportContext) {
        if ctx.response.drag_started_by(egui::PointerButton::Secondary) {
            self.drag_mode = ViewDragMode::Orbit;
        } else if ctx.response.drag_started_by(egui::PointerButton::Middle) {
            self.drag_mode = ViewDragMode::Pan;
        }

        let any_drag = ctx.response.dragged_by(egui::PointerButton::Secondary)
            || ctx.response.dragged_by(egui::PointerButton::Middle);
        if !any_drag && !ctx.response.drag_started() {
            self.drag_mode = ViewDragMode::None;
        }
    }
}

/// Rechnet eine Bildschirmposition in Viewport-Pixel (Ursprung oben links) um.
pub(crate) fn screen_pos_to_viewport(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    glam::Vec2::new(local.x, local.y)
}
