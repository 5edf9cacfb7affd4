//! Pointer-Delta-Verarbeitung: Kamera-Orbit und Kamera-Pan.

use super::{InputState, ViewDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Maus-Bewegungs-Deltas während eines Kamera-Drags.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }
        let delta = glam::Vec2::new(pointer_delta.x, pointer_delta.y);

        match self.drag_mode {
            ViewDragMode::Orbit if ctx.response.dragged_by(egui::PointerButton::Secondary) => {
                events.push(AppIntent::CameraOrbit { delta });
            }
            ViewDragMode::Pan if ctx.response.dragged_by(egui::PointerButton::Middle) => {
                events.push(AppIntent::CameraPan { delta });
            }
            _ => {}
        }
    }
}
