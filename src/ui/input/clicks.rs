//! Klick-Events: Linksklick pickt im Viewport.

use super::{screen_pos_to_viewport, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Linksklicks im Viewport.
    pub(crate) fn handle_clicks(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
            events.push(AppIntent::ViewportClicked {
                screen_pos: screen_pos_to_viewport(pointer_pos, ctx.response),
            });
        }
    }
}
