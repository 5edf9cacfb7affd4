//! Mausrad-Zoom.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;

/// Pixel Scroll-Delta pro Rad-Rastung.
const PIXELS_PER_SCROLL_STEP: f32 = 50.0;

impl InputState {
    /// Verarbeitet das Mausrad, solange der Zeiger über dem Viewport ist.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.hovered() {
            return;
        }
        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        events.push(AppIntent::CameraScroll {
            steps: scroll / PIXELS_PER_SCROLL_STEP,
        });
    }
}
