//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene<'_> {
    RenderScene {
        registry: &state.document.registry,
        camera: &state.view.camera,
        viewport_size,
        background_color: state.options.background_color,
    }
}
