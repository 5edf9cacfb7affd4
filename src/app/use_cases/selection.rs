//! Use-Cases für Tree-Klicks und Viewport-Picks.

use crate::app::{AppState, UiState};
use crate::core::{pick_shape, SelectionChange};

/// Übernimmt das Ergebnis der Selection-Zustandsmaschine in Info-Panel und Status.
pub fn apply_change(ui: &mut UiState, change: SelectionChange) {
    match change {
        SelectionChange::Selected { info, focus, .. } => {
            ui.selection.info_text = info.body;
            ui.status_message = info.status;
            ui.selection.tree_focus = focus;
        }
        SelectionChange::Deselected => ui.clear_selection_info(),
        SelectionChange::Unchanged => {}
    }
}

/// Tree-Node angeklickt.
pub fn select_tree_node(state: &mut AppState, node: crate::core::TreeNodeId) {
    let change = state.selection.tree_click(&mut state.document, node);
    apply_change(&mut state.ui, change);
}

/// Pickt das vorderste Shape unter dem Cursor.
///
/// Leerer Raum hebt die Selektion auf.
pub fn pick_at(state: &mut AppState, screen_pos: glam::Vec2) {
    let viewport = state.view.viewport();
    let (origin, dir) = state.view.camera.ray_from_screen(screen_pos, viewport);
    let tolerance =
        state.options.pick_tolerance_px as f64 * state.view.camera.world_per_pixel(viewport.y);
    let picked = pick_shape(&state.document.registry, origin, dir, tolerance);
    log::debug!(
        "Pick bei ({:.0}, {:.0}): {}",
        screen_pos.x,
        screen_pos.y,
        if picked.is_some() { "Treffer" } else { "leer" }
    );
    let change = state.selection.pick(&mut state.document, picked.as_ref());
    apply_change(&mut state.ui, change);
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    let change = state.selection.deselect(&mut state.document);
    apply_change(&mut state.ui, change);
}
