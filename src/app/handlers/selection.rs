//! Handler für Selektion aus Tree und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::TreeNodeId;

/// Tree-Node angeklickt.
pub fn select_tree_node(state: &mut AppState, node: TreeNodeId) {
    use_cases::selection::select_tree_node(state, node);
}

/// Viewport-Pick an Pixelposition.
pub fn pick_at(state: &mut AppState, screen_pos: glam::Vec2) {
    use_cases::selection::pick_at(state, screen_pos);
}

/// Selektion aufheben.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
