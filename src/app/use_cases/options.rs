//! Use-Cases für Laufzeit-Optionen.

use crate::app::AppState;
use crate::kernel::MeshKernel;
use crate::shared::ViewerOptions;
use std::sync::Arc;

/// Wendet Optionen auf den laufenden State an.
///
/// Farben wirken sofort; Radien und Auflösung gelten ab dem nächsten Laden.
pub fn apply_to_state(state: &mut AppState, options: ViewerOptions) {
    let tessellation_changed = options.tessellation() != state.options.tessellation();
    state.options = options;
    if tessellation_changed {
        state.kernel = Arc::new(MeshKernel::new(state.options.tessellation()));
        log::info!("Primitiv-Auflösung geändert, gilt ab dem nächsten Laden");
    }
    state
        .document
        .registry
        .set_palette(state.options.palette());
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: ViewerOptions) -> anyhow::Result<()> {
    apply_to_state(state, options);
    let path = ViewerOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, ViewerOptions::default())
}
