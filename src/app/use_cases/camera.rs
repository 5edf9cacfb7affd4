//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::ViewPreset;
use glam::DVec3;

/// Rotiert die Kamera um ihr Ziel.
pub fn orbit(state: &mut AppState, delta_yaw: f64, delta_pitch: f64) {
    state.view.camera.orbit(delta_yaw, delta_pitch);
}

/// Verschiebt das Kamera-Ziel um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    let height = state.view.viewport_size[1];
    state.view.camera.pan(delta, height);
}

/// Zoomt um einen Faktor (> 1 nähert an).
pub fn zoom(state: &mut AppState, factor: f64) {
    state.view.camera.zoom_by(factor);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    zoom(state, state.options.button_zoom_step as f64);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    zoom(state, 1.0 / state.options.button_zoom_step as f64);
}

/// Wählt eine vordefinierte Ansicht.
pub fn apply_preset(state: &mut AppState, preset: ViewPreset) {
    state.view.camera.apply_preset(preset);
}

/// Bounding Box aller registrierten Shapes.
pub fn registry_bounds(state: &AppState) -> Option<(DVec3, DVec3)> {
    state
        .document
        .registry
        .iter()
        .filter_map(|entry| entry.shape.bounds())
        .reduce(|(amin, amax), (bmin, bmax)| (amin.min(bmin), amax.max(bmax)))
}

/// Passt die Kamera auf alle Shapes ein.
///
/// Ohne Shapes wird die Kamera zurückgesetzt.
pub fn fit_all(state: &mut AppState) {
    match registry_bounds(state) {
        Some((min, max)) => state.view.camera.fit_bounds(min, max),
        None => state.view.camera = Default::default(),
    }
}
