//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ViewPreset;

/// Rotiert die Kamera.
pub fn orbit(state: &mut AppState, delta_yaw: f64, delta_pitch: f64) {
    use_cases::camera::orbit(state, delta_yaw, delta_pitch);
}

/// Verschiebt die Kamera um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt um einen Faktor.
pub fn zoom(state: &mut AppState, factor: f64) {
    use_cases::camera::zoom(state, factor);
}

/// Wählt eine vordefinierte Ansicht.
pub fn apply_preset(state: &mut AppState, preset: ViewPreset) {
    use_cases::camera::apply_preset(state, preset);
}

/// Passt die Kamera auf alle Shapes ein.
pub fn fit_all(state: &mut AppState) {
    use_cases::camera::fit_all(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}
