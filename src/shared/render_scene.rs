//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::{Camera3D, ShapeRegistry};

/// Read-only Daten für einen Render-Frame.
#[derive(Clone, Copy)]
pub struct RenderScene<'a> {
    /// Registrierte Shapes inkl. aktueller Farben
    pub registry: &'a ShapeRegistry,
    /// Kamera-Zustand für diesen Frame
    pub camera: &'a Camera3D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Hintergrundfarbe (RGBA)
    pub background_color: [f32; 4],
}

impl RenderScene<'_> {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn has_shapes(&self) -> bool {
        !self.registry.is_empty()
    }

    /// Redraw-Generation der Registry (Cache-Schlüssel des Renderers).
    pub fn generation(&self) -> u64 {
        self.registry.generation()
    }
}
