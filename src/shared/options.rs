//! Zentrale Konfiguration für den AirNet Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{LoadSettings, PrimitiveRadii, ShapePalette};
use crate::kernel::Tessellation;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "airnet_viewer.toml";

// ── Primitive ───────────────────────────────────────────────────────

/// Kugelradius der Nodes.
pub const NODE_RADIUS: f64 = 40.0;
/// Zylinderradius der Links.
pub const LINK_RADIUS: f64 = 30.0;
/// Segmente entlang des Umfangs.
pub const TESSELLATION_SEGMENTS: u32 = 16;
/// Breitenringe der Kugeln.
pub const TESSELLATION_RINGS: u32 = 8;

// ── Farben ──────────────────────────────────────────────────────────

/// Node-Kugeln (RGBA: Rot).
pub const NODE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Link-Zylinder (RGBA: Blau).
pub const LINK_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Importierte Sub-Shapes (RGBA: Hellgrau).
pub const IMPORTED_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
/// Hervorgehobene Nodes (RGBA: Grün).
pub const NODE_HIGHLIGHT_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Hervorgehobene Links und importierte Shapes (RGBA: Gelb).
pub const SHAPE_HIGHLIGHT_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Viewport-Hintergrund.
pub const BACKGROUND_COLOR: [f32; 4] = [0.12, 0.12, 0.14, 1.0];

// ── Kamera ──────────────────────────────────────────────────────────

/// Orbit-Geschwindigkeit in Grad pro Pixel.
pub const ORBIT_DEG_PER_PIXEL: f32 = 0.4;
/// Zoom-Faktor pro Mausrad-Schritt.
pub const SCROLL_ZOOM_STEP: f32 = 1.15;
/// Zoom-Faktor für Menü-Buttons.
pub const BUTTON_ZOOM_STEP: f32 = 1.5;

// ── Picking ─────────────────────────────────────────────────────────

/// Pick-Toleranz für kantenförmige Shapes in Screen-Pixeln.
pub const PICK_TOLERANCE_PX: f32 = 6.0;

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `airnet_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Primitive ───────────────────────────────────────────────
    /// Kugelradius der Nodes
    pub node_radius: f64,
    /// Zylinderradius der Links
    pub link_radius: f64,
    /// Segmente entlang des Umfangs
    pub tessellation_segments: u32,
    /// Breitenringe der Kugeln
    pub tessellation_rings: u32,

    // ── Farben ──────────────────────────────────────────────────
    /// Node-Kugeln
    pub node_color: [f32; 4],
    /// Link-Zylinder
    pub link_color: [f32; 4],
    /// Importierte Sub-Shapes
    pub imported_color: [f32; 4],
    /// Hervorgehobene Nodes
    pub node_highlight_color: [f32; 4],
    /// Hervorgehobene Links und importierte Shapes
    pub shape_highlight_color: [f32; 4],
    /// Viewport-Hintergrund
    pub background_color: [f32; 4],

    // ── Kamera ──────────────────────────────────────────────────
    /// Orbit-Geschwindigkeit in Grad pro Pixel
    pub orbit_deg_per_pixel: f32,
    /// Zoom-Faktor pro Mausrad-Schritt
    pub scroll_zoom_step: f32,
    /// Zoom-Faktor für Menü-Buttons
    pub button_zoom_step: f32,

    // ── Picking ─────────────────────────────────────────────────
    /// Pick-Toleranz in Screen-Pixeln
    pub pick_tolerance_px: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            node_radius: NODE_RADIUS,
            link_radius: LINK_RADIUS,
            tessellation_segments: TESSELLATION_SEGMENTS,
            tessellation_rings: TESSELLATION_RINGS,

            node_color: NODE_COLOR,
            link_color: LINK_COLOR,
            imported_color: IMPORTED_COLOR,
            node_highlight_color: NODE_HIGHLIGHT_COLOR,
            shape_highlight_color: SHAPE_HIGHLIGHT_COLOR,
            background_color: BACKGROUND_COLOR,

            orbit_deg_per_pixel: ORBIT_DEG_PER_PIXEL,
            scroll_zoom_step: SCROLL_ZOOM_STEP,
            button_zoom_step: BUTTON_ZOOM_STEP,

            pick_tolerance_px: PICK_TOLERANCE_PX,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("airnet_viewer"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Farben für die Shape Registry.
    pub fn palette(&self) -> ShapePalette {
        ShapePalette {
            node_default: self.node_color,
            link_default: self.link_color,
            imported_default: self.imported_color,
            node_highlight: self.node_highlight_color,
            shape_highlight: self.shape_highlight_color,
        }
    }

    /// Auflösung der facettierten Primitive.
    pub fn tessellation(&self) -> Tessellation {
        Tessellation {
            segments: self.tessellation_segments,
            rings: self.tessellation_rings,
        }
    }

    /// Einstellungen für den nächsten Ladevorgang.
    pub fn load_settings(&self) -> LoadSettings {
        LoadSettings {
            palette: self.palette(),
            radii: PrimitiveRadii {
                node: self.node_radius,
                link: self.link_radius,
            },
        }
    }

    /// Orbit-Geschwindigkeit in Radiant pro Pixel.
    pub fn orbit_rad_per_pixel(&self) -> f64 {
        (self.orbit_deg_per_pixel as f64).to_radians()
    }
}
