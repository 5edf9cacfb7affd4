//! 3D-Orbit-Kamera (Z nach oben) mit Projektion und Pick-Strahl.

use glam::{DVec3, Vec2};

/// Vordefinierte Ansichten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPreset {
    /// Blick entlang +Y
    Front,
    /// Blick von oben
    Top,
    /// Blick entlang -X
    Right,
    /// Isometrische Ansicht
    Iso,
}

/// Orbit-Kamera um einen Zielpunkt
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Zielpunkt, um den rotiert wird
    pub target: DVec3,
    /// Azimut in Radiant (0 = Kamera auf +X)
    pub yaw: f64,
    /// Elevation in Radiant
    pub pitch: f64,
    /// Abstand zum Zielpunkt
    pub distance: f64,
    /// Vertikaler Öffnungswinkel in Radiant
    pub fov_y: f64,
}

impl Camera3D {
    /// Minimaler Abstand zum Ziel.
    pub const DISTANCE_MIN: f64 = 1.0;
    /// Maximaler Abstand zum Ziel.
    pub const DISTANCE_MAX: f64 = 1.0e9;
    /// Maximale Elevation (knapp unter 90°, sonst kippt die Basis).
    pub const PITCH_LIMIT: f64 = 89.9 * std::f64::consts::PI / 180.0;
    /// Punkte näher als dieser Abstand vor der Kamera werden nicht projiziert.
    pub const NEAR: f64 = 1.0e-3;
    /// Randzuschlag bei `fit_bounds`.
    pub const FIT_MARGIN: f64 = 1.1;

    /// Erstellt eine Kamera in isometrischer Ansicht um den Ursprung.
    pub fn new() -> Self {
        let mut camera = Self {
            target: DVec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: 1000.0,
            fov_y: 45f64.to_radians(),
        };
        camera.apply_preset(ViewPreset::Iso);
        camera
    }

    /// Setzt Blickrichtung gemäß Preset (Ziel und Abstand bleiben).
    pub fn apply_preset(&mut self, preset: ViewPreset) {
        let (yaw, pitch) = match preset {
            ViewPreset::Front => (-90f64.to_radians(), 0.0),
            ViewPreset::Top => (-90f64.to_radians(), Self::PITCH_LIMIT),
            ViewPreset::Right => (0.0, 0.0),
            ViewPreset::Iso => (-45f64.to_radians(), 35.264f64.to_radians()),
        };
        self.yaw = yaw;
        self.pitch = pitch;
    }

    /// Richtung vom Ziel zur Kamera.
    fn back(&self) -> DVec3 {
        DVec3::new(
            self.pitch.cos() * self.yaw.cos(),
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
        )
    }

    /// Kameraposition.
    pub fn eye(&self) -> DVec3 {
        self.target + self.back() * self.distance
    }

    /// Orthonormale Basis (forward, right, up).
    pub fn basis(&self) -> (DVec3, DVec3, DVec3) {
        let forward = -self.back();
        let right = forward.cross(DVec3::Z).normalize_or(DVec3::X);
        let up = right.cross(forward);
        (forward, right, up)
    }

    /// Rotiert um das Ziel (Radiant).
    pub fn orbit(&mut self, delta_yaw: f64, delta_pitch: f64) {
        self.yaw = (self.yaw + delta_yaw).rem_euclid(std::f64::consts::TAU);
        self.pitch = (self.pitch + delta_pitch).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    /// Verschiebt das Ziel um eine Bildschirm-Distanz in Pixeln.
    pub fn pan(&mut self, screen_delta: Vec2, viewport_height: f32) {
        let (_, right, up) = self.basis();
        let wpp = self.world_per_pixel(viewport_height);
        self.target += (-right * screen_delta.x as f64 + up * screen_delta.y as f64) * wpp;
    }

    /// Zoomt (Faktor > 1 nähert die Kamera an).
    pub fn zoom_by(&mut self, factor: f64) {
        if factor > 0.0 {
            self.distance =
                (self.distance / factor).clamp(Self::DISTANCE_MIN, Self::DISTANCE_MAX);
        }
    }

    /// Richtet die Kamera so aus, dass die Box komplett sichtbar ist.
    pub fn fit_bounds(&mut self, min: DVec3, max: DVec3) {
        self.target = (min + max) * 0.5;
        let radius = ((max - min).length() * 0.5).max(Self::DISTANCE_MIN);
        self.distance = (radius / (self.fov_y * 0.5).sin() * Self::FIT_MARGIN)
            .clamp(Self::DISTANCE_MIN, Self::DISTANCE_MAX);
    }

    /// Welt-Einheiten pro Pixel in Zielentfernung.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f64 {
        2.0 * self.distance * (self.fov_y * 0.5).tan() / viewport_height.max(1.0) as f64
    }

    /// Projiziert einen Weltpunkt in Viewport-Pixel (Ursprung oben links).
    ///
    /// Gibt zusätzlich die Tiefe entlang der Blickrichtung zurück; `None` hinter der Kamera.
    pub fn project(&self, world: DVec3, viewport: Vec2) -> Option<(Vec2, f64)> {
        let (forward, right, up) = self.basis();
        let rel = world - self.eye();
        let depth = rel.dot(forward);
        if depth <= Self::NEAR {
            return None;
        }
        let f = 1.0 / (self.fov_y * 0.5).tan();
        let aspect = viewport.x.max(1.0) as f64 / viewport.y.max(1.0) as f64;
        let ndc_x = rel.dot(right) * f / (depth * aspect);
        let ndc_y = rel.dot(up) * f / depth;
        let screen = Vec2::new(
            ((ndc_x + 1.0) * 0.5 * viewport.x as f64) as f32,
            ((1.0 - ndc_y) * 0.5 * viewport.y as f64) as f32,
        );
        Some((screen, depth))
    }

    /// Pick-Strahl (Ursprung, normierte Richtung) durch einen Viewport-Pixel.
    pub fn ray_from_screen(&self, screen: Vec2, viewport: Vec2) -> (DVec3, DVec3) {
        let (forward, right, up) = self.basis();
        let w = viewport.x.max(1.0) as f64;
        let h = viewport.y.max(1.0) as f64;
        let ndc_x = screen.x as f64 / w * 2.0 - 1.0;
        let ndc_y = 1.0 - screen.y as f64 / h * 2.0;
        let t = (self.fov_y * 0.5).tan();
        let dir = forward + right * (ndc_x * t * w / h) + up * (ndc_y * t);
        (self.eye(), dir.normalize())
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}
