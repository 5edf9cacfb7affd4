//! Viewport-Picking: Strahl gegen registrierte Shapes.
//!
//! Liefert wie ein Kernel-Pick-Callback die getroffene Geometrie zurück,
//! nicht den Bezeichner. Die Auflösung übernimmt die Registry.

use super::ShapeRegistry;
use crate::kernel::Shape;
use glam::DVec3;

const EPSILON: f64 = 1.0e-9;

/// Möller-Trumbore: Strahlparameter `t` des Treffers, falls vorhanden.
pub fn ray_triangle(origin: DVec3, dir: DVec3, tri: &[DVec3; 3]) -> Option<f64> {
    let e1 = tri[1] - tri[0];
    let e2 = tri[2] - tri[0];
    let p = dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < EPSILON {
        return None;
    }
    let inv = 1.0 / det;
    let s = origin - tri[0];
    let u = s.dot(p) * inv;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = dir.dot(q) * inv;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv;
    (t > EPSILON).then_some(t)
}

/// Slab-Test gegen eine um `pad` vergrößerte Box.
pub fn ray_hits_aabb(origin: DVec3, dir: DVec3, min: DVec3, max: DVec3, pad: f64) -> bool {
    let min = min - DVec3::splat(pad);
    let max = max + DVec3::splat(pad);
    let mut t_near = f64::NEG_INFINITY;
    let mut t_far = f64::INFINITY;
    for axis in 0..3 {
        let (o, d) = (origin[axis], dir[axis]);
        if d.abs() < EPSILON {
            if o < min[axis] || o > max[axis] {
                return false;
            }
            continue;
        }
        let t1 = (min[axis] - o) / d;
        let t2 = (max[axis] - o) / d;
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
        if t_near > t_far {
            return false;
        }
    }
    t_far >= 0.0
}

/// Kleinster Abstand zwischen Strahl und Segment; gibt (Abstand, Strahlparameter) zurück.
pub fn ray_segment_distance(origin: DVec3, dir: DVec3, a: DVec3, b: DVec3) -> (f64, f64) {
    let seg = b - a;
    let w = origin - a;
    let aa = dir.dot(dir);
    let bb = dir.dot(seg);
    let cc = seg.dot(seg);
    let dd = dir.dot(w);
    let ee = seg.dot(w);
    let denom = aa * cc - bb * bb;

    let mut s = if denom.abs() < EPSILON || cc < EPSILON {
        0.0
    } else {
        ((aa * ee - bb * dd) / denom).clamp(0.0, 1.0)
    };
    let mut t = (bb * s - dd) / aa;
    if t < 0.0 {
        t = 0.0;
        s = if cc < EPSILON {
            0.0
        } else {
            (ee / cc).clamp(0.0, 1.0)
        };
    }
    let closest_ray = origin + dir * t;
    let closest_seg = a + seg * s;
    (closest_ray.distance(closest_seg), t)
}

/// Nächster Treffer eines einzelnen Shapes entlang des Strahls.
pub fn hit_distance(shape: &Shape, origin: DVec3, dir: DVec3, edge_tolerance: f64) -> Option<f64> {
    let (min, max) = shape.bounds()?;
    if !ray_hits_aabb(origin, dir, min, max, edge_tolerance) {
        return None;
    }

    let mut best: Option<f64> = None;
    for tri in shape.triangles() {
        if let Some(t) = ray_triangle(origin, dir, &tri) {
            best = Some(best.map_or(t, |b| b.min(t)));
        }
    }
    for [a, b] in shape.free_segments() {
        let (distance, t) = ray_segment_distance(origin, dir, a, b);
        if distance <= edge_tolerance {
            best = Some(best.map_or(t, |b| b.min(t)));
        }
    }
    best
}

/// Nächstes getroffenes Shape unter allen registrierten Einträgen.
///
/// Bei gleichem Abstand gewinnt der später registrierte (spezifischere) Eintrag.
pub fn pick_shape(
    registry: &ShapeRegistry,
    origin: DVec3,
    dir: DVec3,
    edge_tolerance: f64,
) -> Option<Shape> {
    let mut best: Option<(f64, &Shape)> = None;
    for entry in registry.iter() {
        let Some(t) = hit_distance(entry.shape, origin, dir, edge_tolerance) else {
            continue;
        };
        let closer = best.is_none_or(|(current, _)| t <= current + EPSILON * current.max(1.0));
        if closer {
            best = Some((t, entry.shape));
        }
    }
    best.map(|(_, shape)| shape.clone())
}
