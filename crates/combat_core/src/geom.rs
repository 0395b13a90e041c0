//! Small geometry helpers reusable by systems.

use glam::Vec3;

/// Parametric entry of segment `[p0, p1]` into a sphere. Returns the smallest
/// root in `[0, 1]`, `Some(0.0)` when the start point is already inside, and
/// `None` on a miss. Near-zero-length segments degrade to a point test.
#[inline]
pub fn segment_sphere_enter_t(p0: Vec3, p1: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let d = p1 - p0;
    let m = p0 - center;
    let r2 = radius * radius;
    if m.length_squared() <= r2 {
        return Some(0.0);
    }
    let a = d.dot(d);
    if a <= 1e-12 {
        return None;
    }
    let b = m.dot(d);
    let c = m.length_squared() - r2;
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let t = (-b - disc.sqrt()) / a;
    (0.0..=1.0).contains(&t).then_some(t)
}
