//! Wall sweep: Amanatides & Woo DDA over XZ maze tiles.
//!
//! Walls are full-height tile columns, so only X/Z participate; the contact
//! point keeps the segment's interpolated Y. The walk guards zero direction
//! components and the starting-inside-solid case.

use crate::actor::TileGrid;
use glam::Vec3;

/// First blocking tile along a swept segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    pub tile: (i32, i32),
    /// Boundary-clamped contact point on the segment.
    pub contact: Vec3,
    /// Parametric position of the contact in `[0, 1]`.
    pub t: f32,
}

/// Walk the tiles crossed by `[p0, p1]` in order and return the first
/// non-walkable one. A non-walkable start tile reports `t = 0` immediately.
pub fn sweep_walls(grid: &dyn TileGrid, p0: Vec3, p1: Vec3, tile_m: f32) -> Option<WallHit> {
    let mut tx = (p0.x / tile_m).floor() as i32;
    let mut tz = (p0.z / tile_m).floor() as i32;
    if !grid.is_walkable(tx, tz) {
        return Some(WallHit {
            tile: (tx, tz),
            contact: p0,
            t: 0.0,
        });
    }
    let d = p1 - p0;
    let step_x = if d.x > 0.0 {
        1
    } else if d.x < 0.0 {
        -1
    } else {
        0
    };
    let step_z = if d.z > 0.0 {
        1
    } else if d.z < 0.0 {
        -1
    } else {
        0
    };
    if step_x == 0 && step_z == 0 {
        return None;
    }
    let inf = f32::INFINITY;
    let next_boundary = |p: f32, dir: i32| -> f32 {
        let f = p / tile_m - (p / tile_m).floor();
        if dir > 0 { 1.0 - f } else { f }
    };
    let mut t_max_x = if step_x == 0 {
        inf
    } else {
        next_boundary(p0.x, step_x) * tile_m / d.x.abs()
    };
    let mut t_max_z = if step_z == 0 {
        inf
    } else {
        next_boundary(p0.z, step_z) * tile_m / d.z.abs()
    };
    let t_delta_x = if step_x == 0 { inf } else { tile_m / d.x.abs() };
    let t_delta_z = if step_z == 0 { inf } else { tile_m / d.z.abs() };

    let end_x = (p1.x / tile_m).floor() as i32;
    let end_z = (p1.z / tile_m).floor() as i32;
    let safety_steps = ((end_x - tx).abs() + (end_z - tz).abs() + 2) as usize;
    for _ in 0..safety_steps {
        // step along the smaller t_max
        let t = if t_max_x <= t_max_z {
            tx += step_x;
            let t = t_max_x;
            t_max_x += t_delta_x;
            t
        } else {
            tz += step_z;
            let t = t_max_z;
            t_max_z += t_delta_z;
            t
        };
        if t > 1.0 {
            return None;
        }
        if !grid.is_walkable(tx, tz) {
            let t = t.clamp(0.0, 1.0);
            return Some(WallHit {
                tile: (tx, tz),
                contact: p0 + d * t,
                t,
            });
        }
    }
    None
}
