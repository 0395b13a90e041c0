//! Frame snapshots of the world consumed by the simulator.
//!
//! The host passes one `WorldView` per `update` call; all collision queries
//! read that single frame's state, so there is nothing to race against.

use anyhow::Result;
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub u32);

/// Static tile geometry. Tiles are addressed on the XZ plane.
pub trait TileGrid {
    fn is_walkable(&self, tx: i32, tz: i32) -> bool;
}

/// One monster as seen by the sweep this frame.
#[derive(Debug, Clone, Copy)]
pub struct MonsterTarget {
    pub id: ActorId,
    pub pos: Vec3,
    /// Declared hit radius; `None` falls back to the tuned default.
    pub radius_m: Option<f32>,
    pub scale: f32,
}

impl MonsterTarget {
    #[inline]
    pub fn declared_radius(&self, fallback_m: f32) -> f32 {
        self.radius_m.unwrap_or(fallback_m) * self.scale
    }
}

/// A host-defined hittable (turret, switch, destructible prop, ...).
#[derive(Debug, Clone)]
pub struct ExtraHittable {
    pub pos: Vec3,
    pub radius_m: f32,
    pub kind: String,
    pub id: u64,
}

/// Provider of extra hittables. A failing provider yields no candidates for
/// the frame; the error never crosses into the simulator.
pub trait ExtraHittables {
    fn collect(&mut self) -> Result<Vec<ExtraHittable>>;
}

pub struct WorldView<'a> {
    pub grid: &'a dyn TileGrid,
    pub monsters: &'a [MonsterTarget],
    pub player_pos: Vec3,
    pub extras: Option<&'a mut dyn ExtraHittables>,
}
