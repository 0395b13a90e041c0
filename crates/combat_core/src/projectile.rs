//! Projectile instance data and identity types.

use crate::actor::ActorId;
use glam::Vec3;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectileId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Player,
    Monster,
}

/// Freelist bucket a projectile is pooled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKind {
    Bullet,
    Grenade,
    Bolt,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionParams {
    pub radius_m: f32,
    pub damage: i32,
    pub color: [f32; 3],
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: ProjectileId,
    pub owner: Owner,
    pub bucket: PoolKind,
    pub pos: Vec3,
    pub vel: Vec3,
    pub life_s: f32,
    pub max_life_s: f32,
    pub damage: i32,
    pub radius_m: f32,
    pub can_hit_monsters: bool,
    pub can_hit_player: bool,
    pub pierce_left: u8,
    /// Actors already struck this lifetime; a pierced target never registers twice.
    pub struck: HashSet<ActorId>,
    pub explosion: Option<ExplosionParams>,
    pub stun_s: f32,
    pub color: [f32; 3],
    /// Cosmetic roll; no effect on the swept path.
    pub spin_rad_s: f32,
    pub spin: f32,
    pub lod_accum_s: f32,
}

impl Projectile {
    /// Inert instance as constructed for (or returned to) a pool bucket.
    pub(crate) fn idle(bucket: PoolKind) -> Self {
        Self {
            id: ProjectileId(0),
            owner: Owner::Player,
            bucket,
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
            life_s: 0.0,
            max_life_s: 0.0,
            damage: 0,
            radius_m: 0.0,
            can_hit_monsters: false,
            can_hit_player: false,
            pierce_left: 0,
            struck: HashSet::new(),
            explosion: None,
            stun_s: 0.0,
            color: [1.0, 1.0, 1.0],
            spin_rad_s: 0.0,
            spin: 0.0,
            lod_accum_s: 0.0,
        }
    }

    /// Clear every transient field so nothing from the previous logical
    /// projectile is observable after reacquisition. The hit-set keeps its
    /// allocation; that is the point of pooling.
    pub(crate) fn reset(&mut self) {
        self.id = ProjectileId(0);
        self.owner = Owner::Player;
        self.pos = Vec3::ZERO;
        self.vel = Vec3::ZERO;
        self.life_s = 0.0;
        self.max_life_s = 0.0;
        self.damage = 0;
        self.radius_m = 0.0;
        self.can_hit_monsters = false;
        self.can_hit_player = false;
        self.pierce_left = 0;
        self.struck.clear();
        self.explosion = None;
        self.stun_s = 0.0;
        self.color = [1.0, 1.0, 1.0];
        self.spin_rad_s = 0.0;
        self.spin = 0.0;
        self.lod_accum_s = 0.0;
    }
}
