//! Lightweight per-frame representations for the render layer.

use crate::projectile::{ExplosionParams, Owner, PoolKind, Projectile};

#[derive(Debug, Clone, Copy)]
pub struct ProjectileRep {
    pub id: u32,
    pub owner: Owner,
    pub bucket: PoolKind,
    pub pos: [f32; 3],
    pub vel: [f32; 3],
    pub damage: i32,
    pub radius_m: f32,
    pub stun_s: f32,
    pub explosion: Option<ExplosionParams>,
    pub color: [f32; 3],
    pub spin: f32,
}

pub(crate) fn rep(p: &Projectile) -> ProjectileRep {
    ProjectileRep {
        id: p.id.0,
        owner: p.owner,
        bucket: p.bucket,
        pos: [p.pos.x, p.pos.y, p.pos.z],
        vel: [p.vel.x, p.vel.y, p.vel.z],
        damage: p.damage,
        radius_m: p.radius_m,
        stun_s: p.stun_s,
        explosion: p.explosion,
        color: p.color,
        spin: p.spin,
    }
}
