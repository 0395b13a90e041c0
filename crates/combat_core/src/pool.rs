//! Fixed-capacity freelists for projectile reuse.
//!
//! An instance is either pooled here (inactive) or owned by the live list —
//! never both. Ownership transfers wholly on `acquire` and back on `release`.

use crate::projectile::{PoolKind, Projectile};

#[derive(Debug)]
pub struct ProjectilePools {
    capacity: usize,
    bullets: Vec<Projectile>,
    grenades: Vec<Projectile>,
    bolts: Vec<Projectile>,
}

impl ProjectilePools {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            bullets: Vec::new(),
            grenades: Vec::new(),
            bolts: Vec::new(),
        }
    }

    fn stack_mut(&mut self, bucket: PoolKind) -> &mut Vec<Projectile> {
        match bucket {
            PoolKind::Bullet => &mut self.bullets,
            PoolKind::Grenade => &mut self.grenades,
            PoolKind::Bolt => &mut self.bolts,
        }
    }

    /// Pop a pooled instance for the bucket, or construct a fresh one.
    pub fn acquire(&mut self, bucket: PoolKind) -> Projectile {
        self.stack_mut(bucket)
            .pop()
            .unwrap_or_else(|| Projectile::idle(bucket))
    }

    /// Reset every transient field and return the instance to its bucket;
    /// releases beyond the bucket's capacity are dropped.
    pub fn release(&mut self, mut p: Projectile) {
        p.reset();
        let cap = self.capacity;
        let stack = self.stack_mut(p.bucket);
        if stack.len() < cap {
            stack.push(p);
        }
    }

    pub fn pooled(&self, bucket: PoolKind) -> usize {
        match bucket {
            PoolKind::Bullet => self.bullets.len(),
            PoolKind::Grenade => self.grenades.len(),
            PoolKind::Bolt => self.bolts.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorId;
    use crate::projectile::{ExplosionParams, Owner, ProjectileId};
    use glam::vec3;

    #[test]
    fn release_resets_transient_state() {
        let mut pools = ProjectilePools::new(4);
        let mut p = pools.acquire(PoolKind::Bullet);
        p.id = ProjectileId(7);
        p.owner = Owner::Monster;
        p.vel = vec3(1.0, 2.0, 3.0);
        p.pierce_left = 2;
        p.struck.insert(ActorId(9));
        p.explosion = Some(ExplosionParams {
            radius_m: 2.0,
            damage: 30,
            color: [1.0, 0.4, 0.1],
        });
        p.stun_s = 1.0;
        pools.release(p);

        let q = pools.acquire(PoolKind::Bullet);
        assert_eq!(q.vel, glam::Vec3::ZERO);
        assert!(q.struck.is_empty());
        assert_eq!(q.pierce_left, 0);
        assert_eq!(q.owner, Owner::Player);
        assert!(q.explosion.is_none());
        assert_eq!(q.stun_s, 0.0);
    }

    #[test]
    fn releases_beyond_capacity_are_dropped() {
        let mut pools = ProjectilePools::new(2);
        for _ in 0..5 {
            let p = Projectile::idle(PoolKind::Bolt);
            pools.release(p);
        }
        assert_eq!(pools.pooled(PoolKind::Bolt), 2);
    }

    #[test]
    fn buckets_do_not_mix() {
        let mut pools = ProjectilePools::new(4);
        pools.release(Projectile::idle(PoolKind::Grenade));
        assert_eq!(pools.pooled(PoolKind::Grenade), 1);
        assert_eq!(pools.pooled(PoolKind::Bullet), 0);
        let p = pools.acquire(PoolKind::Grenade);
        assert_eq!(p.bucket, PoolKind::Grenade);
        assert_eq!(pools.pooled(PoolKind::Grenade), 0);
    }
}
