//! Continuous-collision projectile engine for the maze shooter.
//!
//! Projectiles sweep a segment each step: tile walls are tested with a grid
//! DDA walk, actors with a closed-form segment-vs-sphere intersection, so
//! fast shots cannot tunnel thin geometry. Instances are pooled per bucket
//! under per-owner budgets, and far projectiles tick on a coarser LOD step.
//!
//! The host drives everything: one `CombatSim::update(dt, world)` per frame
//! with that frame's `WorldView` snapshot, then drains the event bus.

#![forbid(unsafe_code)]

pub mod actor;
pub mod events;
pub mod geom;
pub mod grid;
pub mod pool;
pub mod projectile;
pub mod snapshot;
pub mod systems;

pub use actor::{ActorId, ExtraHittable, ExtraHittables, MonsterTarget, TileGrid, WorldView};
pub use events::{CombatEvent, Hooks, MonsterHit, PlayerHit};
pub use projectile::{ExplosionParams, Owner, PoolKind, Projectile, ProjectileId};
pub use snapshot::ProjectileRep;
pub use systems::effects::{EffectKind, EffectRep, EffectsSim};

pub use data_runtime::configs::combat::CombatTuning;
pub use data_runtime::configs::effects::EffectsTuning;
pub use data_runtime::specs::weapons::{WeaponClass, WeaponSpec, WeaponSpecDb};

use glam::Vec3;

/// Reasons a spawn request is refused. A refusal mutates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnDenied {
    /// Total live projectiles reached `max_active_projectiles`.
    GlobalCap,
    /// The requesting owner's live count reached its per-owner cap.
    OwnerCap,
    /// Non-finite origin or zero-length direction.
    InvalidInput,
}

impl std::fmt::Display for SpawnDenied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GlobalCap => write!(f, "global projectile cap reached"),
            Self::OwnerCap => write!(f, "owner projectile cap reached"),
            Self::InvalidInput => write!(f, "invalid origin or direction"),
        }
    }
}

/// Per-spawn overrides on top of a weapon spec.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnOverrides {
    pub speed_mps: Option<f32>,
    pub life_s: Option<f32>,
    pub damage: Option<i32>,
    pub radius_m: Option<f32>,
    pub pierce: Option<u8>,
    pub explosion: Option<ExplosionParams>,
    pub stun_s: Option<f32>,
    pub color: Option<[f32; 3]>,
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ActiveCounts {
    pub(crate) player: usize,
    pub(crate) monster: usize,
}

impl ActiveCounts {
    #[inline]
    fn total(&self) -> usize {
        self.player + self.monster
    }
    fn inc(&mut self, owner: Owner) {
        match owner {
            Owner::Player => self.player += 1,
            Owner::Monster => self.monster += 1,
        }
    }
    pub(crate) fn dec(&mut self, owner: Owner) {
        match owner {
            Owner::Player => self.player = self.player.saturating_sub(1),
            Owner::Monster => self.monster = self.monster.saturating_sub(1),
        }
    }
}

pub struct CombatSim {
    pub(crate) tuning: CombatTuning,
    specs: WeaponSpecDb,
    pub(crate) pools: pool::ProjectilePools,
    /// Live projectiles; released instances go back to the pools.
    pub projectiles: Vec<Projectile>,
    pub(crate) counts: ActiveCounts,
    pub(crate) events: Vec<CombatEvent>,
    pub hooks: Hooks,
    next_id: u32,
}

impl CombatSim {
    pub fn new(tuning: CombatTuning, specs: WeaponSpecDb) -> Self {
        let pools = pool::ProjectilePools::new(tuning.pool_capacity);
        Self {
            tuning,
            specs,
            pools,
            projectiles: Vec::new(),
            counts: ActiveCounts::default(),
            events: Vec::new(),
            hooks: Hooks::default(),
            next_id: 1,
        }
    }

    /// Plain bullet from the configured default player weapon.
    pub fn spawn_player_bullet(
        &mut self,
        origin: Vec3,
        dir: Vec3,
    ) -> Result<ProjectileId, SpawnDenied> {
        let spec = match self.specs.get(&self.tuning.default_player_weapon) {
            Some(s) => s.clone(),
            None => {
                log::warn!(
                    "combat: default weapon '{}' missing from spec db, using fallback",
                    self.tuning.default_player_weapon
                );
                WeaponSpec::fallback_bullet()
            }
        };
        self.spawn_inner(Owner::Player, origin, dir, &spec, SpawnOverrides::default())
    }

    /// Fully parameterized player projectile (pierce/explosion/stun/...).
    pub fn spawn_player_projectile(
        &mut self,
        origin: Vec3,
        dir: Vec3,
        spec: &WeaponSpec,
        overrides: SpawnOverrides,
    ) -> Result<ProjectileId, SpawnDenied> {
        self.spawn_inner(Owner::Player, origin, dir, spec, overrides)
    }

    pub fn spawn_monster_bolt(
        &mut self,
        origin: Vec3,
        dir: Vec3,
        spec: &WeaponSpec,
    ) -> Result<ProjectileId, SpawnDenied> {
        self.spawn_inner(Owner::Monster, origin, dir, spec, SpawnOverrides::default())
    }

    fn spawn_inner(
        &mut self,
        owner: Owner,
        origin: Vec3,
        dir: Vec3,
        spec: &WeaponSpec,
        ov: SpawnOverrides,
    ) -> Result<ProjectileId, SpawnDenied> {
        if !origin.is_finite() {
            return Err(SpawnDenied::InvalidInput);
        }
        let dir = dir.normalize_or_zero();
        if dir == Vec3::ZERO {
            return Err(SpawnDenied::InvalidInput);
        }
        self.admit(owner)?;
        // Monsters always draw from the bolt pool; player weapons route by class.
        let bucket = match owner {
            Owner::Monster => PoolKind::Bolt,
            Owner::Player => match spec.class {
                WeaponClass::Grenade => PoolKind::Grenade,
                WeaponClass::Bullet | WeaponClass::Bolt => PoolKind::Bullet,
            },
        };
        let mut p = self.pools.acquire(bucket);
        let id = ProjectileId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        p.id = id;
        p.owner = owner;
        p.pos = origin;
        p.vel = dir * ov.speed_mps.unwrap_or(spec.speed_mps);
        let life = ov.life_s.unwrap_or(spec.life_s);
        p.life_s = life;
        p.max_life_s = life;
        p.damage = ov.damage.unwrap_or(spec.damage);
        p.radius_m = ov.radius_m.unwrap_or(spec.radius_m);
        p.can_hit_monsters = matches!(owner, Owner::Player);
        p.can_hit_player = matches!(owner, Owner::Monster);
        p.pierce_left = ov.pierce.unwrap_or(spec.pierce);
        p.explosion = ov.explosion.or_else(|| {
            (spec.aoe_radius_m > 0.0).then_some(ExplosionParams {
                radius_m: spec.aoe_radius_m,
                damage: spec.aoe_damage,
                color: spec.color,
            })
        });
        p.stun_s = ov.stun_s.unwrap_or(spec.stun_s);
        p.color = ov.color.unwrap_or(spec.color);
        p.spin_rad_s = spec.spin_rad_s;
        self.projectiles.push(p);
        self.counts.inc(owner);
        metrics::counter!("projectiles.spawned_total").increment(1);
        if spec.noise_m > 0.0 {
            self.events.push(CombatEvent::NoiseEmitted {
                pos: origin,
                radius_m: spec.noise_m,
            });
        }
        Ok(id)
    }

    fn admit(&self, owner: Owner) -> Result<(), SpawnDenied> {
        if self.counts.total() >= self.tuning.max_active_projectiles {
            metrics::counter!("projectiles.spawn_rejected_total", "reason" => "global_cap")
                .increment(1);
            return Err(SpawnDenied::GlobalCap);
        }
        let (live, cap) = match owner {
            Owner::Player => (self.counts.player, self.tuning.max_player_projectiles),
            Owner::Monster => (self.counts.monster, self.tuning.max_monster_projectiles),
        };
        if live >= cap {
            metrics::counter!("projectiles.spawn_rejected_total", "reason" => "owner_cap")
                .increment(1);
            return Err(SpawnDenied::OwnerCap);
        }
        Ok(())
    }

    /// Advance every live projectile by `dt` against this frame's world.
    pub fn update(&mut self, dt: f32, world: &mut WorldView) {
        systems::projectiles::step(self, world, dt);
    }

    /// Take this frame's accumulated events.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn live_count(&self, owner: Owner) -> usize {
        match owner {
            Owner::Player => self.counts.player,
            Owner::Monster => self.counts.monster,
        }
    }

    pub fn live_total(&self) -> usize {
        self.counts.total()
    }

    /// Lightweight reps for the render layer.
    pub fn snapshot(&self) -> Vec<ProjectileRep> {
        self.projectiles.iter().map(snapshot::rep).collect()
    }
}
