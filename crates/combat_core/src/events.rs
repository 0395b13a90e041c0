//! Frame event bus and optional direct hit hooks.
//!
//! Events own copies of their payload (`Vec3` + `ProjectileRep`), so a
//! handler can never alias live simulation state. Hooks are fallible; a
//! failing hook is logged and the frame continues.

use crate::actor::ActorId;
use crate::snapshot::ProjectileRep;
use glam::Vec3;

#[derive(Debug, Clone)]
pub enum CombatEvent {
    ProjectileHitWall {
        pos: Vec3,
        proj: ProjectileRep,
    },
    PlayerHitMonster {
        pos: Vec3,
        monster: ActorId,
        proj: ProjectileRep,
    },
    MonsterHitPlayer {
        pos: Vec3,
        proj: ProjectileRep,
    },
    ProjectileHitDevice {
        pos: Vec3,
        kind: String,
        device: u64,
        proj: ProjectileRep,
    },
    NoiseEmitted {
        pos: Vec3,
        radius_m: f32,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct MonsterHit {
    pub pos: Vec3,
    pub monster: ActorId,
    pub proj: ProjectileRep,
}

#[derive(Debug, Clone, Copy)]
pub struct PlayerHit {
    pub pos: Vec3,
    pub proj: ProjectileRep,
}

pub type MonsterHitFn = Box<dyn FnMut(&MonsterHit) -> anyhow::Result<()>>;
pub type PlayerHitFn = Box<dyn FnMut(&PlayerHit) -> anyhow::Result<()>>;

/// Optional direct callbacks fired in addition to the event bus.
#[derive(Default)]
pub struct Hooks {
    pub on_player_hit_monster: Option<MonsterHitFn>,
    pub on_monster_hit_player: Option<PlayerHitFn>,
}

impl Hooks {
    pub(crate) fn fire_player_hit_monster(&mut self, evt: &MonsterHit) {
        if let Some(cb) = self.on_player_hit_monster.as_mut()
            && let Err(e) = cb(evt)
        {
            log::warn!("combat: on_player_hit_monster hook failed: {e:#}");
        }
    }

    pub(crate) fn fire_monster_hit_player(&mut self, evt: &PlayerHit) {
        if let Some(cb) = self.on_monster_hit_player.as_mut()
            && let Err(e) = cb(evt)
        {
            log::warn!("combat: on_monster_hit_player hook failed: {e:#}");
        }
    }
}
