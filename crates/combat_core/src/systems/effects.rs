//! Impact/explosion lifecycle: capped spawn, distance cull, fade, release.
//!
//! Effects are pooled like projectiles. A spawn is refused when its kind's
//! active cap is reached or the position is beyond render distance from the
//! player; active effects fade linearly and grow as they fade.

use data_runtime::configs::effects::EffectsTuning;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Impact,
    Explosion,
}

#[derive(Debug, Clone)]
pub struct Effect {
    pub kind: EffectKind,
    pub pos: Vec3,
    pub life_s: f32,
    pub max_life_s: f32,
    pub color: [f32; 3],
    pub base_scale: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Per-spawn brightness/size jitter, seeded for determinism.
    pub intensity: f32,
}

impl Effect {
    fn idle(kind: EffectKind) -> Self {
        Self {
            kind,
            pos: Vec3::ZERO,
            life_s: 0.0,
            max_life_s: 0.0,
            color: [1.0, 1.0, 1.0],
            base_scale: 0.0,
            scale: 0.0,
            opacity: 0.0,
            intensity: 1.0,
        }
    }
}

/// Renderer-facing view of one active effect.
#[derive(Debug, Clone, Copy)]
pub struct EffectRep {
    pub kind: EffectKind,
    pub pos: [f32; 3],
    pub color: [f32; 3],
    pub scale: f32,
    pub opacity: f32,
    pub intensity: f32,
}

pub struct EffectsSim {
    tuning: EffectsTuning,
    impacts: Vec<Effect>,
    explosions: Vec<Effect>,
    free_impacts: Vec<Effect>,
    free_explosions: Vec<Effect>,
    rng: SmallRng,
}

impl EffectsSim {
    pub fn new(tuning: EffectsTuning) -> Self {
        let rng = SmallRng::seed_from_u64(tuning.seed);
        Self {
            tuning,
            impacts: Vec::new(),
            explosions: Vec::new(),
            free_impacts: Vec::new(),
            free_explosions: Vec::new(),
            rng,
        }
    }

    /// Spawn a wall/actor impact flash. Returns false when capped or culled.
    pub fn spawn_impact(&mut self, pos: Vec3, color: [f32; 3], player_pos: Vec3) -> bool {
        if self.impacts.len() >= self.tuning.max_impacts {
            metrics::counter!("effects.rejected_total", "reason" => "cap").increment(1);
            return false;
        }
        if !self.within_render_distance(pos, player_pos) {
            metrics::counter!("effects.rejected_total", "reason" => "distance").increment(1);
            return false;
        }
        let mut e = self
            .free_impacts
            .pop()
            .unwrap_or_else(|| Effect::idle(EffectKind::Impact));
        let life = self.tuning.impact_life_s;
        e.pos = pos;
        e.life_s = life;
        e.max_life_s = life;
        e.color = color;
        e.base_scale = self.tuning.impact_scale_m;
        e.scale = e.base_scale;
        e.opacity = 1.0;
        e.intensity = self.rng.random_range(0.85..1.15);
        self.impacts.push(e);
        metrics::counter!("effects.spawned_total", "kind" => "impact").increment(1);
        true
    }

    /// Spawn an explosion. `radius_m` scales the visual; pass 0 for the
    /// tuned default.
    pub fn spawn_explosion(
        &mut self,
        pos: Vec3,
        color: [f32; 3],
        radius_m: f32,
        player_pos: Vec3,
    ) -> bool {
        if self.explosions.len() >= self.tuning.max_explosions {
            metrics::counter!("effects.rejected_total", "reason" => "cap").increment(1);
            return false;
        }
        if !self.within_render_distance(pos, player_pos) {
            metrics::counter!("effects.rejected_total", "reason" => "distance").increment(1);
            return false;
        }
        let mut e = self
            .free_explosions
            .pop()
            .unwrap_or_else(|| Effect::idle(EffectKind::Explosion));
        let life = self.tuning.explosion_life_s;
        e.pos = pos;
        e.life_s = life;
        e.max_life_s = life;
        e.color = color;
        e.base_scale = if radius_m > 0.0 {
            radius_m
        } else {
            self.tuning.explosion_scale_m
        };
        e.scale = e.base_scale;
        e.opacity = 1.0;
        e.intensity = self.rng.random_range(0.85..1.15);
        self.explosions.push(e);
        metrics::counter!("effects.spawned_total", "kind" => "explosion").increment(1);
        true
    }

    fn within_render_distance(&self, pos: Vec3, player_pos: Vec3) -> bool {
        let r = self.tuning.render_distance_m;
        pos.distance_squared(player_pos) <= r * r
    }

    /// Age every active effect: opacity decays linearly, scale grows with
    /// fade progress; spent effects return to their freelist.
    pub fn update(&mut self, dt: f32) {
        let growth = self.tuning.scale_growth;
        Self::fade(&mut self.impacts, &mut self.free_impacts, self.tuning.max_impacts, growth, dt);
        Self::fade(
            &mut self.explosions,
            &mut self.free_explosions,
            self.tuning.max_explosions,
            growth,
            dt,
        );
    }

    fn fade(active: &mut Vec<Effect>, free: &mut Vec<Effect>, cap: usize, growth: f32, dt: f32) {
        let mut i = active.len();
        while i > 0 {
            i -= 1;
            active[i].life_s -= dt;
            if active[i].life_s <= 0.0 {
                let e = active.swap_remove(i);
                if free.len() < cap {
                    free.push(e);
                }
                continue;
            }
            let e = &mut active[i];
            let fade = 1.0 - e.life_s / e.max_life_s;
            e.opacity = (1.0 - fade).clamp(0.0, 1.0);
            e.scale = e.base_scale * (1.0 + growth * fade);
        }
    }

    pub fn active_impacts(&self) -> usize {
        self.impacts.len()
    }

    pub fn active_explosions(&self) -> usize {
        self.explosions.len()
    }

    pub fn snapshot(&self) -> Vec<EffectRep> {
        self.impacts
            .iter()
            .chain(self.explosions.iter())
            .map(|e| EffectRep {
                kind: e.kind,
                pos: [e.pos.x, e.pos.y, e.pos.z],
                color: e.color,
                scale: e.scale,
                opacity: e.opacity,
                intensity: e.intensity,
            })
            .collect()
    }
}
