//! Projectile integration, swept collision queries, and hit resolution.
//!
//! The walk is by index in reverse so a hit branch can release the current
//! slot in place; hit handlers only ever see copies, so the live list is
//! never mutated out from under the loop.

use crate::CombatSim;
use crate::actor::{ActorId, ExtraHittable, WorldView};
use crate::events::{CombatEvent, MonsterHit, PlayerHit};
use crate::{geom, grid, snapshot};
use glam::Vec3;

enum Hit {
    Wall { contact: Vec3 },
    Monster(ActorId),
    Player,
    Device { kind: String, id: u64 },
}

pub(crate) fn step(sim: &mut CombatSim, world: &mut WorldView, dt: f32) {
    let t0 = std::time::Instant::now();
    let tile_m = sim.tuning.tile_size_m;
    let player_r = sim.tuning.player_radius_m;
    let monster_r = sim.tuning.monster_radius_m;
    let nudge = sim.tuning.pierce_nudge_m;
    let lod_far2 = sim.tuning.lod_far_m * sim.tuning.lod_far_m;
    let lod_min_tick = sim.tuning.lod_min_tick_s;

    // One provider call per frame; a failing provider contributes no
    // candidates and the error stops here.
    let extras: Vec<ExtraHittable> = match world.extras.as_mut() {
        Some(provider) => match provider.collect() {
            Ok(v) => v,
            Err(e) => {
                log::warn!("combat: extra-hittables provider failed: {e:#}");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let mut i = sim.projectiles.len();
    while i > 0 {
        i -= 1;
        sim.projectiles[i].life_s -= dt;
        if sim.projectiles[i].life_s <= 0.0 {
            // Expiry is silent: no event, straight back to the pool.
            release_at(sim, i);
            continue;
        }

        // Far projectiles bank time and step once per LOD tick with the
        // banked amount. The coarse step is swept as one segment, not
        // sub-segmented; distant shots trade precision for query count.
        let step_dt = {
            let p = &mut sim.projectiles[i];
            if lod_far2 > 0.0 && p.pos.distance_squared(world.player_pos) > lod_far2 {
                p.lod_accum_s += dt;
                if p.lod_accum_s < lod_min_tick {
                    continue;
                }
                let banked = p.lod_accum_s;
                p.lod_accum_s = 0.0;
                banked
            } else {
                dt
            }
        };

        let (p0, vel) = {
            let p = &sim.projectiles[i];
            (p.pos, p.vel)
        };
        let p1 = p0 + vel * step_dt;

        // Fixed precedence: wall > monster > player > device. Strict `<`
        // keeps the earlier class on exact ties.
        let mut best_t = f32::INFINITY;
        let mut best = None;
        if let Some(w) = grid::sweep_walls(world.grid, p0, p1, tile_m) {
            best_t = w.t;
            best = Some(Hit::Wall { contact: w.contact });
        }
        {
            let p = &sim.projectiles[i];
            if p.can_hit_monsters {
                for m in world.monsters {
                    if p.struck.contains(&m.id) {
                        continue;
                    }
                    let r = m.declared_radius(monster_r).max(p.radius_m);
                    if let Some(t) = geom::segment_sphere_enter_t(p0, p1, m.pos, r)
                        && t < best_t
                    {
                        best_t = t;
                        best = Some(Hit::Monster(m.id));
                    }
                }
            }
            if p.can_hit_player
                && let Some(t) = geom::segment_sphere_enter_t(p0, p1, world.player_pos, player_r)
                && t < best_t
            {
                best_t = t;
                best = Some(Hit::Player);
            }
            for x in &extras {
                if let Some(t) = geom::segment_sphere_enter_t(p0, p1, x.pos, x.radius_m)
                    && t < best_t
                {
                    best_t = t;
                    best = Some(Hit::Device {
                        kind: x.kind.clone(),
                        id: x.id,
                    });
                }
            }
        }

        match best {
            None => {
                let p = &mut sim.projectiles[i];
                p.pos = p1;
                p.spin += p.spin_rad_s * step_dt;
            }
            Some(Hit::Wall { contact }) => {
                let rep = {
                    let p = &mut sim.projectiles[i];
                    p.pos = contact;
                    snapshot::rep(p)
                };
                sim.events.push(CombatEvent::ProjectileHitWall {
                    pos: contact,
                    proj: rep,
                });
                metrics::counter!("projectiles.hits_total", "target" => "wall").increment(1);
                release_at(sim, i);
            }
            Some(Hit::Monster(id)) => {
                let contact = p0 + (p1 - p0) * best_t;
                let rep = {
                    let p = &mut sim.projectiles[i];
                    p.pos = contact;
                    snapshot::rep(p)
                };
                sim.events.push(CombatEvent::PlayerHitMonster {
                    pos: contact,
                    monster: id,
                    proj: rep,
                });
                metrics::counter!("projectiles.hits_total", "target" => "monster").increment(1);
                sim.hooks.fire_player_hit_monster(&MonsterHit {
                    pos: contact,
                    monster: id,
                    proj: rep,
                });
                let p = &mut sim.projectiles[i];
                if p.pierce_left > 0 {
                    // Pass through: mark the target, push just past the
                    // contact so next tick's segment starts outside it.
                    p.pierce_left -= 1;
                    p.struck.insert(id);
                    p.pos = contact + p.vel.normalize_or_zero() * nudge;
                } else {
                    release_at(sim, i);
                }
            }
            Some(Hit::Player) => {
                let contact = p0 + (p1 - p0) * best_t;
                let rep = {
                    let p = &mut sim.projectiles[i];
                    p.pos = contact;
                    snapshot::rep(p)
                };
                sim.events.push(CombatEvent::MonsterHitPlayer {
                    pos: contact,
                    proj: rep,
                });
                metrics::counter!("projectiles.hits_total", "target" => "player").increment(1);
                sim.hooks.fire_monster_hit_player(&PlayerHit {
                    pos: contact,
                    proj: rep,
                });
                release_at(sim, i);
            }
            Some(Hit::Device { kind, id }) => {
                let contact = p0 + (p1 - p0) * best_t;
                let rep = {
                    let p = &mut sim.projectiles[i];
                    p.pos = contact;
                    snapshot::rep(p)
                };
                sim.events.push(CombatEvent::ProjectileHitDevice {
                    pos: contact,
                    kind,
                    device: id,
                    proj: rep,
                });
                metrics::counter!("projectiles.hits_total", "target" => "device").increment(1);
                release_at(sim, i);
            }
        }
    }
    metrics::histogram!("projectiles.update_ms").record(t0.elapsed().as_secs_f64() * 1000.0);
}

fn release_at(sim: &mut CombatSim, i: usize) {
    let p = sim.projectiles.swap_remove(i);
    sim.counts.dec(p.owner);
    sim.pools.release(p);
}
