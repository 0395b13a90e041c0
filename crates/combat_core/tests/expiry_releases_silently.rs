use combat_core::{
    CombatEvent, CombatSim, CombatTuning, SpawnOverrides, TileGrid, WeaponSpecDb, WorldView,
};
use glam::vec3;

struct Open;
impl TileGrid for Open {
    fn is_walkable(&self, _tx: i32, _tz: i32) -> bool {
        true
    }
}

fn hit_events(events: &[CombatEvent]) -> usize {
    events
        .iter()
        .filter(|e| !matches!(e, CombatEvent::NoiseEmitted { .. }))
        .count()
}

#[test]
fn lifetime_runs_out_with_zero_hit_events() {
    let mut s = CombatSim::new(CombatTuning::default(), WeaponSpecDb::builtin());
    let db = WeaponSpecDb::builtin();
    let spec = db.get("pistol").expect("pistol").clone();
    s.spawn_player_projectile(
        vec3(0.0, 1.0, 0.0),
        vec3(0.0, 0.0, -1.0),
        &spec,
        SpawnOverrides {
            life_s: Some(0.1),
            ..Default::default()
        },
    )
    .expect("spawn");

    let mut world = WorldView {
        grid: &Open,
        monsters: &[],
        player_pos: vec3(0.0, 1.0, 0.0),
        extras: None,
    };
    s.update(0.05, &mut world);
    assert_eq!(s.live_total(), 1, "still alive at half life");
    let first = s.projectiles[0].life_s;
    assert!(first < 0.1, "life strictly decreases");

    s.update(0.05, &mut world);
    assert_eq!(s.live_total(), 0, "expired projectile was released");
    let events = s.drain_events();
    assert_eq!(hit_events(&events), 0, "expiry is not reported as a hit");
}

#[test]
fn reacquired_instance_carries_no_previous_state() {
    // First shot pierces a monster (hit-set becomes non-empty), then dies on
    // a wall; the pooled instance must come back clean for the next shot.
    use combat_core::{ActorId, MonsterTarget};
    use std::collections::HashSet;

    struct Maze {
        solid: HashSet<(i32, i32)>,
    }
    impl TileGrid for Maze {
        fn is_walkable(&self, tx: i32, tz: i32) -> bool {
            !self.solid.contains(&(tx, tz))
        }
    }
    let maze = Maze {
        solid: [(0, -4)].into_iter().collect(),
    };
    let mut s = CombatSim::new(CombatTuning::default(), WeaponSpecDb::builtin());
    let db = WeaponSpecDb::builtin();
    let spec = db.get("pistol").expect("pistol").clone();
    s.spawn_player_projectile(
        vec3(0.0, 1.0, 0.0),
        vec3(0.0, 0.0, -1.0),
        &spec,
        SpawnOverrides {
            pierce: Some(1),
            stun_s: Some(2.0),
            ..Default::default()
        },
    )
    .expect("spawn");
    let monsters = [MonsterTarget {
        id: ActorId(1),
        pos: vec3(0.0, 1.0, -2.0),
        radius_m: Some(0.3),
        scale: 1.0,
    }];
    for _ in 0..20 {
        let mut world = WorldView {
            grid: &maze,
            monsters: &monsters,
            player_pos: vec3(0.0, 1.0, 0.0),
            extras: None,
        };
        s.update(0.05, &mut world);
        if s.live_total() == 0 {
            break;
        }
    }
    assert_eq!(s.live_total(), 0, "first shot resolved");

    s.spawn_player_bullet(vec3(0.0, 1.0, 0.0), vec3(1.0, 0.0, 0.0))
        .expect("second shot");
    let p = &s.projectiles[0];
    assert!(p.struck.is_empty(), "hit-set cleared on reuse");
    assert_eq!(p.pierce_left, 0);
    assert_eq!(p.stun_s, 0.0);
    assert!(p.explosion.is_none());
    assert_eq!(p.lod_accum_s, 0.0);
}
