use combat_core::{CombatSim, CombatTuning, TileGrid, WeaponSpecDb, WorldView};
use glam::vec3;

struct Open;
impl TileGrid for Open {
    fn is_walkable(&self, _tx: i32, _tz: i32) -> bool {
        true
    }
}

#[test]
fn far_projectile_banks_time_and_steps_with_the_accumulated_amount() {
    let tuning = CombatTuning {
        lod_far_m: 10.0,
        lod_min_tick_s: 0.1,
        ..Default::default()
    };
    let mut s = CombatSim::new(tuning, WeaponSpecDb::builtin());
    // Pistol is 42 m/s; spawned 50 m from the player, well past the LOD line.
    s.spawn_player_bullet(vec3(50.0, 1.0, 0.0), vec3(1.0, 0.0, 0.0))
        .expect("spawn");

    let mut world = WorldView {
        grid: &Open,
        monsters: &[],
        player_pos: vec3(0.0, 1.0, 0.0),
        extras: None,
    };
    s.update(0.04, &mut world);
    assert!(
        (s.projectiles[0].pos.x - 50.0).abs() < 1e-6,
        "below the LOD tick the position holds"
    );
    s.update(0.04, &mut world);
    assert!((s.projectiles[0].pos.x - 50.0).abs() < 1e-6);

    s.update(0.04, &mut world);
    let expected = 50.0 + 42.0 * 0.12;
    assert!(
        (s.projectiles[0].pos.x - expected).abs() < 1e-3,
        "stepped once with the banked 0.12 s: x={}",
        s.projectiles[0].pos.x
    );
    // Life still drains every frame, banked or not.
    assert!((s.projectiles[0].life_s - (1.5 - 0.12)).abs() < 1e-5);
}

#[test]
fn near_projectile_steps_every_frame() {
    let tuning = CombatTuning {
        lod_far_m: 10.0,
        lod_min_tick_s: 0.1,
        ..Default::default()
    };
    let mut s = CombatSim::new(tuning, WeaponSpecDb::builtin());
    s.spawn_player_bullet(vec3(0.0, 1.0, 0.0), vec3(1.0, 0.0, 0.0))
        .expect("spawn");
    let mut world = WorldView {
        grid: &Open,
        monsters: &[],
        player_pos: vec3(0.0, 1.0, 0.0),
        extras: None,
    };
    s.update(0.04, &mut world);
    assert!(
        (s.projectiles[0].pos.x - 42.0 * 0.04).abs() < 1e-4,
        "near path integrates the full dt each frame"
    );
}
