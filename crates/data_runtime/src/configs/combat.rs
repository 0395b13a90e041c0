//! Projectile caps and sweep tuning loaded from data/config/combat.toml
//! with sensible defaults and clamping.

use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct CombatTuning {
    /// Total live projectiles across all owners.
    pub max_active_projectiles: usize,
    pub max_player_projectiles: usize,
    pub max_monster_projectiles: usize,
    /// Freelist capacity per pool bucket; releases beyond it are dropped.
    pub pool_capacity: usize,
    pub tile_size_m: f32,
    pub player_radius_m: f32,
    /// Fallback for monsters that declare no hit radius.
    pub monster_radius_m: f32,
    /// How far past a pierced target the projectile is pushed.
    pub pierce_nudge_m: f32,
    /// Distance from the player beyond which projectiles tick coarsely; 0 disables.
    pub lod_far_m: f32,
    pub lod_min_tick_s: f32,
    /// Weapon id used by the plain player-bullet spawn path.
    pub default_player_weapon: String,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            max_active_projectiles: 96,
            max_player_projectiles: 32,
            max_monster_projectiles: 64,
            pool_capacity: 32,
            tile_size_m: 1.0,
            player_radius_m: 0.7,
            monster_radius_m: 0.9,
            pierce_nudge_m: 0.05,
            lod_far_m: 40.0,
            lod_min_tick_s: 0.1,
            default_player_weapon: "pistol".to_string(),
        }
    }
}

fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

fn clamp(mut cfg: CombatTuning) -> CombatTuning {
    if cfg.tile_size_m < 0.25 {
        cfg.tile_size_m = 0.25;
    }
    if cfg.pierce_nudge_m < 1e-3 {
        cfg.pierce_nudge_m = 1e-3;
    }
    if cfg.lod_min_tick_s < 0.0 {
        cfg.lod_min_tick_s = 0.0;
    }
    if cfg.lod_far_m < 0.0 {
        cfg.lod_far_m = 0.0;
    }
    cfg
}

/// Load the combat tuning from the default location, falling back to defaults.
pub fn load_default() -> Result<CombatTuning> {
    let path = data_root().join("config/combat.toml");
    if !path.is_file() {
        return Ok(CombatTuning::default());
    }
    let txt =
        std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let parsed: CombatTuning = toml::from_str(&txt).context("parse combat TOML")?;
    Ok(clamp(parsed))
}
