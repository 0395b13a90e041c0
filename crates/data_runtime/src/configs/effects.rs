//! Impact/explosion effect caps and fade tuning loaded from
//! data/config/effects.toml with sensible defaults.

use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct EffectsTuning {
    pub max_impacts: usize,
    pub max_explosions: usize,
    /// Effects farther than this from the player are not spawned.
    pub render_distance_m: f32,
    pub impact_life_s: f32,
    pub explosion_life_s: f32,
    pub impact_scale_m: f32,
    pub explosion_scale_m: f32,
    /// Scale multiplier gained over the full fade (grows as opacity drops).
    pub scale_growth: f32,
    /// Seed for per-spawn intensity jitter; fixed seeds keep tests stable.
    pub seed: u64,
}

impl Default for EffectsTuning {
    fn default() -> Self {
        Self {
            max_impacts: 48,
            max_explosions: 12,
            render_distance_m: 60.0,
            impact_life_s: 0.25,
            explosion_life_s: 0.6,
            impact_scale_m: 0.12,
            explosion_scale_m: 1.0,
            scale_growth: 1.6,
            seed: 0x5EED,
        }
    }
}

fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

fn clamp(mut cfg: EffectsTuning) -> EffectsTuning {
    if cfg.impact_life_s < 0.05 {
        cfg.impact_life_s = 0.05;
    }
    if cfg.explosion_life_s < 0.05 {
        cfg.explosion_life_s = 0.05;
    }
    if cfg.render_distance_m < 1.0 {
        cfg.render_distance_m = 1.0;
    }
    cfg
}

/// Load the effects tuning from the default location, falling back to defaults.
pub fn load_default() -> Result<EffectsTuning> {
    let path = data_root().join("config/effects.toml");
    if !path.is_file() {
        return Ok(EffectsTuning::default());
    }
    let txt =
        std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let parsed: EffectsTuning = toml::from_str(&txt).context("parse effects TOML")?;
    Ok(clamp(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_or_file_loads() {
        let cfg = load_default().expect("load");
        assert!(cfg.max_impacts >= 1);
        assert!(cfg.render_distance_m >= 1.0);
    }
}
