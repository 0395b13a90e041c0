//! Weapon specifications used to parameterize projectile spawns.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Pool-bucket class of a weapon's projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponClass {
    Bullet,
    Grenade,
    Bolt,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeaponSpec {
    pub class: WeaponClass,
    pub speed_mps: f32,
    pub life_s: f32,
    pub damage: i32,
    /// Swept hit radius of the projectile itself.
    pub radius_m: f32,
    /// Targets the projectile may pass through before despawning.
    #[serde(default)]
    pub pierce: u8,
    #[serde(default)]
    pub aoe_radius_m: f32,
    #[serde(default)]
    pub aoe_damage: i32,
    #[serde(default)]
    pub stun_s: f32,
    /// Shot-noise radius fed to monster hearing; 0 = silent.
    #[serde(default)]
    pub noise_m: f32,
    #[serde(default)]
    pub spin_rad_s: f32,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
}

fn default_color() -> [f32; 3] {
    [1.0, 0.85, 0.3]
}

impl WeaponSpec {
    /// Built-in bullet used when a configured weapon id is missing.
    pub fn fallback_bullet() -> Self {
        Self {
            class: WeaponClass::Bullet,
            speed_mps: 42.0,
            life_s: 1.5,
            damage: 10,
            radius_m: 0.12,
            pierce: 0,
            aoe_radius_m: 0.0,
            aoe_damage: 0,
            stun_s: 0.0,
            noise_m: 9.0,
            spin_rad_s: 0.0,
            color: default_color(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeaponSpecDb {
    /// Map from weapon id (e.g., "pistol", "rocket") to spec.
    pub weapons: HashMap<String, WeaponSpec>,
}

fn data_root() -> std::path::PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

impl WeaponSpecDb {
    pub fn get(&self, id: &str) -> Option<&WeaponSpec> {
        self.weapons.get(id)
    }

    pub fn load_default() -> Result<Self> {
        let path = data_root().join("config/weapons.toml");
        if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let db: Self = toml::from_str(&txt).context("parse weapons TOML")?;
            Ok(db)
        } else {
            Ok(Self::builtin())
        }
    }

    /// Reasonable defaults when no data file ships with the build.
    pub fn builtin() -> Self {
        let mut db = Self::default();
        db.weapons
            .insert("pistol".to_string(), WeaponSpec::fallback_bullet());
        db.weapons.insert(
            "carbine".to_string(),
            WeaponSpec {
                class: WeaponClass::Bullet,
                speed_mps: 55.0,
                life_s: 1.2,
                damage: 7,
                radius_m: 0.1,
                pierce: 1,
                aoe_radius_m: 0.0,
                aoe_damage: 0,
                stun_s: 0.0,
                noise_m: 12.0,
                spin_rad_s: 0.0,
                color: [1.0, 0.95, 0.6],
            },
        );
        db.weapons.insert(
            "grenade".to_string(),
            WeaponSpec {
                class: WeaponClass::Grenade,
                speed_mps: 16.0,
                life_s: 2.5,
                damage: 12,
                radius_m: 0.2,
                pierce: 0,
                aoe_radius_m: 2.5,
                aoe_damage: 35,
                stun_s: 0.0,
                noise_m: 6.0,
                spin_rad_s: 8.0,
                color: [0.45, 0.6, 0.3],
            },
        );
        db.weapons.insert(
            "rocket".to_string(),
            WeaponSpec {
                class: WeaponClass::Grenade,
                speed_mps: 28.0,
                life_s: 3.0,
                damage: 20,
                radius_m: 0.25,
                pierce: 0,
                aoe_radius_m: 3.5,
                aoe_damage: 50,
                stun_s: 0.0,
                noise_m: 15.0,
                spin_rad_s: 2.0,
                color: [1.0, 0.5, 0.15],
            },
        );
        db.weapons.insert(
            "monster_bolt".to_string(),
            WeaponSpec {
                class: WeaponClass::Bolt,
                speed_mps: 18.0,
                life_s: 2.0,
                damage: 8,
                radius_m: 0.18,
                pierce: 0,
                aoe_radius_m: 0.0,
                aoe_damage: 0,
                stun_s: 0.4,
                noise_m: 0.0,
                spin_rad_s: 0.0,
                color: [0.75, 0.3, 0.95],
            },
        );
        db
    }
}
