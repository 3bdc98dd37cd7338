//! Boss encounter layout: phase timings, movement and turret placement.

use anyhow::{Context, Result};
use serde::Deserialize;

fn default_hp() -> i32 {
    60
}
fn default_fly_in() -> f32 {
    4.0
}
fn default_attack_time() -> f32 {
    3.0
}
fn default_rate_of_fire() -> f32 {
    1.5
}

#[derive(Debug, Clone, Deserialize)]
pub struct TurretCfg {
    pub hp: i32,
    pub rate_of_fire: f32,
    pub rotation_speed: f32,
    pub radius: f32,
    pub score: i32,
    #[serde(default)]
    pub death_anim_s: f32,
    #[serde(default)]
    pub death_sound_s: f32,
}

impl Default for TurretCfg {
    fn default() -> Self {
        Self {
            hp: 8,
            rate_of_fire: 1.5,
            rotation_speed: 40.0,
            radius: 0.4,
            score: 300,
            death_anim_s: 0.5,
            death_sound_s: 0.8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BossCfg {
    #[serde(default = "default_hp")]
    pub hp: i32,
    pub speed: f32,
    pub rotation_speed: f32,
    pub radius: f32,
    pub score: i32,
    #[serde(default = "default_fly_in")]
    pub time_to_fly_in: f32,
    #[serde(default = "default_attack_time")]
    pub time_of_each_attack: f32,
    #[serde(default = "default_rate_of_fire")]
    pub rate_of_fire: f32,
    /// Offset-follow parameters: the boss holds station at
    /// `player + offset_dir * offset_distance`.
    pub offset_dir: [f32; 2],
    pub offset_distance: f32,
    pub dampen_distance: f32,
    pub min_speed: f32,
    /// Scatter burst emitters, local to the body; index 0 is the main one.
    pub emitter_offsets: Vec<[f32; 2]>,
    pub emitter_rotations: Vec<f32>,
    /// One turret is attached per offset.
    pub turret_offsets: Vec<[f32; 2]>,
    /// Per-offset turret scale factors; must match `turret_offsets` in length
    /// to take effect, otherwise scales default to 1.
    #[serde(default)]
    pub turret_scales: Vec<f32>,
    #[serde(default)]
    pub turret: TurretCfg,
    #[serde(default)]
    pub death_anim_s: f32,
    #[serde(default)]
    pub death_sound_s: f32,
    #[serde(default)]
    pub pickup_chance: f32,
}

impl Default for BossCfg {
    fn default() -> Self {
        Self {
            hp: default_hp(),
            speed: 3.0,
            rotation_speed: 30.0,
            radius: 1.4,
            score: 5000,
            time_to_fly_in: default_fly_in(),
            time_of_each_attack: default_attack_time(),
            rate_of_fire: default_rate_of_fire(),
            offset_dir: [0.0, 1.0],
            offset_distance: 5.0,
            dampen_distance: 2.0,
            min_speed: 0.5,
            emitter_offsets: vec![[0.0, -1.2], [-1.0, -0.8], [1.0, -0.8]],
            emitter_rotations: vec![180.0, 150.0, 210.0],
            turret_offsets: vec![[-1.2, -0.4], [0.0, -1.0], [1.2, -0.4]],
            turret_scales: vec![1.0, 1.2, 1.0],
            turret: TurretCfg::default(),
            death_anim_s: 1.2,
            death_sound_s: 2.0,
            pickup_chance: 1.0,
        }
    }
}

impl BossCfg {
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/boss.toml");
        if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let cfg: Self = toml::from_str(&txt).context("parse boss TOML")?;
            Ok(cfg)
        } else {
            Ok(Self::default())
        }
    }
}
