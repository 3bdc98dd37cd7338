//! Player tuning: health, lives, respawn rules and arena bounds.

use anyhow::{Context, Result};
use serde::Deserialize;

fn default_hp() -> i32 {
    3
}
fn default_speed() -> f32 {
    8.0
}
fn default_radius() -> f32 {
    0.45
}
fn default_lives() -> i32 {
    3
}
fn default_respawn_delay() -> f32 {
    2.0
}
fn default_invincibility() -> f32 {
    10.0
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ArenaBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            min_x: -8.0,
            max_x: 8.0,
            min_y: -4.0,
            max_y: 4.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerCfg {
    #[serde(default = "default_hp")]
    pub hp: i32,
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default = "default_radius")]
    pub radius: f32,
    #[serde(default = "default_lives")]
    pub starting_lives: i32,
    #[serde(default)]
    pub infinite_lives: bool,
    #[serde(default = "default_respawn_delay")]
    pub respawn_delay_s: f32,
    /// How long pickup-granted invincibility lasts.
    #[serde(default = "default_invincibility")]
    pub invincibility_cooldown_s: f32,
    #[serde(default)]
    pub invincible_at_start: bool,
    #[serde(default)]
    pub bounds: ArenaBounds,
    #[serde(default)]
    pub death_anim_s: f32,
    #[serde(default)]
    pub death_sound_s: f32,
    /// Cannon emitter offsets, one bullet each when the cannon shot is armed.
    #[serde(default)]
    pub cannon_offsets: Vec<[f32; 2]>,
}

impl Default for PlayerCfg {
    fn default() -> Self {
        Self {
            hp: default_hp(),
            speed: default_speed(),
            radius: default_radius(),
            starting_lives: default_lives(),
            infinite_lives: false,
            respawn_delay_s: default_respawn_delay(),
            invincibility_cooldown_s: default_invincibility(),
            invincible_at_start: false,
            bounds: ArenaBounds::default(),
            death_anim_s: 0.8,
            death_sound_s: 1.2,
            cannon_offsets: vec![[-0.5, 0.1], [0.5, 0.1]],
        }
    }
}

impl PlayerCfg {
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/player.toml");
        if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let cfg: Self = toml::from_str(&txt).context("parse player TOML")?;
            Ok(cfg)
        } else {
            Ok(Self::default())
        }
    }
}
