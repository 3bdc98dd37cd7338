//! Enemy/obstacle archetype specs used to parameterize spawns.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

fn default_radius() -> f32 {
    0.5
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActorSpec {
    pub hp: i32,
    pub speed: f32,
    #[serde(default)]
    pub rotation_speed: f32,
    #[serde(default = "default_radius")]
    pub radius: f32,
    #[serde(default)]
    pub score: i32,
    /// Probability in [0, 1] of dropping a pickup on death.
    #[serde(default)]
    pub pickup_chance: f32,
    #[serde(default)]
    pub death_anim_s: f32,
    #[serde(default)]
    pub death_sound_s: f32,
    /// Damage kind names this body accepts (see `blitz_core::parse`).
    #[serde(default)]
    pub accepts: Vec<String>,
    /// Contact damage dealt to bodies that accept it; 0 = harmless on touch.
    #[serde(default)]
    pub touch_damage: i32,
    /// Seconds until auto-expiry; omitted = lives until destroyed.
    #[serde(default)]
    pub lifetime_s: Option<f32>,
    /// Seconds between shots for firing archetypes; omitted = unarmed.
    #[serde(default)]
    pub rate_of_fire: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActorSpecDb {
    /// Map from archetype name (e.g. "raider", "spinner") to spec.
    pub archetypes: HashMap<String, ActorSpec>,
}

impl ActorSpecDb {
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/actors.toml");
        if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let db: Self = toml::from_str(&txt).context("parse actors TOML")?;
            Ok(db)
        } else {
            Ok(Self::defaults())
        }
    }

    /// Built-in archetypes so the sim runs without a data directory.
    pub fn defaults() -> Self {
        let mut db = Self::default();
        let accepts_enemy = || {
            vec![
                "player_bullet".to_string(),
                "player_body".to_string(),
                "bomb".to_string(),
            ]
        };
        db.archetypes.insert(
            "raider".to_string(),
            ActorSpec {
                hp: 3,
                speed: 4.0,
                rotation_speed: 120.0,
                radius: 0.5,
                score: 100,
                pickup_chance: 0.15,
                death_anim_s: 0.6,
                death_sound_s: 0.9,
                accepts: accepts_enemy(),
                touch_damage: 1,
                lifetime_s: None,
                rate_of_fire: Some(1.5),
            },
        );
        db.archetypes.insert(
            "spinner".to_string(),
            ActorSpec {
                hp: 2,
                speed: 6.0,
                rotation_speed: 4.0,
                radius: 0.4,
                score: 150,
                pickup_chance: 0.1,
                death_anim_s: 0.5,
                death_sound_s: 0.5,
                accepts: accepts_enemy(),
                touch_damage: 1,
                lifetime_s: None,
                rate_of_fire: None,
            },
        );
        db.archetypes.insert(
            "drone".to_string(),
            ActorSpec {
                hp: 1,
                speed: 5.0,
                rotation_speed: 3.0,
                radius: 0.35,
                score: 50,
                pickup_chance: 0.05,
                death_anim_s: 0.4,
                death_sound_s: 0.4,
                accepts: accepts_enemy(),
                touch_damage: 1,
                lifetime_s: None,
                rate_of_fire: None,
            },
        );
        db.archetypes.insert(
            "patrol".to_string(),
            ActorSpec {
                hp: 4,
                speed: 3.0,
                rotation_speed: 3.0,
                radius: 0.5,
                score: 200,
                pickup_chance: 0.2,
                death_anim_s: 0.6,
                death_sound_s: 0.6,
                accepts: accepts_enemy(),
                touch_damage: 1,
                lifetime_s: None,
                rate_of_fire: Some(2.0),
            },
        );
        db.archetypes.insert(
            "obstacle".to_string(),
            ActorSpec {
                hp: 10,
                speed: 2.0,
                rotation_speed: 0.0,
                radius: 0.8,
                score: 25,
                pickup_chance: 0.3,
                death_anim_s: 0.5,
                death_sound_s: 0.5,
                accepts: accepts_enemy(),
                touch_damage: 2,
                lifetime_s: None,
                rate_of_fire: None,
            },
        );
        db
    }
}
