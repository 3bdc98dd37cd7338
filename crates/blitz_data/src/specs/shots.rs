//! Shot specifications used to parameterize bullet spawns.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ShotSpec {
    pub speed: f32,
    pub damage: i32,
    pub life_s: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShotSpecDb {
    /// Map from shot name (e.g. "player_regular", "enemy_regular") to spec.
    pub shots: HashMap<String, ShotSpec>,
}

impl ShotSpecDb {
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/shots.toml");
        if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let db: Self = toml::from_str(&txt).context("parse shots TOML")?;
            Ok(db)
        } else {
            Ok(Self::defaults())
        }
    }

    pub fn defaults() -> Self {
        let mut db = Self::default();
        let mut put = |name: &str, speed: f32, damage: i32, life_s: f32, radius: f32| {
            db.shots.insert(
                name.to_string(),
                ShotSpec {
                    speed,
                    damage,
                    life_s,
                    radius,
                },
            );
        };
        put("player_regular", 14.0, 1, 2.0, 0.12);
        put("player_three", 14.0, 1, 2.0, 0.12);
        put("player_laser", 22.0, 2, 2.0, 0.1);
        put("player_cannon", 10.0, 3, 2.5, 0.2);
        put("player_scatter", 12.0, 1, 1.5, 0.12);
        put("enemy_regular", 8.0, 1, 3.0, 0.15);
        // Bomb kills anything that accepts bomb damage outright.
        put("bomb", 0.0, -1, 5.0, 0.6);
        db
    }

    pub fn get(&self, name: &str) -> Option<&ShotSpec> {
        self.shots.get(name)
    }
}
