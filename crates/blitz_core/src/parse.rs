//! Parsers for string -> component enums used by data-driven configs.

use crate::components::{DamageKind, PickupKind};

/// Case-insensitive damage kind parser.
pub fn parse_damage_kind(s: &str) -> Option<DamageKind> {
    Some(match s.to_ascii_lowercase().as_str() {
        "player_body" => DamageKind::PlayerBody,
        "player_bullet" => DamageKind::PlayerBullet,
        "enemy_body" => DamageKind::EnemyBody,
        "enemy_bullet" => DamageKind::EnemyBullet,
        "bomb" => DamageKind::Bomb,
        _ => return None,
    })
}

/// Case-insensitive pickup kind parser.
pub fn parse_pickup_kind(s: &str) -> Option<PickupKind> {
    Some(match s.to_ascii_lowercase().as_str() {
        "one_up" => PickupKind::OneUp,
        "invincibility" => PickupKind::Invincibility,
        "three_shot" => PickupKind::ThreeShot,
        "laser" => PickupKind::Laser,
        "cannon" => PickupKind::Cannon,
        "scatter" => PickupKind::Scatter,
        "bomb" => PickupKind::Bomb,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_kinds_parse() {
        assert!(parse_damage_kind("player_bullet").is_some());
        assert!(parse_damage_kind("Enemy_Body").is_some());
        assert!(parse_damage_kind("laser").is_none());
    }

    #[test]
    fn pickup_kinds_parse() {
        assert!(parse_pickup_kind("one_up").is_some());
        assert!(parse_pickup_kind("SCATTER").is_some());
        assert!(parse_pickup_kind("shield").is_none());
    }
}
