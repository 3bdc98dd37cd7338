//! Component and event types shared across the simulation crates.

use glam::Vec2;

/// Opaque actor identifier (store-assigned). Stable for the actor's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub u32);

/// Damage categories. A body only takes damage from kinds it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageKind {
    PlayerBody,
    PlayerBullet,
    EnemyBody,
    EnemyBullet,
    Bomb,
}

/// Damage amount sentinel that kills outright regardless of current health.
pub const FORCE_DEATH: i32 = -1;

/// Upper clamp for every body's hit points.
pub const MAX_HEALTH: i32 = 999;

/// A single damage application request, produced by collision detection and
/// consumed exactly once by the lifecycle system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageEvent {
    pub kind: DamageKind,
    pub amount: i32,
    /// Remove the damaging body after the hit lands (bullets, bombs).
    pub destroy_source: bool,
}

/// Health component for damage/death application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub hp: i32,
    pub max: i32,
}

impl Health {
    pub fn new(hp: i32) -> Self {
        Self { hp, max: hp }
    }
    #[inline]
    pub fn alive(&self) -> bool {
        self.hp > 0
    }
}

/// Lifecycle stage of an actor. Timed stages carry their own countdown and
/// are advanced once per tick by the lifecycle system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LifeState {
    Alive,
    /// Lethal damage landed this tick; stage one runs on the next tick so
    /// that mutual kills both finish their own damage application first.
    DyingPending,
    /// Holding for the death animation.
    DyingAnim { remaining: f32 },
    /// The death sound outlasts the animation; visuals already hidden.
    DyingSoundTail { remaining: f32 },
    /// Player only: hidden and waiting to re-enter play.
    Respawning { remaining: f32 },
    /// Player only: terminal, no lives left.
    Defeated,
}

/// Player-selectable shot modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShotKind {
    #[default]
    Regular,
    Three,
    Laser,
    Cannon,
    Scatter,
}

/// Power-ups a pickup can grant the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    OneUp,
    Invincibility,
    ThreeShot,
    Laser,
    Cannon,
    Scatter,
    Bomb,
}

/// Identifier of an audio clip, resolved by the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipId(pub &'static str);

/// Fire-and-forget playback request for the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioRequest {
    pub clip: ClipId,
    pub pitch_lo: f32,
    pub pitch_hi: f32,
}

impl AudioRequest {
    /// Request with no pitch variance.
    pub fn flat(clip: ClipId) -> Self {
        Self {
            clip,
            pitch_lo: 1.0,
            pitch_hi: 1.0,
        }
    }
}

/// Animation trigger for the presentation layer. Missing animators on the
/// consumer side degrade to a skipped stage, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimRequest {
    pub actor: ActorId,
    pub trigger: &'static str,
}

/// A shot emitter: offset and extra rotation local to the owning body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emitter {
    pub offset: Vec2,
    pub rot_deg: f32,
}

/// Weapon carried by an actor. Index 0 of `emitters` is the main emitter;
/// an empty list fires from the body origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub rate_of_fire: f32,
    pub fire_timer: f32,
    pub enabled: bool,
    /// Hold fire until the owner's rotation lock has engaged (seekers).
    pub hold_until_locked: bool,
    pub emitters: Vec<Emitter>,
    /// Shot spec name resolved against the shot database.
    pub shot: &'static str,
}

impl Weapon {
    pub fn new(rate_of_fire: f32, shot: &'static str) -> Self {
        Self {
            rate_of_fire,
            fire_timer: 0.0,
            enabled: true,
            hold_until_locked: false,
            emitters: Vec::new(),
            shot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_alive_threshold() {
        assert!(Health::new(1).alive());
        assert!(!Health { hp: 0, max: 5 }.alive());
    }

    #[test]
    fn default_shot_is_regular() {
        assert_eq!(ShotKind::default(), ShotKind::Regular);
    }
}
