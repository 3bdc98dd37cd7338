//! Per-actor motion strategies.
//!
//! A closed set of behaviors selected at spawn and dispatched through one
//! enum; the spiral is the circle strategy with an extra radius sub-state
//! rather than a subclass.

pub mod circle;
pub mod path;
pub mod seek;

pub use circle::{Circle, CircleDir, FlyState, Spiral, MAX_POSITIONS};
pub use path::{FollowLeader, Path};
pub use seek::{Seek, SeekOffset};

use blitz_core::components::ActorId;
use glam::Vec2;

/// Straight-line motion in a fixed world-space direction. No rotation.
#[derive(Debug, Clone)]
pub struct InDirection {
    dir: Vec2,
}

impl InDirection {
    pub fn new(dir: Vec2) -> Self {
        Self {
            dir: dir.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn dir(&self) -> Vec2 {
        self.dir
    }

    pub fn update_position(&self, pos: &mut Vec2, speed: f32, dt: f32) {
        *pos += self.dir * speed * dt;
    }
}

/// Axis-driven player movement, clamped to the arena bounds. Never rotates.
#[derive(Debug, Clone)]
pub struct PlayerAxis {
    pub min: Vec2,
    pub max: Vec2,
}

impl PlayerAxis {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn update_position(&self, pos: &mut Vec2, axis: Vec2, speed: f32, dt: f32) {
        let mut v = axis.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        // Diagonal deflection must not exceed the straight-line speed.
        if v.length_squared() > 1.0 {
            v = v.normalize();
        }
        *pos += v * speed * dt;
        *pos = pos.clamp(self.min, self.max);
    }
}

/// The pluggable per-tick position/orientation behavior of an actor.
#[derive(Debug, Clone)]
pub enum Motion {
    InDirection(InDirection),
    PlayerAxis(PlayerAxis),
    Seek(Seek),
    SeekOffset(SeekOffset),
    Circle(Circle),
    Spiral(Spiral),
    Path(Path),
    FollowLeader(FollowLeader),
}

impl Motion {
    /// The actor this strategy tracks, if any. This is a lookup relation:
    /// the referenced actor may no longer exist.
    pub fn target_ref(&self) -> Option<ActorId> {
        match self {
            Motion::Seek(s) => s.target,
            Motion::SeekOffset(s) => s.seek.target,
            Motion::FollowLeader(f) => f.leader,
            _ => None,
        }
    }

    /// One-time setup at spawn: ring index selection, destination anchoring,
    /// initial facing.
    pub fn init(&mut self, pos: Vec2, rot_deg: &mut f32, base_speed: f32, target_pos: Option<Vec2>) {
        match self {
            Motion::Circle(c) => c.init(pos),
            Motion::Spiral(s) => s.init(pos),
            Motion::Path(p) => p.init(base_speed),
            Motion::FollowLeader(f) => f.init(pos, rot_deg, target_pos),
            Motion::SeekOffset(s) => s.init(base_speed, target_pos),
            Motion::InDirection(_) | Motion::PlayerAxis(_) | Motion::Seek(_) => {}
        }
    }
}
