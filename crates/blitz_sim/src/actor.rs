//! Authoritative actor store and the per-actor record.

use blitz_core::components::{
    ActorId, ClipId, DamageEvent, DamageKind, Health, LifeState, Weapon,
};
use glam::Vec2;

use crate::motion::Motion;

/// Broad actor category; drives lifecycle variants and system filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    Player,
    Enemy,
    Turret,
    Boss,
    Bullet,
    Bomb,
    Obstacle,
}

#[derive(Debug, Clone)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
    pub pos: Vec2,
    pub rot_deg: f32,
    /// Collision circle radius.
    pub radius: f32,
    pub speed: f32,
    pub rotation_speed: f32,
    pub hp: Health,
    pub accepts: Vec<DamageKind>,
    pub invincible: bool,
    pub collider_on: bool,
    pub visible: bool,
    pub motion_on: bool,
    pub life: LifeState,
    /// Seconds until auto-expiry; `None` lives until destroyed.
    pub lifetime_s: Option<f32>,
    pub score_value: i32,
    pub pickup_chance: f32,
    pub death_anim_s: f32,
    pub death_sound_s: f32,
    pub death_clip: Option<ClipId>,
    pub motion: Option<Motion>,
    pub weapon: Option<Weapon>,
    /// Contact damage this body deals to overlapping accepters.
    pub touch_damage: Option<DamageEvent>,
    /// Scheduled for removal at the next cleanup pass.
    pub despawn: bool,
}

impl Actor {
    pub fn new(kind: ActorKind, pos: Vec2) -> Self {
        Self {
            id: ActorId(0),
            kind,
            pos,
            rot_deg: 0.0,
            radius: 0.5,
            speed: 0.0,
            rotation_speed: 0.0,
            hp: Health::new(1),
            accepts: Vec::new(),
            invincible: false,
            collider_on: true,
            visible: true,
            motion_on: true,
            life: LifeState::Alive,
            lifetime_s: None,
            score_value: 0,
            pickup_chance: 0.0,
            death_anim_s: 0.0,
            death_sound_s: 0.0,
            death_clip: None,
            motion: None,
            weapon: None,
            touch_damage: None,
            despawn: false,
        }
    }

    /// Dead for gameplay purposes: anywhere in the death/respawn pipeline.
    #[inline]
    pub fn is_dead(&self) -> bool {
        !matches!(self.life, LifeState::Alive)
    }
}

#[derive(Default, Debug)]
pub struct ActorStore {
    next_id: u32,
    pub actors: Vec<Actor>,
}

impl ActorStore {
    pub fn insert(&mut self, mut actor: Actor) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        actor.id = id;
        self.actors.push(actor);
        id
    }

    #[inline]
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.actors.iter_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Drop every actor scheduled for removal.
    pub fn remove_despawned(&mut self) {
        self.actors.retain(|a| !a.despawn);
    }
}
