//! Movement, combat lifecycle and boss control for a 2D arcade shooter.
//!
//! Tick-driven and headless: collaborators feed elapsed time and an input
//! axis pair into [`GameState::step`] and drain the returned context's
//! audio/pickup/animation requests. Rendering, audio playback and scene
//! management live outside this crate.

use std::collections::{HashMap, HashSet};

use blitz_core::components::{
    ActorId, ClipId, DamageEvent, DamageKind, Emitter, Health, LifeState, PickupKind, ShotKind,
    Weapon,
};
use blitz_core::parse::parse_damage_kind;
use blitz_data::configs::boss::BossCfg;
use blitz_data::configs::player::PlayerCfg;
use blitz_data::specs::actors::ActorSpecDb;
use blitz_data::specs::shots::ShotSpecDb;
use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod actor;
pub mod motion;
pub mod rotation;
pub mod schedule;
pub mod systems;

pub use actor::{Actor, ActorKind, ActorStore};
pub use schedule::{Ctx, DamageHit, Schedule};
pub use systems::boss::{BossEncounter, BossPhase};

use motion::{Motion, PlayerAxis, Seek, SeekOffset};
use rotation::facing_deg;

/// Upper bound on the player's stock of lives.
pub const MAX_LIVES: i32 = 4;

/// Abstract per-tick input: axis deflections in `[-1, 1]` plus edge
/// triggers for the fire and bomb buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    pub x: f32,
    pub y: f32,
    pub fire: bool,
    pub bomb: bool,
}

/// Player bookkeeping that outlives the player actor's death stages.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub lives: i32,
    pub starting_lives: i32,
    pub infinite_lives: bool,
    pub respawn_delay_s: f32,
    pub invincibility_cooldown_s: f32,
    pub spawn_pos: Vec2,
    pub shot: ShotKind,
    pub has_bomb: bool,
    /// Armed only by pickups; spawn-configured invincibility never expires.
    pub invincibility_timer: Option<f32>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            lives: 3,
            starting_lives: 3,
            infinite_lives: false,
            respawn_delay_s: 2.0,
            invincibility_cooldown_s: 10.0,
            spawn_pos: Vec2::ZERO,
            shot: ShotKind::Regular,
            has_bomb: false,
            invincibility_timer: None,
        }
    }
}

/// Loaded tuning databases.
#[derive(Debug)]
pub struct Specs {
    pub actors: ActorSpecDb,
    pub shots: ShotSpecDb,
    pub player: PlayerCfg,
}

/// Authoritative simulation state for one play session.
pub struct GameState {
    pub actors: ActorStore,
    pub player: Option<ActorId>,
    pub pstate: PlayerState,
    pub boss: Option<BossEncounter>,
    pub score: i32,
    /// External game-over signal; non-player actors are swept on the next
    /// cleanup pass once set.
    pub game_over: bool,
    pub tick: u64,
    pub specs: Specs,
    rng: ChaCha8Rng,
    pending_damage: Vec<DamageHit>,
    pub(crate) contacts: HashSet<(u32, u32)>,
}

impl GameState {
    /// Build a fresh state. Config load failures degrade to the built-in
    /// defaults with a warning; they never abort the session.
    pub fn new(seed: u64) -> Self {
        let actors_db = ActorSpecDb::load_default().unwrap_or_else(|e| {
            log::warn!("actor specs failed to load: {e:#}; using defaults");
            ActorSpecDb::defaults()
        });
        let shots_db = ShotSpecDb::load_default().unwrap_or_else(|e| {
            log::warn!("shot specs failed to load: {e:#}; using defaults");
            ShotSpecDb::defaults()
        });
        let player_cfg = PlayerCfg::load_default().unwrap_or_else(|e| {
            log::warn!("player config failed to load: {e:#}; using defaults");
            PlayerCfg::default()
        });
        Self {
            actors: ActorStore::default(),
            player: None,
            pstate: PlayerState::default(),
            boss: None,
            score: 0,
            game_over: false,
            tick: 0,
            specs: Specs {
                actors: actors_db,
                shots: shots_db,
                player: player_cfg,
            },
            rng: ChaCha8Rng::seed_from_u64(seed),
            pending_damage: Vec::new(),
            contacts: HashSet::new(),
        }
    }

    /// Advance one frame. Returns the tick context so the caller can drain
    /// the audio/pickup/animation requests.
    pub fn step(&mut self, dt: f32, input: &PlayerInput) -> Ctx {
        let mut ctx = Ctx::new(dt.max(0.0));
        Schedule::run(self, &mut ctx, input);
        self.tick += 1;
        ctx
    }

    /// Queue an externally detected hit for the next tick's damage bus.
    pub fn queue_damage(&mut self, dst: ActorId, src: Option<ActorId>, event: DamageEvent) {
        self.pending_damage.push(DamageHit { src, dst, event });
    }

    /// True while the player actor exists and is anywhere in its death or
    /// respawn pipeline. False when there is no player at all.
    pub fn is_player_dead(&self) -> bool {
        self.player
            .and_then(|id| self.actors.get(id))
            .map(|a| a.is_dead())
            .unwrap_or(false)
    }

    pub fn player_out_of_lives(&self) -> bool {
        self.player
            .and_then(|id| self.actors.get(id))
            .map(|a| matches!(a.life, LifeState::Defeated))
            .unwrap_or(false)
    }

    /// Spawn the player at its home position.
    pub fn spawn_player(&mut self, pos: Vec2) -> ActorId {
        let cfg = &self.specs.player;
        let mut a = Actor::new(ActorKind::Player, pos);
        a.hp = Health::new(cfg.hp);
        a.radius = cfg.radius;
        a.speed = cfg.speed;
        a.accepts = vec![DamageKind::EnemyBody, DamageKind::EnemyBullet];
        a.invincible = cfg.invincible_at_start;
        a.death_anim_s = cfg.death_anim_s;
        a.death_sound_s = cfg.death_sound_s;
        a.death_clip = Some(ClipId("player_death"));
        a.motion = Some(Motion::PlayerAxis(PlayerAxis::new(
            Vec2::new(cfg.bounds.min_x, cfg.bounds.min_y),
            Vec2::new(cfg.bounds.max_x, cfg.bounds.max_y),
        )));
        self.pstate = PlayerState {
            lives: cfg.starting_lives,
            starting_lives: cfg.starting_lives,
            infinite_lives: cfg.infinite_lives,
            respawn_delay_s: cfg.respawn_delay_s,
            invincibility_cooldown_s: cfg.invincibility_cooldown_s,
            spawn_pos: pos,
            shot: ShotKind::Regular,
            has_bomb: false,
            invincibility_timer: None,
        };
        let id = self.actors.insert(a);
        self.player = Some(id);
        log::info!("player spawned at {pos}");
        id
    }

    /// Spawn an enemy/obstacle from an archetype spec with the given motion.
    /// Unknown archetypes are a configuration error: logged, no spawn.
    pub fn spawn_enemy(&mut self, archetype: &str, pos: Vec2, mut motion: Motion) -> Option<ActorId> {
        let Some(spec) = self.specs.actors.archetypes.get(archetype).cloned() else {
            log::warn!("unknown enemy archetype '{archetype}', spawn skipped");
            return None;
        };
        let kind = if archetype == "obstacle" {
            ActorKind::Obstacle
        } else {
            ActorKind::Enemy
        };
        let mut a = Actor::new(kind, pos);
        a.hp = Health::new(spec.hp);
        a.radius = spec.radius;
        a.speed = spec.speed;
        a.rotation_speed = spec.rotation_speed;
        a.score_value = spec.score;
        a.pickup_chance = spec.pickup_chance;
        a.death_anim_s = spec.death_anim_s;
        a.death_sound_s = spec.death_sound_s;
        a.death_clip = Some(ClipId("enemy_death"));
        a.lifetime_s = spec.lifetime_s;
        for name in &spec.accepts {
            match parse_damage_kind(name) {
                Some(k) => a.accepts.push(k),
                None => log::warn!("archetype '{archetype}': unknown damage kind '{name}'"),
            }
        }
        if spec.touch_damage > 0 {
            a.touch_damage = Some(DamageEvent {
                kind: DamageKind::EnemyBody,
                amount: spec.touch_damage,
                destroy_source: false,
            });
        }
        if let Some(rof) = spec.rate_of_fire {
            let mut w = Weapon::new(rof, "enemy_regular");
            w.hold_until_locked = matches!(motion, Motion::Seek(_));
            a.weapon = Some(w);
        }
        let target_pos = motion
            .target_ref()
            .and_then(|id| self.actors.get(id))
            .map(|t| t.pos);
        motion.init(pos, &mut a.rot_deg, spec.speed, target_pos);
        a.motion = Some(motion);
        Some(self.actors.insert(a))
    }

    /// Spawn the boss encounter: a non-collidable body plus its turrets.
    /// Returns the body id, or the existing one if already spawned.
    pub fn spawn_boss(&mut self, pos: Vec2) -> Option<ActorId> {
        if let Some(enc) = &self.boss {
            return Some(enc.body);
        }
        let cfg = match BossCfg::load_default() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("failed to load boss config: {e:#}");
                return None;
            }
        };
        let player_pos = self
            .player
            .and_then(|id| self.actors.get(id))
            .map(|p| p.pos);

        let mut body = Actor::new(ActorKind::Boss, pos);
        body.hp = Health::new(cfg.hp);
        body.radius = cfg.radius;
        body.speed = cfg.speed;
        body.rotation_speed = cfg.rotation_speed;
        body.score_value = cfg.score;
        body.pickup_chance = cfg.pickup_chance;
        body.death_anim_s = cfg.death_anim_s;
        body.death_sound_s = cfg.death_sound_s;
        body.death_clip = Some(ClipId("boss_death"));
        body.accepts = vec![DamageKind::PlayerBullet, DamageKind::Bomb];
        // The body is untouchable until every turret is destroyed.
        body.collider_on = false;
        if let Some(pid) = self.player {
            let mut so = SeekOffset::new(
                pid,
                Vec2::from(cfg.offset_dir),
                cfg.offset_distance,
                cfg.dampen_distance,
                cfg.min_speed,
            );
            so.init(cfg.speed, player_pos);
            body.motion = Some(Motion::SeekOffset(so));
        }
        let body_id = self.actors.insert(body);

        let mut turrets = Vec::with_capacity(cfg.turret_offsets.len());
        let mut offsets = Vec::with_capacity(cfg.turret_offsets.len());
        let scales_apply = cfg.turret_scales.len() == cfg.turret_offsets.len();
        for (i, off) in cfg.turret_offsets.iter().enumerate() {
            let scale = if scales_apply { cfg.turret_scales[i] } else { 1.0 };
            let off = Vec2::from(*off);
            let tpos = pos + off;
            let mut t = Actor::new(ActorKind::Turret, tpos);
            t.hp = Health::new(cfg.turret.hp);
            t.radius = cfg.turret.radius * scale;
            t.rotation_speed = cfg.turret.rotation_speed;
            t.score_value = cfg.turret.score;
            t.death_anim_s = cfg.turret.death_anim_s;
            t.death_sound_s = cfg.turret.death_sound_s;
            t.death_clip = Some(ClipId("turret_death"));
            t.accepts = vec![DamageKind::PlayerBullet, DamageKind::Bomb];
            if let Some(pid) = self.player {
                t.motion = Some(Motion::Seek(Seek::new(pid, true, false)));
                if let Some(pp) = player_pos {
                    t.rot_deg = facing_deg(pp - tpos);
                }
            }
            let mut w = Weapon::new(cfg.turret.rate_of_fire, "enemy_regular");
            w.enabled = false;
            t.weapon = Some(w);
            t.motion_on = false;
            turrets.push(self.actors.insert(t));
            offsets.push(off);
        }

        let emitters: Vec<Emitter> = cfg
            .emitter_offsets
            .iter()
            .enumerate()
            .map(|(i, off)| Emitter {
                offset: Vec2::from(*off),
                rot_deg: cfg.emitter_rotations.get(i).copied().unwrap_or(0.0),
            })
            .collect();

        log::info!(
            "boss spawned (hp={}, turrets={}) at {pos}",
            cfg.hp,
            turrets.len()
        );
        self.boss = Some(BossEncounter::new(
            body_id,
            turrets,
            offsets,
            cfg.time_to_fly_in,
            cfg.time_of_each_attack,
            cfg.rate_of_fire,
            emitters,
        ));
        Some(body_id)
    }

    /// Grant a picked-up power-up to the player.
    pub fn apply_pickup(&mut self, kind: PickupKind) {
        match kind {
            PickupKind::OneUp => self.add_life(),
            PickupKind::Invincibility => self.grant_invincibility(),
            PickupKind::ThreeShot => self.pstate.shot = ShotKind::Three,
            PickupKind::Laser => self.pstate.shot = ShotKind::Laser,
            PickupKind::Cannon => self.pstate.shot = ShotKind::Cannon,
            PickupKind::Scatter => self.pstate.shot = ShotKind::Scatter,
            PickupKind::Bomb => self.pstate.has_bomb = true,
        }
    }

    pub fn add_life(&mut self) {
        self.pstate.lives = (self.pstate.lives + 1).clamp(0, MAX_LIVES);
    }

    /// Timed invincibility, as granted by a pickup.
    pub fn grant_invincibility(&mut self) {
        let Some(pid) = self.player else {
            return;
        };
        if let Some(p) = self.actors.get_mut(pid) {
            p.invincible = true;
        }
        self.pstate.invincibility_timer = Some(self.pstate.invincibility_cooldown_s);
    }

    /// Restart after a defeat: lives restocked, score cleared, and the
    /// player re-enters play on the next tick (no respawn delay).
    pub fn restart_game(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.pstate.lives = self.pstate.starting_lives;
        let Some(pid) = self.player else {
            return;
        };
        if let Some(p) = self.actors.get_mut(pid) {
            p.visible = false;
            p.life = LifeState::Respawning { remaining: 0.0 };
        }
        log::info!("game restarted");
    }

    /// Positions of every actor before this tick's motion pass.
    pub(crate) fn position_snapshot(&self) -> HashMap<ActorId, Vec2> {
        self.actors.iter().map(|a| (a.id, a.pos)).collect()
    }
}
