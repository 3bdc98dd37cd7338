//! Boss encounter controller: phase machine layered over the base
//! lifecycle, coordinating the turret sub-actors.
//!
//! Phases: FlyIn holds for a fixed time, TurretAttack cycles one live
//! turret at a time, ScatterAttack fires timed bursts from every emitter.
//! Once every turret is gone the body collider is enabled and the boss
//! stays in ScatterAttack for good.

use blitz_core::components::{ActorId, AudioRequest, ClipId, DamageKind, Emitter};
use glam::Vec2;

use crate::rotation::rotate_vec;
use crate::schedule::Ctx;
use crate::systems::weapons::{spawn_shot, PendingShot};
use crate::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossPhase {
    FlyIn,
    TurretAttack,
    ScatterAttack,
}

#[derive(Debug, Clone)]
pub struct BossEncounter {
    pub body: ActorId,
    /// Turret handles in attach order; a turret counts as destroyed once it
    /// is no longer in the store.
    pub turrets: Vec<ActorId>,
    pub turret_offsets: Vec<Vec2>,
    pub phase: BossPhase,
    pub current_turret: usize,
    pub time_to_fly_in: f32,
    pub time_of_each_attack: f32,
    pub rate_of_fire: f32,
    /// Scatter burst emitters, local to the body; index 0 is the main one.
    pub emitters: Vec<Emitter>,
    pub shot: &'static str,
    attack_timer: f32,
    fire_timer: f32,
    fly_in_timer: f32,
}

impl BossEncounter {
    pub fn new(
        body: ActorId,
        turrets: Vec<ActorId>,
        turret_offsets: Vec<Vec2>,
        time_to_fly_in: f32,
        time_of_each_attack: f32,
        rate_of_fire: f32,
        emitters: Vec<Emitter>,
    ) -> Self {
        Self {
            body,
            turrets,
            turret_offsets,
            phase: BossPhase::FlyIn,
            current_turret: 0,
            time_to_fly_in,
            time_of_each_attack,
            rate_of_fire,
            emitters,
            shot: "enemy_regular",
            attack_timer: 0.0,
            fire_timer: 0.0,
            fly_in_timer: 0.0,
        }
    }
}

pub fn update(state: &mut GameState, ctx: &mut Ctx) {
    let Some(mut enc) = state.boss.take() else {
        return;
    };
    if state.actors.get(enc.body).is_none() {
        // Body removed: the encounter is over, drop the handles.
        log::info!("boss encounter finished");
        return;
    }

    pin_turrets(state, &enc);

    let body_dead = state
        .actors
        .get(enc.body)
        .map(|a| a.is_dead())
        .unwrap_or(true);
    if body_dead {
        state.boss = Some(enc);
        return;
    }

    if state.is_player_dead() {
        // Suspend: no turret fire, no movement; the phase state is kept.
        set_all_turrets(state, &enc, false);
        if let Some(b) = state.actors.get_mut(enc.body) {
            b.motion_on = false;
        }
        state.boss = Some(enc);
        return;
    }
    if let Some(b) = state.actors.get_mut(enc.body) {
        b.motion_on = true;
    }

    if all_turrets_destroyed(state, &enc) {
        // Exposed at last: the body can now be damaged, and only scatter
        // attacks remain.
        if let Some(b) = state.actors.get_mut(enc.body) {
            b.collider_on = true;
        }
        enc.phase = BossPhase::ScatterAttack;
    }

    match enc.phase {
        BossPhase::FlyIn => fly_in_update(state, &mut enc, ctx.dt),
        BossPhase::TurretAttack => turret_attack_update(state, &mut enc, ctx.dt),
        BossPhase::ScatterAttack => scatter_attack_update(state, ctx, &mut enc),
    }

    state.boss = Some(enc);
}

/// Keep turrets attached to the body at their configured offsets.
fn pin_turrets(state: &mut GameState, enc: &BossEncounter) {
    let Some(body) = state.actors.get(enc.body) else {
        return;
    };
    let (body_pos, body_rot) = (body.pos, body.rot_deg);
    for (i, tid) in enc.turrets.iter().enumerate() {
        let Some(off) = enc.turret_offsets.get(i) else {
            continue;
        };
        if let Some(t) = state.actors.get_mut(*tid) {
            t.pos = body_pos + rotate_vec(*off, body_rot);
        }
    }
}

fn turret_present(state: &GameState, id: ActorId) -> bool {
    state.actors.get(id).is_some()
}

fn all_turrets_destroyed(state: &GameState, enc: &BossEncounter) -> bool {
    enc.turrets.iter().all(|t| !turret_present(state, *t))
}

/// Enable or disable one turret's gun (rotation tracking included).
fn set_turret(state: &mut GameState, id: ActorId, enable: bool) {
    if let Some(t) = state.actors.get_mut(id) {
        t.motion_on = enable;
        if let Some(w) = t.weapon.as_mut() {
            w.enabled = enable;
        }
    }
}

fn set_all_turrets(state: &mut GameState, enc: &BossEncounter, enable: bool) {
    for id in &enc.turrets {
        set_turret(state, *id, enable);
    }
}

fn fly_in_update(state: &mut GameState, enc: &mut BossEncounter, dt: f32) {
    enc.fly_in_timer += dt;
    if enc.fly_in_timer >= enc.time_to_fly_in {
        enc.fly_in_timer = 0.0;
        enc.phase = BossPhase::TurretAttack;
        enc.attack_timer = 0.0;
        enc.current_turret = 0;
        if let Some(first) = enc.turrets.first().copied() {
            set_turret(state, first, true);
        }
    }
}

fn turret_attack_update(state: &mut GameState, enc: &mut BossEncounter, dt: f32) {
    if let Some(current) = enc.turrets.get(enc.current_turret).copied() {
        if !turret_present(state, current) {
            // The attacker died mid-phase; treat it as done attacking.
            enc.attack_timer = enc.time_of_each_attack;
        }
    }
    enc.attack_timer += dt;
    if enc.attack_timer >= enc.time_of_each_attack {
        enc.attack_timer = 0.0;
        if let Some(current) = enc.turrets.get(enc.current_turret).copied() {
            set_turret(state, current, false);
        }
        enc.current_turret += 1;
        if enc.current_turret >= enc.turrets.len() {
            enc.current_turret = 0;
            enc.phase = BossPhase::ScatterAttack;
            set_all_turrets(state, enc, false);
        } else if let Some(next) = enc.turrets.get(enc.current_turret).copied() {
            set_turret(state, next, true);
        }
    }
}

fn scatter_attack_update(state: &mut GameState, ctx: &mut Ctx, enc: &mut BossEncounter) {
    enc.fire_timer += ctx.dt;
    if enc.fire_timer > enc.rate_of_fire {
        shoot_scatter(state, ctx, enc);
        enc.fire_timer = 0.0;
    }
    if !all_turrets_destroyed(state, enc) {
        enc.attack_timer += ctx.dt;
        if enc.attack_timer >= enc.time_of_each_attack {
            enc.attack_timer = 0.0;
            enc.current_turret = 0;
            enc.phase = BossPhase::TurretAttack;
            if let Some(first) = enc.turrets.first().copied() {
                set_turret(state, first, true);
            }
        }
    }
}

/// One shot from the main emitter plus one from every auxiliary emitter.
fn shoot_scatter(state: &mut GameState, ctx: &mut Ctx, enc: &BossEncounter) {
    let Some(body) = state.actors.get(enc.body) else {
        return;
    };
    let (body_pos, body_rot) = (body.pos, body.rot_deg);
    ctx.audio.push(AudioRequest {
        clip: ClipId("boss_shoot"),
        pitch_lo: 0.9,
        pitch_hi: 1.1,
    });
    for e in &enc.emitters {
        let _ = spawn_shot(
            state,
            PendingShot {
                pos: body_pos + rotate_vec(e.offset, body_rot),
                rot_deg: body_rot + e.rot_deg,
                shot: enc.shot,
                kind: DamageKind::EnemyBullet,
            },
        );
    }
}
