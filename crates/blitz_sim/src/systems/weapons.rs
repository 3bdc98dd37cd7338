//! Shot spawning: player input fire, automatic enemy/turret fire loops,
//! and the bomb drop.

use blitz_core::components::{AudioRequest, ClipId, DamageEvent, DamageKind, ShotKind};
use glam::Vec2;

use crate::actor::{Actor, ActorKind};
use crate::motion::{InDirection, Motion};
use crate::rotation::{facing_deg, heading, rotate_vec};
use crate::schedule::Ctx;
use crate::{GameState, PlayerInput};

/// A shot queued during iteration and spawned afterwards.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingShot {
    pub pos: Vec2,
    pub rot_deg: f32,
    pub shot: &'static str,
    pub kind: DamageKind,
}

/// Fixed spread directions of the scatter volley.
const SCATTER_DIRS: [Vec2; 3] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(0.4, 0.5),
    Vec2::new(-0.4, 0.5),
];

pub fn update(state: &mut GameState, ctx: &mut Ctx, input: &PlayerInput) {
    let dt = ctx.dt;
    let player_dead = state.is_player_dead();
    let mut pending: Vec<PendingShot> = Vec::new();

    if !player_dead {
        player_fire(state, ctx, input, &mut pending);
    }

    // Automatic fire loops.
    for a in state.actors.iter_mut() {
        if a.is_dead() {
            continue;
        }
        if player_dead && a.kind == ActorKind::Turret {
            continue;
        }
        // Seekers hold fire until their rotation has locked on.
        let locked = match &a.motion {
            Some(Motion::Seek(s)) => s.rotation_locked(),
            _ => true,
        };
        let Some(w) = a.weapon.as_mut() else {
            continue;
        };
        if !w.enabled {
            continue;
        }
        if w.hold_until_locked && !locked {
            continue;
        }
        w.fire_timer += dt;
        if w.fire_timer > w.rate_of_fire {
            w.fire_timer = 0.0;
            let (off, erot) = w
                .emitters
                .first()
                .map(|e| (e.offset, e.rot_deg))
                .unwrap_or((Vec2::ZERO, 0.0));
            pending.push(PendingShot {
                pos: a.pos + rotate_vec(off, a.rot_deg),
                rot_deg: a.rot_deg + erot,
                shot: w.shot,
                kind: DamageKind::EnemyBullet,
            });
            ctx.audio.push(AudioRequest {
                clip: ClipId("enemy_shoot"),
                pitch_lo: 0.9,
                pitch_hi: 1.1,
            });
        }
    }

    for p in pending {
        let _ = spawn_shot(state, p);
    }
}

fn player_fire(
    state: &mut GameState,
    ctx: &mut Ctx,
    input: &PlayerInput,
    pending: &mut Vec<PendingShot>,
) {
    let Some(pid) = state.player else {
        return;
    };
    let Some(p) = state.actors.get(pid) else {
        return;
    };
    let (pos, rot) = (p.pos, p.rot_deg);
    let muzzle = pos + heading(rot) * (p.radius + 0.2);

    if input.fire {
        let (clip, shots): (&'static str, Vec<PendingShot>) = match state.pstate.shot {
            ShotKind::Regular => (
                "player_shoot",
                vec![PendingShot {
                    pos: muzzle,
                    rot_deg: rot,
                    shot: "player_regular",
                    kind: DamageKind::PlayerBullet,
                }],
            ),
            ShotKind::Three => (
                "player_three_shoot",
                [-0.3f32, 0.0, 0.3]
                    .iter()
                    .map(|dx| PendingShot {
                        pos: muzzle + rotate_vec(Vec2::new(*dx, 0.0), rot),
                        rot_deg: rot,
                        shot: "player_three",
                        kind: DamageKind::PlayerBullet,
                    })
                    .collect(),
            ),
            ShotKind::Laser => (
                "player_laser_shoot",
                vec![PendingShot {
                    pos: muzzle,
                    rot_deg: rot,
                    shot: "player_laser",
                    kind: DamageKind::PlayerBullet,
                }],
            ),
            ShotKind::Cannon => (
                "player_cannon_shoot",
                state
                    .specs
                    .player
                    .cannon_offsets
                    .iter()
                    .map(|off| PendingShot {
                        pos: pos + rotate_vec(Vec2::new(off[0], off[1]), rot),
                        rot_deg: rot,
                        shot: "player_cannon",
                        kind: DamageKind::PlayerBullet,
                    })
                    .collect(),
            ),
            ShotKind::Scatter => (
                "player_scatter_shoot",
                SCATTER_DIRS
                    .iter()
                    .map(|dir| PendingShot {
                        pos: muzzle,
                        // The bullet faces its travel direction.
                        rot_deg: facing_deg(*dir),
                        shot: "player_scatter",
                        kind: DamageKind::PlayerBullet,
                    })
                    .collect(),
            ),
        };
        pending.extend(shots);
        ctx.audio.push(AudioRequest {
            clip: ClipId(clip),
            pitch_lo: 0.9,
            pitch_hi: 1.1,
        });
    }

    if input.bomb && state.pstate.has_bomb {
        state.pstate.has_bomb = false;
        pending.push(PendingShot {
            pos: pos + heading(rot) * 0.8,
            rot_deg: rot,
            shot: "bomb",
            kind: DamageKind::Bomb,
        });
        ctx.audio.push(AudioRequest::flat(ClipId("bomb_drop")));
    }
}

/// Materialize a queued shot as a bullet/bomb actor. Unknown shot specs are
/// a configuration error: logged, and the shot is skipped.
pub(crate) fn spawn_shot(state: &mut GameState, p: PendingShot) -> Option<blitz_core::components::ActorId> {
    let Some(spec) = state.specs.shots.get(p.shot).copied() else {
        log::warn!("unknown shot spec '{}', shot skipped", p.shot);
        return None;
    };
    let kind = if p.kind == DamageKind::Bomb {
        ActorKind::Bomb
    } else {
        ActorKind::Bullet
    };
    let mut a = Actor::new(kind, p.pos);
    a.rot_deg = p.rot_deg;
    a.radius = spec.radius;
    a.speed = spec.speed;
    a.lifetime_s = Some(spec.life_s);
    a.touch_damage = Some(DamageEvent {
        kind: p.kind,
        amount: spec.damage,
        // Bombs persist through their blast; bullets spend themselves.
        destroy_source: p.kind != DamageKind::Bomb,
    });
    a.motion = Some(Motion::InDirection(InDirection::new(heading(p.rot_deg))));
    Some(state.actors.insert(a))
}
