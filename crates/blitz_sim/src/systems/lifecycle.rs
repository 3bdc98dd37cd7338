//! Damage application and the timed death/respawn state machine.
//!
//! Lethal damage only marks an actor `DyingPending`; stage one (collider
//! off, pickup roll, animation/sound requests) runs on the following tick,
//! so two actors that kill each other in the same tick both finish their
//! own damage application first.

use blitz_core::components::{
    AnimRequest, AudioRequest, DamageKind, LifeState, ShotKind, FORCE_DEATH, MAX_HEALTH,
};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::actor::{Actor, ActorKind};
use crate::schedule::{Ctx, DamageHit};
use crate::{GameState, PlayerState};

/// Apply one damage hit per the acceptance/invincibility/clamp rules.
pub fn apply_damage(state: &mut GameState, hit: DamageHit) {
    let mut award = 0i32;
    let mut destroy_src = None;
    {
        let Some(a) = state.actors.get_mut(hit.dst) else {
            // Destination already removed this tick; the hit is spent.
            return;
        };
        if a.invincible {
            return;
        }
        if !a.accepts.contains(&hit.event.kind) {
            return;
        }
        let amount = hit.event.amount;
        if amount <= 0 && amount != FORCE_DEATH {
            return;
        }
        a.hp.hp = (a.hp.hp - amount).clamp(0, MAX_HEALTH);
        if amount == FORCE_DEATH {
            a.hp.hp = 0;
        }
        log::debug!(
            "actor {:?} took {} ({:?}), hp now {}",
            a.id,
            amount,
            hit.event.kind,
            a.hp.hp
        );
        if a.hp.hp <= 0 && matches!(a.life, LifeState::Alive) {
            if hit.event.kind == DamageKind::PlayerBullet {
                award = a.score_value;
            }
            a.life = LifeState::DyingPending;
        }
        if hit.event.destroy_source {
            destroy_src = hit.src;
        }
    }
    state.score += award;
    if let Some(src) = destroy_src {
        if let Some(s) = state.actors.get_mut(src) {
            s.despawn = true;
        }
    }
}

/// Advance every actor's timed lifecycle stages by one tick.
pub fn advance(state: &mut GameState, ctx: &mut Ctx) {
    let dt = ctx.dt;
    let GameState {
        actors,
        rng,
        pstate,
        player,
        ..
    } = state;

    for a in actors.iter_mut() {
        // Auto-expiry runs regardless of damage state.
        if let Some(t) = a.lifetime_s.as_mut() {
            *t -= dt;
            if *t <= 0.0 {
                a.despawn = true;
                continue;
            }
        }
        match a.life {
            LifeState::Alive | LifeState::Defeated => {}
            LifeState::DyingPending => death_start(a, rng, ctx, pstate),
            LifeState::DyingAnim { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    a.life = LifeState::DyingAnim { remaining };
                } else {
                    let tail = a.death_sound_s - a.death_anim_s;
                    if a.death_sound_s > 0.0 && tail > 0.0 {
                        // Sound outlasts the animation: hide and hold.
                        a.visible = false;
                        a.motion_on = false;
                        a.life = LifeState::DyingSoundTail { remaining: tail };
                    } else {
                        finalize(a, ctx, pstate);
                    }
                }
            }
            LifeState::DyingSoundTail { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    a.life = LifeState::DyingSoundTail { remaining };
                } else {
                    finalize(a, ctx, pstate);
                }
            }
            LifeState::Respawning { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    a.life = LifeState::Respawning { remaining };
                } else {
                    respawn(a, pstate);
                }
            }
        }
    }

    // Pickup-granted invincibility wears off; spawn-configured does not
    // (it never arms the timer).
    if let Some(t) = pstate.invincibility_timer.as_mut() {
        *t -= dt;
        if *t <= 0.0 {
            pstate.invincibility_timer = None;
            if let Some(pid) = *player {
                if let Some(p) = actors.get_mut(pid) {
                    p.invincible = false;
                }
            }
        }
    }
}

/// Stage one of the death sequence.
fn death_start(a: &mut Actor, rng: &mut ChaCha8Rng, ctx: &mut Ctx, pstate: &mut PlayerState) {
    if a.pickup_chance > 0.0 && rng.gen_range(0.0..=1.0f32) <= a.pickup_chance {
        ctx.pickups.push(a.pos);
    }
    // The dead body must not kill anything from here on.
    a.collider_on = false;
    if a.death_anim_s > 0.0 {
        ctx.anims.push(AnimRequest {
            actor: a.id,
            trigger: "death",
        });
    }
    if let Some(clip) = a.death_clip {
        ctx.audio.push(AudioRequest {
            clip,
            pitch_lo: 0.9,
            pitch_hi: 1.1,
        });
    }
    match a.kind {
        ActorKind::Player => {
            a.motion_on = false;
            a.invincible = false;
            pstate.invincibility_timer = None;
            if !pstate.infinite_lives {
                pstate.lives -= 1;
            }
        }
        ActorKind::Boss => {
            ctx.anims.push(AnimRequest {
                actor: a.id,
                trigger: "hide_extra_parts",
            });
        }
        _ => {}
    }
    a.life = LifeState::DyingAnim {
        remaining: a.death_anim_s,
    };
}

/// Final stage: enemies are removed; the player checks lives.
fn finalize(a: &mut Actor, ctx: &mut Ctx, pstate: &mut PlayerState) {
    if a.kind != ActorKind::Player {
        a.despawn = true;
        return;
    }
    ctx.anims.push(AnimRequest {
        actor: a.id,
        trigger: "reset",
    });
    if pstate.lives <= 0 && !pstate.infinite_lives {
        a.life = LifeState::Defeated;
        log::info!("player out of lives");
    } else {
        a.visible = false;
        a.life = LifeState::Respawning {
            remaining: pstate.respawn_delay_s,
        };
    }
}

/// Put the player back into play at the original spawn point.
fn respawn(a: &mut Actor, pstate: &mut PlayerState) {
    a.motion_on = true;
    a.visible = true;
    a.pos = pstate.spawn_pos;
    a.life = LifeState::Alive;
    a.collider_on = true;
    a.hp.hp = a.hp.max;
    pstate.shot = ShotKind::Regular;
    log::info!("player respawned ({} lives left)", pstate.lives);
}
