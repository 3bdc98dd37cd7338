//! Fixed-order tick schedule and the per-tick context buffers.
//!
//! One logical frame: lifecycle timers, boss control, motion, weapons,
//! collision, damage application, cleanup. Motion reads target positions
//! from a snapshot taken before anything moves, and lifecycle stages run
//! before damage application so stage one of a death always lands the tick
//! after the lethal hit.

use blitz_core::components::{ActorId, AnimRequest, AudioRequest, DamageEvent};
use glam::Vec2;

use crate::actor::ActorKind;
use crate::systems;
use crate::{GameState, PlayerInput};

/// A damage application request on the tick's bus.
#[derive(Debug, Clone, Copy)]
pub struct DamageHit {
    pub src: Option<ActorId>,
    pub dst: ActorId,
    pub event: DamageEvent,
}

/// Per-tick context: elapsed time, the damage bus, and outbound request
/// buffers drained by collaborators after the tick.
#[derive(Debug, Default)]
pub struct Ctx {
    pub dt: f32,
    pub dmg: Vec<DamageHit>,
    pub audio: Vec<AudioRequest>,
    /// Positions where a pickup drop was requested.
    pub pickups: Vec<Vec2>,
    pub anims: Vec<AnimRequest>,
}

impl Ctx {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }
}

pub struct Schedule;

impl Schedule {
    pub fn run(state: &mut GameState, ctx: &mut Ctx, input: &PlayerInput) {
        let snapshot = state.position_snapshot();
        systems::lifecycle::advance(state, ctx);
        systems::boss::update(state, ctx);
        systems::motion::update(state, ctx, &snapshot, input);
        systems::weapons::update(state, ctx, input);
        systems::collision::scan(state, ctx);
        // Externally detected hits join this tick's bus.
        ctx.dmg.append(&mut state.pending_damage);
        let hits: Vec<DamageHit> = ctx.dmg.drain(..).collect();
        for hit in hits {
            systems::lifecycle::apply_damage(state, hit);
        }
        cleanup(state);
    }
}

/// Remove despawned actors and run the game-over sweep. Removing an actor
/// takes its stage state with it, so no timed continuation can fire against
/// a removed actor.
fn cleanup(state: &mut GameState) {
    if state.game_over {
        for a in state.actors.iter_mut() {
            if a.kind != ActorKind::Player {
                a.despawn = true;
            }
        }
    }
    state.actors.remove_despawned();
}
