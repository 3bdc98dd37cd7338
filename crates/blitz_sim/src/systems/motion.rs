//! Per-tick motion dispatch.
//!
//! Positions of tracked targets come from the snapshot taken at the start
//! of the tick, so no strategy observes a peer mid-update.

use std::collections::HashMap;

use blitz_core::components::ActorId;
use glam::Vec2;

use crate::actor::ActorKind;
use crate::motion::Motion;
use crate::schedule::Ctx;
use crate::{GameState, PlayerInput};

pub fn update(
    state: &mut GameState,
    ctx: &Ctx,
    snapshot: &HashMap<ActorId, Vec2>,
    input: &PlayerInput,
) {
    let dt = ctx.dt;
    let player_dead = state.is_player_dead();
    for a in state.actors.iter_mut() {
        if !a.motion_on {
            continue;
        }
        // Turrets idle while the player is down.
        if player_dead && a.kind == ActorKind::Turret {
            continue;
        }
        let crate::actor::Actor {
            pos,
            rot_deg,
            speed,
            rotation_speed,
            motion,
            ..
        } = a;
        let Some(m) = motion.as_mut() else {
            continue;
        };
        let target_pos = m.target_ref().and_then(|id| snapshot.get(&id).copied());
        // Rotation first, then position, matching the per-frame order the
        // strategies were tuned with.
        match m {
            Motion::InDirection(d) => d.update_position(pos, *speed, dt),
            Motion::PlayerAxis(p) => {
                p.update_position(pos, Vec2::new(input.x, input.y), *speed, dt)
            }
            Motion::Seek(s) => {
                s.update_rotation(*pos, rot_deg, *rotation_speed, dt, target_pos);
                s.update_position(pos, *rot_deg, *speed, dt, target_pos);
            }
            Motion::SeekOffset(s) => {
                s.update_rotation(*pos, rot_deg, *rotation_speed, dt, target_pos);
                s.update_position(pos, dt, target_pos);
            }
            Motion::Circle(c) => {
                c.update_rotation(*pos, rot_deg, *rotation_speed, dt);
                c.update_position(pos, *speed, dt);
            }
            Motion::Spiral(s) => {
                s.update_rotation(*pos, rot_deg, *rotation_speed, dt);
                s.update_position(pos, *rot_deg, *speed, dt);
            }
            Motion::Path(p) => {
                p.update_rotation(*pos, rot_deg, *rotation_speed, dt);
                p.update_position(pos, dt);
            }
            Motion::FollowLeader(f) => {
                f.update_rotation(*pos, rot_deg, *rotation_speed, dt);
                f.update_position(pos, *rot_deg, *speed, dt, target_pos);
            }
        }
    }
}
