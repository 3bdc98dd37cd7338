//! Contact collision: circle overlap between a damaging body and a body
//! that accepts its damage kind, reported edge-triggered onto the damage
//! bus (a sustained overlap only hits once until contact breaks).

use std::collections::HashSet;

use crate::schedule::{Ctx, DamageHit};
use crate::GameState;

pub fn scan(state: &mut GameState, ctx: &mut Ctx) {
    let mut now: HashSet<(u32, u32)> = HashSet::new();
    let actors = &state.actors.actors;
    for dealer in actors.iter() {
        if !dealer.collider_on {
            continue;
        }
        let Some(event) = dealer.touch_damage else {
            continue;
        };
        for recv in actors.iter() {
            if recv.id == dealer.id || !recv.collider_on || recv.invincible {
                continue;
            }
            if !recv.accepts.contains(&event.kind) {
                continue;
            }
            let reach = dealer.radius + recv.radius;
            if dealer.pos.distance_squared(recv.pos) > reach * reach {
                continue;
            }
            let key = (dealer.id.0, recv.id.0);
            now.insert(key);
            if !state.contacts.contains(&key) {
                ctx.dmg.push(DamageHit {
                    src: Some(dealer.id),
                    dst: recv.id,
                    event,
                });
            }
        }
    }
    state.contacts = now;
}
