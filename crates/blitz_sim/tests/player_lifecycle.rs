//! Player death, respawn, out-of-lives and restart.

use blitz_core::components::{DamageEvent, DamageKind, LifeState, PickupKind, ShotKind};
use blitz_sim::{GameState, PlayerInput};
use glam::Vec2;

fn idle() -> PlayerInput {
    PlayerInput::default()
}

fn kill_player(state: &mut GameState) {
    let player = state.player.expect("player");
    state.queue_damage(
        player,
        None,
        DamageEvent {
            kind: DamageKind::EnemyBullet,
            amount: -1,
            destroy_source: false,
        },
    );
}

#[test]
fn player_respawns_with_reset_state() {
    let mut state = GameState::new(2);
    let spawn = Vec2::new(0.0, -3.0);
    let player = state.spawn_player(spawn);
    state.apply_pickup(PickupKind::Laser);
    assert_eq!(state.pstate.shot, ShotKind::Laser);

    kill_player(&mut state);
    state.step(0.1, &idle());
    assert!(state.is_player_dead());
    assert_eq!(state.pstate.lives, 3, "life is taken at stage one, not on the hit");

    state.step(0.1, &idle());
    assert_eq!(state.pstate.lives, 2);
    let p = state.actors.get(player).unwrap();
    assert!(!p.collider_on);
    assert!(!p.motion_on);

    // Drift the corpse away from home, then wait out anim + tail + respawn
    // delay (0.8 + 0.4 + 2.0 seconds).
    state.actors.get_mut(player).unwrap().pos = Vec2::new(5.0, 0.0);
    for _ in 0..40 {
        state.step(0.1, &idle());
    }
    let p = state.actors.get(player).unwrap();
    assert_eq!(p.life, LifeState::Alive);
    assert_eq!(p.pos, spawn, "respawn returns to the original spawn point");
    assert_eq!(p.hp.hp, p.hp.max);
    assert!(p.collider_on && p.motion_on && p.visible);
    assert_eq!(state.pstate.shot, ShotKind::Regular, "weapon mode reset");
}

#[test]
fn out_of_lives_is_terminal_until_restart() {
    let mut state = GameState::new(2);
    let player = state.spawn_player(Vec2::new(0.0, -3.0));
    state.pstate.lives = 1;

    kill_player(&mut state);
    for _ in 0..40 {
        state.step(0.1, &idle());
    }
    assert!(state.player_out_of_lives());
    assert_eq!(
        state.actors.get(player).unwrap().life,
        LifeState::Defeated,
        "the player actor is never destroyed"
    );

    // Defeated holds indefinitely.
    for _ in 0..50 {
        state.step(0.1, &idle());
    }
    assert!(state.player_out_of_lives());

    // Restart re-enters play with no respawn delay.
    state.restart_game();
    state.step(0.1, &idle());
    let p = state.actors.get(player).unwrap();
    assert_eq!(p.life, LifeState::Alive);
    assert_eq!(state.pstate.lives, state.pstate.starting_lives);
    assert_eq!(state.score, 0);
}

#[test]
fn pickup_invincibility_expires_but_blocks_damage_while_armed() {
    let mut state = GameState::new(2);
    let player = state.spawn_player(Vec2::new(0.0, -3.0));
    state.apply_pickup(PickupKind::Invincibility);
    assert!(state.actors.get(player).unwrap().invincible);

    kill_player(&mut state);
    state.step(0.1, &idle());
    assert!(!state.is_player_dead(), "invincible rejects the hit");

    // Cooldown is 10s; it wears off and damage lands again.
    for _ in 0..110 {
        state.step(0.1, &idle());
    }
    assert!(!state.actors.get(player).unwrap().invincible);
    kill_player(&mut state);
    state.step(0.1, &idle());
    assert!(state.is_player_dead());
}

#[test]
fn one_up_clamps_at_max_lives() {
    let mut state = GameState::new(2);
    state.spawn_player(Vec2::new(0.0, -3.0));
    for _ in 0..10 {
        state.apply_pickup(PickupKind::OneUp);
    }
    assert_eq!(state.pstate.lives, blitz_sim::MAX_LIVES);
}

#[test]
fn game_over_sweeps_everything_but_the_player() {
    let mut state = GameState::new(2);
    let player = state.spawn_player(Vec2::new(0.0, -3.0));
    let _ = state.spawn_enemy(
        "raider",
        Vec2::new(3.0, 3.0),
        blitz_sim::motion::Motion::InDirection(blitz_sim::motion::InDirection::new(Vec2::Y)),
    );
    let _ = state.spawn_enemy(
        "drone",
        Vec2::new(-3.0, 3.0),
        blitz_sim::motion::Motion::InDirection(blitz_sim::motion::InDirection::new(Vec2::Y)),
    );
    assert_eq!(state.actors.len(), 3);

    state.game_over = true;
    state.step(0.1, &idle());
    assert_eq!(state.actors.len(), 1);
    assert!(state.actors.get(player).is_some());
}

#[test]
fn lifetime_expiry_skips_the_death_sequence() {
    let mut state = GameState::new(2);
    let id = state
        .spawn_enemy(
            "raider",
            Vec2::new(0.0, 3.0),
            blitz_sim::motion::Motion::InDirection(blitz_sim::motion::InDirection::new(Vec2::Y)),
        )
        .expect("spawn");
    {
        let a = state.actors.get_mut(id).unwrap();
        a.lifetime_s = Some(0.15);
        a.pickup_chance = 1.0;
    }
    let mut pickups = 0usize;
    for _ in 0..5 {
        let ctx = state.step(0.1, &idle());
        pickups += ctx.pickups.len();
    }
    assert!(state.actors.get(id).is_none(), "expired without dying stages");
    assert_eq!(pickups, 0, "no pickup roll on plain expiry");
}
