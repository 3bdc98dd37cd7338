//! Damage acceptance, clamping and the force-death sentinel.

use blitz_core::components::{DamageEvent, DamageKind, LifeState};
use blitz_sim::{GameState, PlayerInput};
use glam::Vec2;

fn idle() -> PlayerInput {
    PlayerInput::default()
}

#[test]
fn unaccepted_kind_is_ignored() {
    let mut state = GameState::new(1);
    let id = state
        .spawn_enemy(
            "raider",
            Vec2::new(0.0, 3.0),
            blitz_sim::motion::Motion::InDirection(blitz_sim::motion::InDirection::new(Vec2::Y)),
        )
        .expect("spawn");
    let hp_before = state.actors.get(id).unwrap().hp.hp;
    state.queue_damage(
        id,
        None,
        DamageEvent {
            kind: DamageKind::EnemyBullet,
            amount: 10,
            destroy_source: false,
        },
    );
    state.step(0.016, &idle());
    let a = state.actors.get(id).expect("still present");
    assert_eq!(a.hp.hp, hp_before);
    assert_eq!(a.life, LifeState::Alive);
}

#[test]
fn overkill_clamps_to_zero() {
    let mut state = GameState::new(1);
    let id = state
        .spawn_enemy(
            "obstacle",
            Vec2::ZERO,
            blitz_sim::motion::Motion::InDirection(blitz_sim::motion::InDirection::new(Vec2::Y)),
        )
        .expect("spawn");
    state.queue_damage(
        id,
        None,
        DamageEvent {
            kind: DamageKind::PlayerBullet,
            amount: 2000,
            destroy_source: false,
        },
    );
    state.step(0.016, &idle());
    let a = state.actors.get(id).expect("dying, not yet removed");
    assert_eq!(a.hp.hp, 0);
    assert!(a.is_dead());
}

#[test]
fn force_death_kills_at_full_health() {
    let mut state = GameState::new(1);
    let id = state
        .spawn_enemy(
            "obstacle",
            Vec2::ZERO,
            blitz_sim::motion::Motion::InDirection(blitz_sim::motion::InDirection::new(Vec2::Y)),
        )
        .expect("spawn");
    state.queue_damage(
        id,
        None,
        DamageEvent {
            kind: DamageKind::Bomb,
            amount: -1,
            destroy_source: false,
        },
    );
    state.step(0.016, &idle());
    let a = state.actors.get(id).expect("dying, not yet removed");
    assert_eq!(a.hp.hp, 0);
    assert!(a.is_dead());
}

#[test]
fn zero_and_negative_amounts_are_ignored() {
    let mut state = GameState::new(1);
    let id = state
        .spawn_enemy(
            "raider",
            Vec2::ZERO,
            blitz_sim::motion::Motion::InDirection(blitz_sim::motion::InDirection::new(Vec2::Y)),
        )
        .expect("spawn");
    for amount in [0, -5, -100] {
        state.queue_damage(
            id,
            None,
            DamageEvent {
                kind: DamageKind::PlayerBullet,
                amount,
                destroy_source: false,
            },
        );
    }
    state.step(0.016, &idle());
    let a = state.actors.get(id).expect("untouched");
    assert_eq!(a.hp.hp, 3);
    assert_eq!(a.life, LifeState::Alive);
}

#[test]
fn invincible_rejects_even_force_death() {
    let mut state = GameState::new(1);
    let id = state
        .spawn_enemy(
            "raider",
            Vec2::ZERO,
            blitz_sim::motion::Motion::InDirection(blitz_sim::motion::InDirection::new(Vec2::Y)),
        )
        .expect("spawn");
    state.actors.get_mut(id).unwrap().invincible = true;
    state.queue_damage(
        id,
        None,
        DamageEvent {
            kind: DamageKind::PlayerBullet,
            amount: -1,
            destroy_source: false,
        },
    );
    state.step(0.016, &idle());
    let a = state.actors.get(id).expect("untouched");
    assert_eq!(a.life, LifeState::Alive);
    assert!(a.hp.alive());
}

#[test]
fn lethal_player_bullet_awards_score_and_destroys_source() {
    let mut state = GameState::new(1);
    let id = state
        .spawn_enemy(
            "raider",
            Vec2::ZERO,
            blitz_sim::motion::Motion::InDirection(blitz_sim::motion::InDirection::new(Vec2::Y)),
        )
        .expect("spawn");
    // Stand-in for the bullet that dealt the hit.
    let src = state
        .spawn_enemy(
            "drone",
            Vec2::new(5.0, 5.0),
            blitz_sim::motion::Motion::InDirection(blitz_sim::motion::InDirection::new(Vec2::Y)),
        )
        .expect("spawn src");
    state.queue_damage(
        id,
        Some(src),
        DamageEvent {
            kind: DamageKind::PlayerBullet,
            amount: 3,
            destroy_source: true,
        },
    );
    state.step(0.016, &idle());
    assert_eq!(state.score, 100);
    let a = state.actors.get(id).expect("dying");
    assert_eq!(a.hp.hp, 0);
    assert!(a.is_dead());
    // The damage-dealing source was scheduled for removal.
    assert!(state.actors.get(src).is_none());
}
