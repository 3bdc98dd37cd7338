//! Spiral sub-state transitions: fly-in, radius drift, fly-out.

use blitz_sim::motion::{Circle, CircleDir, FlyState, Motion, Spiral};
use blitz_sim::{GameState, PlayerInput};
use glam::Vec2;

fn idle() -> PlayerInput {
    PlayerInput::default()
}

fn spiral_state(state: &GameState, id: blitz_core::components::ActorId) -> Option<FlyState> {
    match &state.actors.get(id)?.motion {
        Some(Motion::Spiral(s)) => Some(s.state()),
        _ => None,
    }
}

#[test]
fn shrinking_spiral_flies_out_at_the_exit_angle() {
    let mut state = GameState::new(9);
    let center = Vec2::new(0.0, 1.0);
    let id = state
        .spawn_enemy(
            "spinner",
            Vec2::new(3.2, 1.0),
            Motion::Spiral(Spiral::new(
                Circle::new(center, 3.0, CircleDir::Clockwise),
                0.5,
                1.0,
                Some(270.0),
            )),
        )
        .expect("spawn");

    let mut saw_spiral = false;
    let mut flew_out_at = None;
    for tick in 0..4000 {
        state.step(0.016, &idle());
        match spiral_state(&state, id) {
            Some(FlyState::FlySpiral) => saw_spiral = true,
            Some(FlyState::FlyOut) => {
                flew_out_at = Some(tick);
                break;
            }
            _ => {}
        }
    }
    assert!(saw_spiral, "reached the spiral sub-state");
    assert!(flew_out_at.is_some(), "armed and flew out");

    // The radius overshoots the final value slightly and is kept there.
    if let Some(Motion::Spiral(s)) = &state.actors.get(id).unwrap().motion {
        assert!(s.circle.radius <= 1.0 + 0.1);
        assert!(s.circle.radius >= 0.0);
    }

    // Fly-out is a straight line along the current facing.
    let p0 = state.actors.get(id).unwrap().pos;
    state.step(0.016, &idle());
    let p1 = state.actors.get(id).unwrap().pos;
    state.step(0.016, &idle());
    let p2 = state.actors.get(id).unwrap().pos;
    let d1 = (p1 - p0).normalize();
    let d2 = (p2 - p1).normalize();
    assert!(d1.dot(d2) > 0.999);
}

#[test]
fn spiral_without_exit_angle_never_flies_out() {
    let mut state = GameState::new(9);
    let center = Vec2::new(0.0, 1.0);
    let id = state
        .spawn_enemy(
            "spinner",
            Vec2::new(3.2, 1.0),
            Motion::Spiral(Spiral::new(
                Circle::new(center, 3.0, CircleDir::Clockwise),
                0.5,
                1.0,
                None,
            )),
        )
        .expect("spawn");
    for _ in 0..4000 {
        state.step(0.016, &idle());
        assert_ne!(spiral_state(&state, id), Some(FlyState::FlyOut));
    }
}
