//! Rotation and steering helpers shared by every motion strategy.
//!
//! Orientation is an angle in degrees, `[0, 360)`, measured from the
//! canonical "up" vector `(0, 1)` winding counter-clockwise.

use glam::Vec2;

/// Facing angle for a direction vector, degrees in `[0, 360)`.
///
/// Winds so that a target right of "up" takes the long way around
/// (`360 - angle`). Enemy turning is tuned around this convention; do not
/// replace it with a shortest-path equivalent.
pub fn facing_deg(dir: Vec2) -> f32 {
    let d = dir.normalize_or_zero();
    if d == Vec2::ZERO {
        return 0.0;
    }
    let angle = d.dot(Vec2::Y).clamp(-1.0, 1.0).acos().to_degrees();
    if d.x > 0.0 { 360.0 - angle } else { angle }
}

/// Unit direction for a facing angle (the actor's local "up").
#[inline]
pub fn heading(rot_deg: f32) -> Vec2 {
    let r = rot_deg.to_radians();
    Vec2::new(-r.sin(), r.cos())
}

/// Wrap an angle into `[0, 360)`.
#[inline]
pub fn normalize_deg(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

/// Signed smallest difference `to - from`, in `[-180, 180)`.
#[inline]
pub fn delta_deg(from: f32, to: f32) -> f32 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}

/// Turn `current` toward `target` by at most `max_delta_deg` along the
/// shortest arc.
pub fn rotate_towards_deg(current: f32, target: f32, max_delta_deg: f32) -> f32 {
    let delta = delta_deg(current, target);
    let step = delta.clamp(-max_delta_deg.abs(), max_delta_deg.abs());
    normalize_deg(current + step)
}

/// One interpolation step: move fraction `t` (clamped to `[0, 1]`) of the
/// way along the shortest arc from `current` to `target`.
pub fn slerp_deg(current: f32, target: f32, t: f32) -> f32 {
    let delta = delta_deg(current, target);
    normalize_deg(current + delta * t.clamp(0.0, 1.0))
}

/// Lock-on test: true once two facings agree within the lock threshold.
/// Equivalent to a quaternion dot product `cos(delta / 2) > 0.999`.
#[inline]
pub fn aligned(a_deg: f32, b_deg: f32) -> bool {
    (delta_deg(a_deg, b_deg).to_radians() * 0.5).cos() > 0.999
}

/// Rotate a vector counter-clockwise by an angle in degrees.
pub fn rotate_vec(v: Vec2, deg: f32) -> Vec2 {
    let r = deg.to_radians();
    let (s, c) = r.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Step `from` toward `to` by at most `max_step`, never overshooting.
pub fn move_towards(from: Vec2, to: Vec2, max_step: f32) -> Vec2 {
    let delta = to - from;
    let dist = delta.length();
    if dist <= max_step || dist <= f32::EPSILON {
        to
    } else {
        from + delta / dist * max_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn facing_winds_long_way_on_the_right() {
        // Left of up keeps the small angle.
        assert!(approx(facing_deg(Vec2::new(-1.0, 0.0)), 90.0));
        assert!(approx(facing_deg(Vec2::new(-1.0, 1.0)), 45.0));
        // Right of up takes 360 - angle.
        assert!(approx(facing_deg(Vec2::new(1.0, 0.0)), 270.0));
        assert!(approx(facing_deg(Vec2::new(1.0, 1.0)), 315.0));
        // Straight up and down.
        assert!(approx(facing_deg(Vec2::Y), 0.0));
        assert!(approx(facing_deg(Vec2::new(0.0, -1.0)), 180.0));
    }

    #[test]
    fn heading_round_trips_facing() {
        for deg in [0.0f32, 45.0, 90.0, 180.0, 270.0, 315.0] {
            let dir = heading(deg);
            assert!(approx(normalize_deg(facing_deg(dir)), normalize_deg(deg)));
        }
    }

    #[test]
    fn rotate_towards_caps_the_step() {
        let r = rotate_towards_deg(0.0, 90.0, 30.0);
        assert!(approx(r, 30.0));
        // Shortest arc across the wrap point.
        let r = rotate_towards_deg(350.0, 10.0, 30.0);
        assert!(approx(r, 10.0));
    }

    #[test]
    fn aligned_threshold_is_a_few_degrees() {
        assert!(aligned(10.0, 12.0));
        assert!(!aligned(10.0, 20.0));
    }

    #[test]
    fn rotate_vec_quarter_turn() {
        let v = rotate_vec(Vec2::Y, 90.0);
        assert!(approx(v.x, -1.0) && approx(v.y, 0.0));
    }

    #[test]
    fn move_towards_never_overshoots() {
        let p = move_towards(Vec2::ZERO, Vec2::new(10.0, 0.0), 3.0);
        assert!(approx(p.x, 3.0));
        let p = move_towards(Vec2::ZERO, Vec2::new(1.0, 0.0), 3.0);
        assert!(approx(p.x, 1.0));
    }
}
