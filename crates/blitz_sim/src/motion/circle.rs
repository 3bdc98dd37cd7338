//! Circle and spiral strategies sharing one precomputed ring of unit points.
//!
//! The ring is built lazily on first use and is immutable afterwards, so
//! every circle/spiral instance reads the same table without copying it.

use std::sync::OnceLock;

use glam::Vec2;

use crate::rotation::{facing_deg, heading, move_towards, slerp_deg};

/// Number of precomputed points around the unit circle.
pub const MAX_POSITIONS: usize = 40;

/// Angular spacing between neighboring ring points, degrees.
pub const ANGLE_INC_DEG: f32 = 360.0 / MAX_POSITIONS as f32;

/// Arrival threshold for circle/spiral waypoints, world units.
const ARRIVE_DIST: f32 = 1.0;

static CIRCLE_POSITIONS: OnceLock<[Vec2; MAX_POSITIONS]> = OnceLock::new();

/// The shared unit-circle table.
pub fn circle_positions() -> &'static [Vec2; MAX_POSITIONS] {
    CIRCLE_POSITIONS.get_or_init(|| {
        let mut pts = [Vec2::ZERO; MAX_POSITIONS];
        for (i, p) in pts.iter_mut().enumerate() {
            let a = (i as f32 * ANGLE_INC_DEG).to_radians();
            *p = Vec2::new(a.cos(), a.sin());
        }
        pts
    })
}

/// Index of the table point whose world position is closest to `pos`.
/// Ties break to the first-found minimum.
fn closest_index_on(table: &[Vec2], pos: Vec2, center: Vec2, radius: f32) -> Option<usize> {
    if table.is_empty() {
        log::error!("circle positions: can't get valid index from empty table");
        return None;
    }
    let mut best = 0usize;
    let mut best_d = f32::INFINITY;
    for (i, p) in table.iter().enumerate() {
        let d = (center + radius * *p).distance(pos);
        if d < best_d {
            best = i;
            best_d = d;
        }
    }
    Some(best)
}

/// Closest ring index for the circle `center`/`radius` seen from `pos`.
pub fn closest_circle_index(pos: Vec2, center: Vec2, radius: f32) -> Option<usize> {
    closest_index_on(circle_positions(), pos, center, radius)
}

/// Direction of travel around the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleDir {
    Clockwise,
    CounterClockwise,
}

impl CircleDir {
    #[inline]
    fn step(self) -> i32 {
        match self {
            CircleDir::Clockwise => -1,
            CircleDir::CounterClockwise => 1,
        }
    }
}

/// Walks the ring of precomputed points around a center at a fixed radius.
/// Orientation leads one point ahead of the current movement target.
#[derive(Debug, Clone)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub dir: CircleDir,
    index: usize,
    last_target: Vec2,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32, dir: CircleDir) -> Self {
        Self {
            center,
            radius,
            dir,
            index: 0,
            last_target: center,
        }
    }

    /// Pick the starting ring index closest to the actor's current position.
    pub fn init(&mut self, pos: Vec2) {
        self.index = closest_circle_index(pos, self.center, self.radius).unwrap_or(0);
        self.last_target = self.point(self.index);
    }

    #[inline]
    fn wrap(i: i32) -> usize {
        if i >= MAX_POSITIONS as i32 {
            0
        } else if i < 0 {
            MAX_POSITIONS - 1
        } else {
            i as usize
        }
    }

    #[inline]
    fn point(&self, index: usize) -> Vec2 {
        self.center + self.radius * circle_positions()[index]
    }

    /// World position currently being approached on the ring.
    #[inline]
    pub fn current_target(&self) -> Vec2 {
        self.last_target
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move toward the current ring point; advance the index on arrival.
    pub fn update_position(&mut self, pos: &mut Vec2, speed: f32, dt: f32) {
        let target = self.point(self.index);
        self.last_target = target;
        *pos = move_towards(*pos, target, speed * dt);
        if target.distance(*pos) < ARRIVE_DIST {
            self.index = Self::wrap(self.index as i32 + self.dir.step());
        }
    }

    /// Turn toward the ring point one step ahead of the movement target.
    pub fn update_rotation(&mut self, pos: Vec2, rot_deg: &mut f32, rotation_speed: f32, dt: f32) {
        let look = self.point(Self::wrap(self.index as i32 + self.dir.step()));
        let desired = facing_deg(look - pos);
        *rot_deg = slerp_deg(*rot_deg, desired, rotation_speed * dt);
    }
}

/// Spiral sub-states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlyState {
    FlyIn,
    FlySpiral,
    FlyOut,
}

/// Circle motion with a radius that drifts toward `final_radius`, then an
/// optional fly-out along the current facing once the exit point is reached.
#[derive(Debug, Clone)]
pub struct Spiral {
    pub circle: Circle,
    /// Rate of radius change; sign is fixed at init to point at the target.
    pub radius_inc: f32,
    pub final_radius: f32,
    /// Exit angle on the circle, degrees; `None` never flies out.
    pub fly_out_from_deg: Option<f32>,
    state: FlyState,
    adjust_radius: bool,
    fly_out_armed: bool,
}

impl Spiral {
    pub fn new(circle: Circle, radius_inc: f32, final_radius: f32, fly_out_from_deg: Option<f32>) -> Self {
        Self {
            circle,
            radius_inc,
            final_radius,
            fly_out_from_deg,
            state: FlyState::FlyIn,
            adjust_radius: false,
            fly_out_armed: false,
        }
    }

    pub fn init(&mut self, pos: Vec2) {
        self.circle.init(pos);
        self.state = FlyState::FlyIn;
        self.fly_out_armed = false;
        // Equal start and final radius means no spiral at all.
        self.adjust_radius = self.final_radius != self.circle.radius;
        if self.final_radius < self.circle.radius {
            self.radius_inc = -self.radius_inc;
        }
    }

    #[inline]
    pub fn state(&self) -> FlyState {
        self.state
    }

    /// Force a state, e.g. an early fly-out when the player dies.
    pub fn set_state(&mut self, state: FlyState) {
        self.state = state;
    }

    fn exit_point(&self, angle_deg: f32) -> Vec2 {
        let a = angle_deg.to_radians();
        self.circle.center + self.circle.radius * Vec2::new(a.cos(), a.sin())
    }

    pub fn update_position(&mut self, pos: &mut Vec2, rot_deg: f32, speed: f32, dt: f32) {
        match self.state {
            FlyState::FlyIn => {
                self.circle.update_position(pos, speed, dt);
                if self.circle.current_target().distance(*pos) < ARRIVE_DIST {
                    self.state = FlyState::FlySpiral;
                }
            }
            FlyState::FlyOut => {
                *pos += heading(rot_deg) * speed * dt;
            }
            FlyState::FlySpiral => {
                if self.adjust_radius {
                    self.circle.radius += self.radius_inc * dt;
                    if self.circle.radius < 0.0 {
                        self.circle.radius = 0.0;
                    }
                    // Stop adjusting once the final radius is crossed in the
                    // direction of travel; the overshoot is kept.
                    let crossed = (self.radius_inc < 0.0 && self.circle.radius < self.final_radius)
                        || (self.radius_inc > 0.0 && self.circle.radius > self.final_radius);
                    if crossed {
                        self.adjust_radius = false;
                        self.fly_out_armed = true;
                    }
                }
                self.circle.update_position(pos, speed, dt);
                if self.fly_out_armed {
                    if let Some(angle) = self.fly_out_from_deg {
                        if self.exit_point(angle).distance(*pos) < ARRIVE_DIST {
                            self.state = FlyState::FlyOut;
                        }
                    }
                }
            }
        }
    }

    /// Rotation tracks the ring only while flying in or spiraling.
    pub fn update_rotation(&mut self, pos: Vec2, rot_deg: &mut f32, rotation_speed: f32, dt: f32) {
        if matches!(self.state, FlyState::FlyIn | FlyState::FlySpiral) {
            self.circle.update_rotation(pos, rot_deg, rotation_speed, dt);
        }
    }
}
