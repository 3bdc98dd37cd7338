//! Target-seeking strategies with rotation lock-on.

use blitz_core::components::ActorId;
use glam::Vec2;

use crate::rotation::{aligned, facing_deg, heading, move_towards, rotate_towards_deg};

/// Homes on a target actor, turning at a capped angular rate. With
/// `lock_when_aligned` the strategy stops re-tracking once the facing has
/// converged and flies straight ahead instead.
#[derive(Debug, Clone)]
pub struct Seek {
    pub target: Option<ActorId>,
    pub rotate_towards_target: bool,
    pub lock_when_aligned: bool,
    locked: bool,
    /// Last known normalized direction toward the target; kept when the
    /// target disappears so the mover degrades to a straight line.
    dir_to_target: Vec2,
}

impl Seek {
    pub fn new(target: ActorId, rotate_towards_target: bool, lock_when_aligned: bool) -> Self {
        Self {
            target: Some(target),
            rotate_towards_target,
            lock_when_aligned,
            locked: false,
            dir_to_target: Vec2::Y,
        }
    }

    #[inline]
    pub fn rotation_locked(&self) -> bool {
        self.locked
    }

    pub fn update_rotation(
        &mut self,
        pos: Vec2,
        rot_deg: &mut f32,
        rotation_speed: f32,
        dt: f32,
        target_pos: Option<Vec2>,
    ) {
        if !self.rotate_towards_target {
            return;
        }
        if self.lock_when_aligned && self.locked {
            return;
        }
        let Some(tp) = target_pos else {
            return;
        };
        let desired = facing_deg(tp - pos);
        *rot_deg = rotate_towards_deg(*rot_deg, desired, rotation_speed * dt);
        if aligned(*rot_deg, desired) {
            self.locked = true;
        }
    }

    pub fn update_position(
        &mut self,
        pos: &mut Vec2,
        rot_deg: f32,
        speed: f32,
        dt: f32,
        target_pos: Option<Vec2>,
    ) {
        if let Some(tp) = target_pos {
            self.dir_to_target = (tp - *pos).normalize_or_zero();
        }
        if self.lock_when_aligned && self.locked {
            *pos += heading(rot_deg) * speed * dt;
        } else {
            *pos += self.dir_to_target * speed * dt;
        }
    }
}

/// Seeks a point offset from the target instead of the target itself,
/// damping speed on approach and re-anchoring the destination once close.
#[derive(Debug, Clone)]
pub struct SeekOffset {
    pub seek: Seek,
    offset: Vec2,
    offset_distance: f32,
    dampen_distance: f32,
    min_speed: f32,
    move_to: Vec2,
    speed: f32,
    base_speed: f32,
}

impl SeekOffset {
    pub fn new(
        target: ActorId,
        offset: Vec2,
        offset_distance: f32,
        dampen_distance: f32,
        min_speed: f32,
    ) -> Self {
        Self {
            seek: Seek::new(target, true, false),
            offset: offset.normalize_or_zero(),
            offset_distance,
            dampen_distance,
            min_speed,
            move_to: Vec2::ZERO,
            speed: 0.0,
            base_speed: 0.0,
        }
    }

    pub fn init(&mut self, base_speed: f32, target_pos: Option<Vec2>) {
        self.base_speed = base_speed;
        self.speed = base_speed;
        self.move_to = target_pos.unwrap_or(Vec2::ZERO) + self.offset * self.offset_distance;
    }

    /// Current destination (target plus offset at the last anchor time).
    #[inline]
    pub fn destination(&self) -> Vec2 {
        self.move_to
    }

    pub fn update_position(&mut self, pos: &mut Vec2, dt: f32, target_pos: Option<Vec2>) {
        *pos = move_towards(*pos, self.move_to, self.speed * dt);
        let distance = pos.distance(self.move_to);

        if self.dampen_distance > 1.0 && distance < self.dampen_distance {
            self.speed = (self.speed * distance / self.dampen_distance).max(self.min_speed);
        } else if let Some(tp) = target_pos {
            // Outside the damping window: chase the live offset point at
            // full speed.
            self.move_to = tp + self.offset * self.offset_distance;
            self.speed = self.base_speed;
        }

        if distance < 1.0 {
            if let Some(tp) = target_pos {
                self.move_to = tp + self.offset * self.offset_distance;
            }
        }
    }

    pub fn update_rotation(
        &mut self,
        pos: Vec2,
        rot_deg: &mut f32,
        rotation_speed: f32,
        dt: f32,
        target_pos: Option<Vec2>,
    ) {
        self.seek
            .update_rotation(pos, rot_deg, rotation_speed, dt, target_pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_locks_after_convergence_and_flies_straight() {
        let mut s = Seek::new(ActorId(9), true, true);
        let mut pos = Vec2::new(0.0, 0.0);
        let mut rot = 0.0f32;
        let target = Vec2::new(0.0, 5.0);
        for _ in 0..100 {
            s.update_rotation(pos, &mut rot, 180.0, 0.016, Some(target));
            s.update_position(&mut pos, rot, 2.0, 0.016, Some(target));
        }
        assert!(s.rotation_locked());
        // Once locked, a moved target no longer bends the course.
        let rot_before = rot;
        let moved = Vec2::new(8.0, 0.0);
        for _ in 0..10 {
            s.update_rotation(pos, &mut rot, 180.0, 0.016, Some(moved));
            s.update_position(&mut pos, rot, 2.0, 0.016, Some(moved));
        }
        assert_eq!(rot, rot_before);
    }

    #[test]
    fn seek_without_lock_keeps_tracking() {
        let mut s = Seek::new(ActorId(9), true, false);
        let mut pos = Vec2::ZERO;
        let mut rot = 0.0f32;
        for _ in 0..100 {
            s.update_rotation(pos, &mut rot, 90.0, 0.016, Some(Vec2::new(-4.0, 0.0)));
            s.update_position(&mut pos, rot, 1.0, 0.016, Some(Vec2::new(-4.0, 0.0)));
        }
        assert!(pos.x < -0.5);
    }

    #[test]
    fn offset_destination_anchors_near_target() {
        let mut s = SeekOffset::new(ActorId(3), Vec2::Y, 2.0, 1.0, 0.5);
        s.init(4.0, Some(Vec2::ZERO));
        assert_eq!(s.destination(), Vec2::new(0.0, 2.0));
        let mut pos = Vec2::new(0.0, 10.0);
        for _ in 0..20 {
            s.update_position(&mut pos, 0.016, Some(Vec2::new(1.0, 0.0)));
        }
        // Re-anchored onto the moved target's offset point.
        assert_eq!(s.destination(), Vec2::new(1.0, 2.0));
    }
}
