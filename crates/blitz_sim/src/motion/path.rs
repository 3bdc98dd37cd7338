//! Waypoint-path following and leader-trail following.

use blitz_core::components::ActorId;
use glam::Vec2;

use crate::rotation::{facing_deg, heading, move_towards, slerp_deg};

/// Arrival threshold for path waypoints, world units.
const WAYPOINT_DIST: f32 = 0.1;

/// Follows a fixed list of waypoints in order, optionally looping.
/// Speed is damped toward `min_speed` when approaching each waypoint.
#[derive(Debug, Clone)]
pub struct Path {
    waypoints: Vec<Vec2>,
    loop_path: bool,
    dampen_distance: f32,
    min_speed: f32,
    /// Next waypoint to hand out; `waypoints.len()` once a non-looping path
    /// has been consumed.
    index: usize,
    dest: Vec2,
    speed: f32,
    base_speed: f32,
}

impl Path {
    pub fn new(waypoints: Vec<Vec2>, loop_path: bool, dampen_distance: f32, min_speed: f32) -> Self {
        Self {
            waypoints,
            loop_path,
            dampen_distance,
            min_speed,
            index: 0,
            dest: Vec2::ZERO,
            speed: 0.0,
            base_speed: 0.0,
        }
    }

    pub fn init(&mut self, base_speed: f32) {
        if self.waypoints.is_empty() {
            log::warn!("path motion initialized with no waypoints");
        }
        self.base_speed = base_speed;
        self.speed = base_speed;
        self.index = 0;
        self.dest = self.next_point(self.loop_path);
    }

    /// Hand out the next waypoint; wraps when looping, else freezes the
    /// index at `len` and keeps returning a zero vector.
    fn next_point(&mut self, loop_path: bool) -> Vec2 {
        let mut next = Vec2::ZERO;
        if self.index < self.waypoints.len() {
            next = self.waypoints[self.index];
            self.index += 1;
            if self.index >= self.waypoints.len() {
                self.index = if loop_path { 0 } else { self.waypoints.len() };
            }
        }
        next
    }

    pub fn update_position(&mut self, pos: &mut Vec2, dt: f32) {
        let distance = pos.distance(self.dest);
        if self.dampen_distance > 1.0 && distance < self.dampen_distance {
            self.speed = (self.speed * distance / self.dampen_distance).max(self.min_speed);
        }
        *pos = move_towards(*pos, self.dest, self.speed * dt);
        if pos.distance(self.dest) < WAYPOINT_DIST
            && (self.loop_path || self.index < self.waypoints.len())
        {
            self.dest = self.next_point(self.loop_path);
            self.speed = self.base_speed;
        }
    }

    pub fn update_rotation(&mut self, pos: Vec2, rot_deg: &mut f32, rotation_speed: f32, dt: f32) {
        let desired = facing_deg(self.dest - pos);
        *rot_deg = slerp_deg(*rot_deg, desired, rotation_speed * dt);
    }

    /// True once a non-looping path has been fully walked.
    pub fn reached_end(&self, pos: Vec2) -> bool {
        if self.loop_path {
            return false;
        }
        match self.waypoints.last() {
            Some(last) => self.index == self.waypoints.len() && pos.distance(*last) < WAYPOINT_DIST,
            None => false,
        }
    }
}

/// Trails a leader by replaying its recent positions from a bounded ring.
///
/// While the leader exists its position is sampled every `add_frequency`
/// seconds. When the leader is destroyed, the remaining buffered points are
/// consumed without adding more; once drained, the follower degrades to
/// straight-ahead motion along its current facing.
#[derive(Debug, Clone)]
pub struct FollowLeader {
    pub leader: Option<ActorId>,
    add_frequency: f32,
    capacity: usize,
    trail: Vec<Vec2>,
    add_index: usize,
    get_index: usize,
    timer: f32,
    follow: bool,
    dest: Vec2,
}

/// Arrival threshold for trail points, world units.
const TRAIL_DIST: f32 = 1.0;

impl FollowLeader {
    pub fn new(leader: ActorId, add_frequency: f32, capacity: usize) -> Self {
        Self {
            leader: Some(leader),
            add_frequency,
            capacity,
            trail: Vec::new(),
            add_index: 0,
            get_index: 0,
            timer: 0.0,
            follow: true,
            dest: Vec2::ZERO,
        }
    }

    /// Snap the initial facing toward the leader and aim at its position.
    pub fn init(&mut self, pos: Vec2, rot_deg: &mut f32, leader_pos: Option<Vec2>) {
        self.follow = true;
        self.timer = 0.0;
        self.get_index = 0;
        self.add_index = 0;
        match leader_pos {
            Some(lp) => {
                self.dest = lp;
                *rot_deg = facing_deg(lp - pos);
            }
            None => self.dest = pos,
        }
    }

    /// Still consuming the trail (or the live leader)?
    #[inline]
    pub fn following(&self) -> bool {
        self.follow
    }

    fn push(&mut self, p: Vec2) {
        if self.trail.len() < self.capacity {
            self.trail.push(p);
            self.add_index = 0;
        } else {
            self.trail[self.add_index] = p;
            self.add_index += 1;
            if self.add_index >= self.trail.len() {
                self.add_index = 0;
            }
        }
    }

    fn next_point(&mut self, loop_path: bool) -> Vec2 {
        let mut next = Vec2::ZERO;
        if self.get_index < self.trail.len() {
            next = self.trail[self.get_index];
            self.get_index += 1;
            if self.get_index >= self.trail.len() {
                self.get_index = if loop_path { 0 } else { self.trail.len() };
            }
        }
        next
    }

    pub fn update_position(
        &mut self,
        pos: &mut Vec2,
        rot_deg: f32,
        speed: f32,
        dt: f32,
        leader_pos: Option<Vec2>,
    ) {
        let mut loop_path = true;
        if self.follow && leader_pos.is_some() {
            self.timer += dt;
            if self.timer > self.add_frequency {
                self.timer = 0.0;
                if let Some(lp) = leader_pos {
                    self.push(lp);
                }
            }
        } else if self.follow && leader_pos.is_none() && self.get_index < self.trail.len() {
            // Leader destroyed: finish the remaining buffered points.
            loop_path = false;
        } else {
            self.follow = false;
        }

        if self.follow {
            *pos = move_towards(*pos, self.dest, speed * dt);
            if pos.distance(self.dest) < TRAIL_DIST {
                self.dest = self.next_point(loop_path);
            }
        } else {
            *pos += heading(rot_deg) * speed * dt;
        }
    }

    pub fn update_rotation(&mut self, pos: Vec2, rot_deg: &mut f32, rotation_speed: f32, dt: f32) {
        if self.follow {
            let desired = facing_deg(self.dest - pos);
            *rot_deg = slerp_deg(*rot_deg, desired, rotation_speed * dt);
        }
    }
}
