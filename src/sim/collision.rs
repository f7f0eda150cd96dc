//! Collision detection and response for axis-aligned geometry
//!
//! Every collider in the game is a rectangle; the ball is tested by its
//! bounding square. Overlap tests are strict, so touching edges do not count.

use glam::Vec2;

use crate::consts::PADDLE_STEER_DIVISOR;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle spanning `center ± half_extents`
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            pos: center - half_extents,
            size: half_extents * 2.0,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.pos
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Strict AABB intersection
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min().cmplt(other.max()).all() && self.max().cmpgt(other.min()).all()
    }
}

/// Which face of a rectangle the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactAxis {
    /// Left or right face: horizontal velocity flips
    Side,
    /// Top or bottom face: vertical velocity flips
    Face,
}

/// Penetration depth of a ball into a rectangle along each axis.
///
/// Positive components mean overlap on that axis.
pub fn penetration(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> Vec2 {
    rect.half_extents() + Vec2::splat(ball_radius) - (ball_pos - rect.center()).abs()
}

/// Pick the struck face from the shallower penetration axis.
///
/// Equal depths resolve to `Face`.
pub fn impact_axis(depth: Vec2) -> ImpactAxis {
    if depth.x < depth.y {
        ImpactAxis::Side
    } else {
        ImpactAxis::Face
    }
}

/// Reflect velocity off the given face
#[inline]
pub fn reflect(vel: Vec2, axis: ImpactAxis) -> Vec2 {
    match axis {
        ImpactAxis::Side => Vec2::new(-vel.x, vel.y),
        ImpactAxis::Face => Vec2::new(vel.x, -vel.y),
    }
}

/// Horizontal speed after a paddle hit.
///
/// Hitting left of center sends the ball left, right of center sends it
/// right, proportionally to the offset.
#[inline]
pub fn paddle_steer(ball_x: f32, paddle_center_x: f32) -> f32 {
    (ball_x - paddle_center_x) / PADDLE_STEER_DIVISOR
}
