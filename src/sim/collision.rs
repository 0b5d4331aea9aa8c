//! Axis-aligned collision detection
//!
//! Every entity in the world is a rectangle. Overlap uses half-open
//! intervals, so rectangles that merely share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub const fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// True iff the rectangles intersect on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        overlaps(self, other)
    }
}

/// Half-open rectangle intersection test. Symmetric in its arguments.
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Anything that occupies a rectangle in the world
pub trait Bounded {
    fn bounds(&self) -> Aabb;

    fn collides_with<B: Bounded + ?Sized>(&self, other: &B) -> bool {
        overlaps(&self.bounds(), &other.bounds())
    }
}

impl Bounded for Aabb {
    fn bounds(&self) -> Aabb {
        *self
    }
}
