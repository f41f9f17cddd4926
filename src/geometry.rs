//! Geometry primitives for the node canvas.
//!
//! Nodes are positioned by their **center**; a rectangle's edges sit at
//! `center ± size / 2`. Everything here is pure and O(1).

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point (or translation) in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length when used as a translation.
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Width and height in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Replace each non-finite dimension with the one from `fallback`.
    pub fn finite_or(self, fallback: Size) -> Size {
        let pick = |v: f32, f: f32| if v.is_finite() { v } else { f };
        Size::new(pick(self.width, fallback.width), pick(self.height, fallback.height))
    }

    /// Per-dimension floor at `min`.
    pub fn max(self, min: Size) -> Size {
        Size::new(self.width.max(min.width), self.height.max(min.height))
    }

    /// Grow (or shrink) by a translation.
    pub fn expanded_by(self, delta: Point) -> Size {
        Size::new(self.width + delta.x, self.height + delta.y)
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

/// Axis-aligned rectangle described by its center and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub center: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(center: Point, size: Size) -> Self {
        Self { center, size }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.size.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.size.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.height / 2.0
    }

    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.size.is_finite()
    }

    /// Inclusive containment: points on an edge are inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        rectangles_overlap(self.center, self.size, other.center, other.size)
    }
}

/// True iff the two center-described rectangles intersect on both axes.
///
/// Touching edges count as overlapping.
pub fn rectangles_overlap(center_a: Point, size_a: Size, center_b: Point, size_b: Size) -> bool {
    let a = Rect::new(center_a, size_a);
    let b = Rect::new(center_b, size_b);

    !(a.right() < b.left() || a.left() > b.right() || a.bottom() < b.top() || a.top() > b.bottom())
}

/// Clamp `center` so a rectangle of `size` stays inside `[0, bounds]` on both axes.
///
/// When `bounds` is smaller than `size` on an axis the valid range is inverted;
/// the result collapses to the midpoint of that range (`bounds / 2`) and the
/// node protrudes on both sides.
pub fn clamp_center_to_bounds(center: Point, size: Size, bounds: Size) -> Point {
    Point::new(
        clamp_axis(center.x, size.width, bounds.width),
        clamp_axis(center.y, size.height, bounds.height),
    )
}

fn clamp_axis(value: f32, extent: f32, bound: f32) -> f32 {
    let lo = extent / 2.0;
    let hi = bound - extent / 2.0;
    if hi < lo {
        (lo + hi) / 2.0
    } else {
        // max/min rather than f32::clamp, which panics on a NaN bound
        value.max(lo).min(hi)
    }
}
