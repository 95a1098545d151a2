//! Geometric primitives used by the grid traces.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-axis-aligned rectangle.
/// Convention: [min.x, max.x) x [min.y, max.y) in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Open-interval overlap: rectangles that only share an edge do not
    /// overlap, and a zero-size rectangle overlaps only when it lies strictly
    /// inside the other on both axes.
    #[inline]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Line segment in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Axis-aligned rectangle spanned by both endpoints.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: self.start.min(self.end),
            max: self.start.max(self.end),
        }
    }
}

/// Axis-aligned box given by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min(), self.max())
    }

    /// Smallest rectangle containing the box at its start and after moving by
    /// `displacement`.
    pub fn swept_bounds(&self, displacement: Vec2) -> Bounds {
        let moved = Aabb::new(self.center + displacement, self.half_extents);
        self.bounds().union(&moved.bounds())
    }
}

/// Circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Bounds::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Bounds::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn nested_bounds_overlap() {
        let outer = Bounds::new(Vec2::ZERO, Vec2::splat(10.0));
        let inner = Bounds::new(Vec2::splat(2.0), Vec2::splat(3.0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn degenerate_bounds_overlap_only_when_strictly_inside() {
        let grid = Bounds::new(Vec2::ZERO, Vec2::splat(10.0));
        let point = Segment::new(Vec2::splat(5.0), Vec2::splat(5.0)).bounds();
        assert!(grid.overlaps(&point));

        let on_edge = Segment::new(Vec2::new(0.0, 5.0), Vec2::new(0.0, 5.0)).bounds();
        assert!(!grid.overlaps(&on_edge));
    }

    #[test]
    fn segment_bounds_use_vertical_extent() {
        let seg = Segment::new(Vec2::new(4.0, -20.0), Vec2::new(5.0, 8.0));
        let bounds = seg.bounds();
        assert_eq!(bounds.min, Vec2::new(4.0, -20.0));
        assert_eq!(bounds.size(), Vec2::new(1.0, 28.0));
    }

    #[test]
    fn swept_bounds_cover_start_and_end() {
        let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0));
        let swept = aabb.swept_bounds(Vec2::new(10.0, -4.0));
        assert_eq!(swept.min, Vec2::new(-1.0, -6.0));
        assert_eq!(swept.max, Vec2::new(11.0, 2.0));
    }
}
