use glam::{UVec2, Vec2};

pub mod bounds;
pub mod circle;
pub mod dda;
pub mod sweep;

pub use circle::sweep_circle;
pub use dda::trace_ray;
pub use sweep::sweep_aabb;

use crate::types::EMPTY;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TraceHit {
    /// Occupancy value of the struck cell, never [`EMPTY`].
    pub value: i32,
    /// Grid cell that contains the first hit.
    pub cell: UVec2,
    /// Point of contact in world units. For box sweeps this is the box center
    /// at the moment of contact.
    pub position: Vec2,
    /// Normal of the struck face, one of `(±1, 0)` or `(0, ±1)`.
    pub normal: Vec2,
    /// Distance travelled along the segment or displacement (world units).
    pub distance: f32,
}

impl TraceHit {
    /// Extract hit distance, or return `default` if miss.
    pub fn distance_or(hit: Option<Self>, default: f32) -> f32 {
        hit.map(|h| h.distance).unwrap_or(default)
    }

    /// Struck occupancy value, or [`EMPTY`] if miss.
    pub fn value_or_empty(hit: Option<Self>) -> i32 {
        hit.map(|h| h.value).unwrap_or(EMPTY)
    }
}
