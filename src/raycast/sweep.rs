//! Swept box against the grid.
//!
//! The box is reduced to a single traced point on its leading side: on the
//! dominant axis of travel the point sits on the leading edge, and on the
//! other axis it is pushed toward the leading corner in proportion to the
//! slope of the displacement. Only that point is walked through the grid, so
//! a box larger than one cell can pass by a solid cell that touches its
//! leading edge away from the traced point.

use glam::Vec2;
use tracing::trace;

use crate::grid::{GridDescriptor, Occupancy};
use crate::raycast::dda::first_hit;
use crate::raycast::{bounds, TraceHit};
use crate::types::{Aabb, Segment};

/// First solid cell met by `aabb` while moving by `displacement`.
///
/// `position` in the returned hit is the box center at the moment of
/// contact and `distance` is measured along `displacement`.
pub fn sweep_aabb<O: Occupancy + ?Sized>(
    grid: &GridDescriptor<'_, O>,
    aabb: Aabb,
    displacement: Vec2,
) -> Option<TraceHit> {
    if !bounds::overlaps_grid(grid.info(), &aabb.swept_bounds(displacement)) {
        trace!(?aabb, ?displacement, "swept box misses grid bounds");
        return None;
    }

    let offset = leading_offset(aabb.half_extents, displacement);
    let start = aabb.center + offset;
    let segment = Segment::new(start, start + displacement);

    first_hit(grid, segment, displacement.length()).map(|hit| TraceHit {
        position: hit.position - offset,
        ..hit
    })
}

/// Offset from the box center to the traced point for a given direction.
pub fn leading_offset(half_extents: Vec2, displacement: Vec2) -> Vec2 {
    let abs = displacement.abs();
    if abs.x == 0.0 && abs.y == 0.0 {
        return Vec2::ZERO;
    }

    if abs.x >= abs.y {
        Vec2::new(
            half_extents.x.copysign(displacement.x),
            half_extents.y * displacement.y / abs.x,
        )
    } else {
        Vec2::new(
            half_extents.x * displacement.x / abs.y,
            half_extents.y.copysign(displacement.y),
        )
    }
}
