use std::fmt;

use glam::{IVec2, Vec2};

use crate::grid::Occupancy;
use crate::raycast::{self, TraceHit};
use crate::types::{Aabb, Circle, GridInfo, Segment};

/// Grid placement paired with a borrowed occupancy capability.
///
/// This is what the traces run against. It is cheap to copy and holds nothing
/// beyond the borrow, so one descriptor per collidable layer can be built
/// right before tracing.
pub struct GridDescriptor<'a, O: ?Sized> {
    info: GridInfo,
    occupancy: &'a O,
}

impl<'a, O: Occupancy + ?Sized> GridDescriptor<'a, O> {
    /// `info.cell_size` must be positive; a zero cell size divides by zero in
    /// every trace.
    pub fn new(info: GridInfo, occupancy: &'a O) -> Self {
        debug_assert!(
            info.cell_size > 0.0,
            "cell size must be positive, got {}",
            info.cell_size
        );
        Self { info, occupancy }
    }

    pub fn info(&self) -> &GridInfo {
        &self.info
    }

    /// Occupancy of `cell`, or `None` when the cell lies outside the grid.
    #[inline]
    pub fn query(&self, cell: IVec2) -> Option<i32> {
        if !self.info.contains_cell(cell) {
            return None;
        }
        Some(self.occupancy.query(cell.as_uvec2()))
    }

    /// First solid cell along `segment`.
    pub fn trace_ray(&self, segment: Segment) -> Option<TraceHit> {
        raycast::trace_ray(self, segment)
    }

    /// First solid cell met by `aabb` moving by `displacement`.
    pub fn sweep_aabb(&self, aabb: Aabb, displacement: Vec2) -> Option<TraceHit> {
        raycast::sweep_aabb(self, aabb, displacement)
    }

    /// Not supported yet, always `None`.
    pub fn sweep_circle(&self, circle: Circle, displacement: Vec2) -> Option<TraceHit> {
        raycast::sweep_circle(self, circle, displacement)
    }
}

impl<O: ?Sized> Clone for GridDescriptor<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: ?Sized> Copy for GridDescriptor<'_, O> {}

impl<O: ?Sized> fmt::Debug for GridDescriptor<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridDescriptor")
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}
