use glam::UVec2;

use crate::grid::Grid2d;
use crate::types::{EMPTY, SOLID};

/// Read-only occupancy lookup used by the traces.
///
/// `query` is only called for cells inside the grid the capability is paired
/// with. It returns [`EMPTY`] for free cells and any other value for solid
/// ones; that value is handed back to the caller untouched in the hit.
/// Implementations must not change their answer during a trace.
pub trait Occupancy {
    fn query(&self, cell: UVec2) -> i32;
}

impl<F> Occupancy for F
where
    F: Fn(u32, u32) -> i32,
{
    #[inline]
    fn query(&self, cell: UVec2) -> i32 {
        self(cell.x, cell.y)
    }
}

impl Occupancy for Grid2d<i32> {
    #[inline]
    fn query(&self, cell: UVec2) -> i32 {
        self.get(&cell).copied().unwrap_or(EMPTY)
    }
}

impl Occupancy for Grid2d<bool> {
    #[inline]
    fn query(&self, cell: UVec2) -> i32 {
        match self.get(&cell) {
            Some(true) => SOLID,
            _ => EMPTY,
        }
    }
}
