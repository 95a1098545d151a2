//! Grid metadata.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::types::{Bounds, DEFAULT_CELL_SIZE};

/// Placement and size of a world-aligned grid.
///
/// `offset` is the world position of the outer corner of cell (0, 0). Cells
/// are square with side `cell_size` and are addressed by `x` in `[0, width)`
/// and `y` in `[0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridInfo {
    pub width: u32,
    pub height: u32,
    pub cell_size: f32,
    pub offset: Vec2,
}

impl Default for GridInfo {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            cell_size: DEFAULT_CELL_SIZE,
            offset: Vec2::ZERO,
        }
    }
}

impl GridInfo {
    pub fn new(width: u32, height: u32, cell_size: f32, offset: Vec2) -> Self {
        Self {
            width,
            height,
            cell_size,
            offset,
        }
    }

    pub fn square(width: u32, cell_size: f32) -> Self {
        Self {
            width,
            height: width,
            cell_size,
            ..Default::default()
        }
    }

    /// Width of the grid in world units.
    #[inline]
    pub fn world_width(&self) -> f32 {
        self.width as f32 * self.cell_size
    }

    /// Height of the grid in world units.
    #[inline]
    pub fn world_height(&self) -> f32 {
        self.height as f32 * self.cell_size
    }

    /// World rectangle covered by the grid.
    #[inline]
    pub fn world_bounds(&self) -> Bounds {
        Bounds::from_min_size(
            self.offset,
            Vec2::new(self.world_width(), self.world_height()),
        )
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// World point to continuous cell coordinates. No bounds check.
    #[inline]
    pub fn world_to_local(&self, pos: Vec2) -> Vec2 {
        (pos - self.offset) / self.cell_size
    }

    /// Continuous cell coordinates back to a world point.
    #[inline]
    pub fn local_to_world(&self, pos: Vec2) -> Vec2 {
        pos * self.cell_size + self.offset
    }

    /// Cell containing a world point, which may lie outside the grid.
    #[inline]
    pub fn world_to_cell(&self, pos: Vec2) -> IVec2 {
        self.world_to_local(pos).floor().as_ivec2()
    }

    /// World position of a cell's center.
    #[inline]
    pub fn cell_center(&self, cell: IVec2) -> Vec2 {
        self.local_to_world(cell.as_vec2() + Vec2::splat(0.5))
    }

    /// equivalent to (x >= 0 && x < width) for signed x
    #[inline]
    pub fn contains_cell(&self, cell: IVec2) -> bool {
        (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }
}
