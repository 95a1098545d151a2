use glam::{UVec2, Vec2};

use crate::grid::{GridDescriptor, Occupancy};
use crate::types::{GridError, GridInfo};

/// Owned row-major grid of cells.
#[derive(Debug, Clone)]
pub struct Grid2d<T> {
    info: GridInfo,
    data: Vec<T>,
}

impl<T> Grid2d<T> {
    pub fn new(info: GridInfo, data: Vec<T>) -> Result<Self, GridError> {
        let expected_len = info.cell_count();
        if data.len() != expected_len {
            return Err(GridError::InvalidMetadata(format!(
                "data length {} does not match grid size {}",
                data.len(),
                expected_len
            )));
        }
        if info.cell_size.is_nan() || info.cell_size <= 0.0 {
            return Err(GridError::InvalidMetadata(format!(
                "cell size must be positive, got {}",
                info.cell_size
            )));
        }

        Ok(Self { info, data })
    }

    /// Grid with every cell set to `value`.
    pub fn filled(info: GridInfo, value: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        Self::new(info, vec![value; info.cell_count()])
    }

    pub fn info(&self) -> &GridInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    pub fn get(&self, pos: &UVec2) -> Option<&T> {
        if pos.x >= self.info.width || pos.y >= self.info.height {
            return None;
        }
        let idx = self.index(pos);
        Some(&self.data[idx])
    }

    pub fn set(&mut self, pos: &UVec2, value: T) -> Result<(), GridError> {
        if pos.x >= self.info.width || pos.y >= self.info.height {
            return Err(GridError::OutOfBounds(format!(
                "cell ({}, {}) out of bounds for grid {}x{}",
                pos.x, pos.y, self.info.width, self.info.height
            )));
        }
        let idx = self.index(pos);
        self.data[idx] = value;
        Ok(())
    }

    fn index(&self, pos: &UVec2) -> usize {
        (pos.y as usize) * (self.info.width as usize) + (pos.x as usize)
    }

    pub fn map_to_world(&self, pos: &Vec2) -> Vec2 {
        self.info.local_to_world(*pos)
    }

    pub fn world_to_map(&self, pos: &Vec2) -> Option<Vec2> {
        let local = self.info.world_to_local(*pos);
        if local.x < 0.0
            || local.y < 0.0
            || local.x >= self.info.width as f32
            || local.y >= self.info.height as f32
        {
            return None;
        }
        Some(local)
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T> Grid2d<T>
where
    Self: Occupancy,
{
    /// Borrow this grid as a trace target.
    pub fn descriptor(&self) -> GridDescriptor<'_, Self> {
        GridDescriptor::new(self.info, self)
    }
}
