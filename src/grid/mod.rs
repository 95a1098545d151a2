pub mod descriptor;
pub mod grid2d;
pub mod traits;

pub use descriptor::GridDescriptor;
pub use grid2d::Grid2d;
pub use traits::Occupancy;

/// Owned IntGrid occupancy, as produced by the level loader.
pub type OccupancyGrid = Grid2d<i32>;
