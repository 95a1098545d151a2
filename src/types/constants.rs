/// Occupancy value of a cell that never blocks a trace.
pub const EMPTY: i32 = 0;

/// Default IntGrid value written by the LDtk editor for a solid cell.
pub const SOLID: i32 = 1;

/// Cell size used when a grid is built without explicit metadata (LDtk default).
pub const DEFAULT_CELL_SIZE: f32 = 16.0;
