use glam::Vec2;

use crate::grid::{GridDescriptor, Occupancy};
use crate::raycast::TraceHit;
use crate::types::Circle;

/// Swept circle against the grid. Not supported, never reports a hit.
// TODO: sweep the circle's bounding box, then refine hits against cell corners.
pub fn sweep_circle<O: Occupancy + ?Sized>(
    _grid: &GridDescriptor<'_, O>,
    _circle: Circle,
    _displacement: Vec2,
) -> Option<TraceHit> {
    None
}
