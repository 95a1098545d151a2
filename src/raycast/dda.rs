use tracing::trace;

use crate::grid::{GridDescriptor, Occupancy};
use crate::iterators::line::SegmentCells;
use crate::raycast::{bounds, TraceHit};
use crate::types::{Segment, EMPTY};

/// Fast voxel traversal (Amanatides & Woo) that returns the first occupied
/// cell along `segment`.
///
/// The segment may start or end outside the grid; cells outside are skipped
/// rather than treated as solid. A hit in the start cell is reported with
/// distance 0.
pub fn trace_ray<O: Occupancy + ?Sized>(
    grid: &GridDescriptor<'_, O>,
    segment: Segment,
) -> Option<TraceHit> {
    if !bounds::overlaps_grid(grid.info(), &segment.bounds()) {
        trace!(?segment, "segment misses grid bounds");
        return None;
    }

    first_hit(grid, segment, segment.length())
}

/// Walks the cells of `segment` that lie over the grid, without the bounds
/// precheck. Hit distances are the travelled fraction of `length`.
pub(crate) fn first_hit<O: Occupancy + ?Sized>(
    grid: &GridDescriptor<'_, O>,
    segment: Segment,
    length: f32,
) -> Option<TraceHit> {
    let info = grid.info();

    for step in SegmentCells::clipped(info, &segment)? {
        let Some(value) = grid.query(step.cell) else {
            continue;
        };
        if value == EMPTY {
            continue;
        }

        // Traversal runs from the start, so the first solid cell is the closest.
        return Some(TraceHit {
            value,
            cell: step.cell.as_uvec2(),
            position: info.local_to_world(step.point),
            normal: step.normal,
            distance: step.t * length,
        });
    }

    None
}
