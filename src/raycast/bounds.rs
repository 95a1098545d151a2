//! Early-out test run before any per-cell work.
//!
//! The query rectangle spans the horizontal *and* vertical extent of the
//! segment (or swept box). Queries that only touch the grid's outer edge are
//! rejected, matching the open-interval overlap in [`Bounds::overlaps`].

use crate::types::{Bounds, GridInfo};

/// Whether `query` can touch any cell of the grid described by `info`.
#[inline]
pub fn overlaps_grid(info: &GridInfo, query: &Bounds) -> bool {
    info.world_bounds().overlaps(query)
}
