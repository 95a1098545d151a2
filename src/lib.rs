//! Ray and swept-box traces against 2D occupancy grids.
//!
//! A [`GridDescriptor`] pairs grid placement ([`GridInfo`]) with a borrowed
//! [`Occupancy`] capability. [`raycast::trace_ray`] and
//! [`raycast::sweep_aabb`] walk the grid cell by cell and return the closest
//! solid cell as a [`TraceHit`].

pub mod grid;
pub mod iterators;
pub mod loaders;
pub mod raycast;
pub mod types;
pub mod visualization;

pub use grid::{Grid2d, GridDescriptor, Occupancy, OccupancyGrid};
pub use loaders::ldtk::{load_world, LdtkWorld};
pub use raycast::{sweep_aabb, sweep_circle, trace_ray, TraceHit};
pub use types::{Aabb, Circle, GridError, GridInfo, Segment};
