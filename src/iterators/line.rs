use glam::{IVec2, Vec2};

use crate::types::{GridInfo, Segment};

/// Cells crossed by a segment, in order from start to end (Amanatides & Woo).
///
/// Works in grid-local coordinates. [`SegmentCells::new`] does not look at
/// bounds, so cells outside the grid are yielded too and exactly
/// `1 + crossings(x) + crossings(y)` cells are produced, where `crossings`
/// counts the cell boundaries passed on that axis. [`SegmentCells::clipped`]
/// walks only the part of the segment over the grid.
#[derive(Debug, Clone)]
pub struct SegmentCells {
    /// Current cell being processed.
    cell: IVec2,
    /// Step direction along each axis, 0 for an axis with no movement.
    step: IVec2,
    /// Parametric distance to the next cell boundary along each axis.
    t_max: Vec2,
    /// Parametric length of one cell along each axis.
    t_delta: Vec2,
    t: f32,
    normal: Vec2,
    remaining: u32,
    /// Start and extent of the walked segment, grid-local.
    origin: Vec2,
    delta: Vec2,
    /// Maps the walked segment's `t` back onto the caller's segment.
    t_offset: f32,
    t_scale: f32,
    emit_start: bool,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineStep {
    /// Cell entered, may be outside the grid.
    pub cell: IVec2,
    /// Fraction of the segment travelled when the cell was entered, in `[0, 1]`.
    pub t: f32,
    /// Grid-local point where the cell was entered.
    pub point: Vec2,
    /// Normal of the face the segment entered through.
    pub normal: Vec2,
}

impl SegmentCells {
    /// Segment given in grid-local coordinates (one unit per cell).
    pub fn new(start: Vec2, end: Vec2) -> Self {
        let cell = start.floor().as_ivec2();
        let end_cell = end.floor().as_ivec2();
        let delta = end - start;

        let (step_x, t_delta_x, t_max_x) = axis_params(start.x, delta.x);
        let (step_y, t_delta_y, t_max_y) = axis_params(start.y, delta.y);

        let crossings_x = if step_x == 0 {
            0
        } else {
            end_cell.x.abs_diff(cell.x)
        };
        let crossings_y = if step_y == 0 {
            0
        } else {
            end_cell.y.abs_diff(cell.y)
        };

        Self {
            cell,
            step: IVec2::new(step_x, step_y),
            t_max: Vec2::new(t_max_x, t_max_y),
            t_delta: Vec2::new(t_delta_x, t_delta_y),
            t: 0.0,
            normal: start_normal(delta.x),
            remaining: 1u32.saturating_add(crossings_x).saturating_add(crossings_y),
            origin: start,
            delta,
            t_offset: 0.0,
            t_scale: 1.0,
            emit_start: true,
        }
    }

    /// World-space segment cut down to the part lying over `info`'s cells.
    ///
    /// Yields at most `width + height + 2` cells however long the segment is,
    /// with `t` still measured along the whole segment. `None` when the
    /// segment never touches the grid.
    pub fn clipped(info: &GridInfo, segment: &Segment) -> Option<Self> {
        let start = info.world_to_local(segment.start);
        let end = info.world_to_local(segment.end);
        let delta = end - start;

        let size = Vec2::new(info.width as f32, info.height as f32);

        let (enter_x, exit_x) = slab(start.x, delta.x, size.x)?;
        let (enter_y, exit_y) = slab(start.y, delta.y, size.y)?;
        let t0 = enter_x.max(enter_y).max(0.0);
        let t1 = exit_x.min(exit_y).min(1.0);
        if t0 > t1 {
            return None;
        }

        let enters_y = enter_y >= enter_x;
        let exits_y = exit_y <= exit_x;

        // Clipped endpoints are pinned to the grid edge they lie on.
        let mut clip_start = start;
        if t0 > 0.0 {
            clip_start = start + delta * t0;
            if enters_y {
                clip_start.y = if delta.y > 0.0 { 0.0 } else { size.y };
            } else {
                clip_start.x = if delta.x > 0.0 { 0.0 } else { size.x };
            }
        }
        let mut clip_end = end;
        if t1 < 1.0 {
            clip_end = start + delta * t1;
            if exits_y {
                clip_end.y = if delta.y > 0.0 { size.y } else { 0.0 };
            } else {
                clip_end.x = if delta.x > 0.0 { size.x } else { 0.0 };
            }
        }

        let mut cells = Self::new(clip_start, clip_end);
        cells.normal = if t0 == 0.0 {
            start_normal(delta.x)
        } else if enters_y {
            // On a corner tie the vertical step is the last one taken.
            Vec2::new(0.0, -delta.y.signum())
        } else {
            Vec2::new(-delta.x.signum(), 0.0)
        };
        cells.t_offset = t0;
        cells.t_scale = t1 - t0;
        Some(cells)
    }

    /// World-space segment mapped onto `info`'s cells.
    pub fn from_world(info: &GridInfo, segment: &Segment) -> Self {
        Self::new(
            info.world_to_local(segment.start),
            info.world_to_local(segment.end),
        )
    }

    fn advance(&mut self) {
        if self.t_max.y < self.t_max.x {
            self.t = self.t_max.y;
            self.t_max.y += self.t_delta.y;
            self.cell.y += self.step.y;
            self.normal = Vec2::new(0.0, -self.step.y as f32);
        } else {
            self.t = self.t_max.x;
            self.t_max.x += self.t_delta.x;
            self.cell.x += self.step.x;
            self.normal = Vec2::new(-self.step.x as f32, 0.0);
        }
    }
}

impl Iterator for SegmentCells {
    type Item = LineStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        if self.emit_start {
            self.emit_start = false;
        } else {
            self.advance();
        }

        let t = self.t.min(1.0);
        Some(LineStep {
            cell: self.cell,
            t: (self.t_offset + self.t_scale * t).min(1.0),
            point: self.origin + self.delta * t,
            normal: self.normal,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SegmentCells {}

/// A hit in the start cell reports the face opposing horizontal travel.
fn start_normal(delta_x: f32) -> Vec2 {
    if delta_x < 0.0 {
        Vec2::X
    } else {
        Vec2::NEG_X
    }
}

/// Range of `t` for which `start + delta * t` lies in `[0, size]`, or `None`
/// when a motionless axis sits outside it.
fn slab(start: f32, delta: f32, size: f32) -> Option<(f32, f32)> {
    if delta == 0.0 {
        return (0.0..=size)
            .contains(&start)
            .then_some((f32::NEG_INFINITY, f32::INFINITY));
    }
    let a = -start / delta;
    let b = (size - start) / delta;
    Some((a.min(b), a.max(b)))
}

/// Step direction, parametric cell length and parametric distance to the
/// first boundary for one axis.
fn axis_params(start: f32, delta: f32) -> (i32, f32, f32) {
    if delta == 0.0 {
        return (0, f32::INFINITY, f32::INFINITY);
    }

    let cell_start = start.floor();
    let (step, dist_to_boundary) = if delta > 0.0 {
        (1, cell_start + 1.0 - start)
    } else {
        (-1, start - cell_start)
    };

    let t_delta = (1.0 / delta).abs();
    (step, t_delta, dist_to_boundary * t_delta)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn cells(start: Vec2, end: Vec2) -> Vec<IVec2> {
        SegmentCells::new(start, end).map(|step| step.cell).collect()
    }

    #[test]
    fn zero_length_yields_start_cell_only() {
        let steps: Vec<_> = SegmentCells::new(Vec2::new(2.5, 3.5), Vec2::new(2.5, 3.5)).collect();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].cell, IVec2::new(2, 3));
        assert_eq!(steps[0].t, 0.0);
    }

    #[test]
    fn horizontal_segment_visits_each_column() {
        let visited = cells(Vec2::new(0.5, 1.5), Vec2::new(4.5, 1.5));
        assert_eq!(
            visited,
            vec![
                IVec2::new(0, 1),
                IVec2::new(1, 1),
                IVec2::new(2, 1),
                IVec2::new(3, 1),
                IVec2::new(4, 1),
            ]
        );
    }

    #[test]
    fn vertical_segment_counts_only_dominant_axis() {
        let iter = SegmentCells::new(Vec2::new(1.5, 7.25), Vec2::new(1.5, 2.75));
        assert_eq!(iter.len(), 6);
        let visited: Vec<_> = iter.map(|step| step.cell.y).collect();
        assert_eq!(visited, vec![7, 6, 5, 4, 3, 2]);
    }

    #[test]
    fn diagonal_segment_visits_one_cell_per_crossing() {
        let iter = SegmentCells::new(Vec2::new(0.2, 0.7), Vec2::new(3.6, 2.1));
        // 3 x-crossings + 2 y-crossings + start cell
        assert_eq!(iter.len(), 6);

        let steps: Vec<_> = iter.collect();
        assert_eq!(steps.first().map(|s| s.cell), Some(IVec2::new(0, 0)));
        assert_eq!(steps.last().map(|s| s.cell), Some(IVec2::new(3, 2)));
        for pair in steps.windows(2) {
            let moved = (pair[1].cell - pair[0].cell).abs();
            assert_eq!(moved.x + moved.y, 1);
            assert!(pair[1].t >= pair[0].t);
        }
    }

    #[test]
    fn steps_report_entry_normal() {
        let steps: Vec<_> = SegmentCells::new(Vec2::new(2.5, 0.5), Vec2::new(0.5, 0.5)).collect();
        assert_eq!(steps[0].normal, Vec2::X);
        assert_eq!(steps[1].normal, Vec2::X);
        assert_relative_eq!(steps[1].t, 0.25);

        let steps: Vec<_> = SegmentCells::new(Vec2::new(0.5, 0.5), Vec2::new(0.5, 2.5)).collect();
        assert_eq!(steps[1].normal, Vec2::NEG_Y);
        assert_relative_eq!(steps[1].t, 0.25);
        assert_relative_eq!(steps[2].t, 0.75);
    }

    #[test]
    fn ties_step_horizontally_first() {
        let visited = cells(Vec2::new(0.5, 0.5), Vec2::new(1.5, 1.5));
        assert_eq!(
            visited,
            vec![IVec2::new(0, 0), IVec2::new(1, 0), IVec2::new(1, 1)]
        );
    }

    #[test]
    fn cells_outside_grid_are_yielded() {
        let visited = cells(Vec2::new(-1.5, 0.5), Vec2::new(0.5, 0.5));
        assert_eq!(
            visited,
            vec![IVec2::new(-2, 0), IVec2::new(-1, 0), IVec2::new(0, 0)]
        );
    }

    #[test]
    fn from_world_scales_by_cell_size() {
        let info = GridInfo::new(10, 10, 16.0, Vec2::new(-16.0, 0.0));
        let segment = Segment::new(Vec2::new(-8.0, 8.0), Vec2::new(40.0, 8.0));
        let visited: Vec<_> = SegmentCells::from_world(&info, &segment)
            .map(|step| step.cell)
            .collect();
        assert_eq!(
            visited,
            vec![
                IVec2::new(0, 0),
                IVec2::new(1, 0),
                IVec2::new(2, 0),
                IVec2::new(3, 0),
            ]
        );
    }

    #[test]
    fn clipped_walk_is_bounded_by_grid_size() {
        let info = GridInfo::new(10, 10, 16.0, Vec2::ZERO);
        let segment = Segment::new(Vec2::new(-1.0e6, 8.0), Vec2::new(1.0e6, 8.0));
        assert!(SegmentCells::from_world(&info, &segment).len() > 100_000);

        let steps: Vec<_> = SegmentCells::clipped(&info, &segment)
            .expect("segment crosses grid")
            .collect();
        assert!(steps.len() <= 10 + 10 + 2);
        assert_eq!(steps[0].cell, IVec2::new(0, 0));
        assert_eq!(steps[0].normal, Vec2::NEG_X);
        assert_relative_eq!(steps[0].t, 0.5);
    }

    #[test]
    fn clipped_entry_keeps_whole_segment_t() {
        let info = GridInfo::new(4, 4, 16.0, Vec2::ZERO);
        let segment = Segment::new(Vec2::new(8.0, -100.0), Vec2::new(8.0, 60.0));
        let steps: Vec<_> = SegmentCells::clipped(&info, &segment)
            .expect("segment crosses grid")
            .collect();

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].cell, IVec2::new(0, 0));
        assert_eq!(steps[0].normal, Vec2::NEG_Y);
        assert_relative_eq!(steps[0].t, 0.625);
        assert_relative_eq!(steps[0].point.y, 0.0);
        assert_relative_eq!(steps[1].t, 0.725, epsilon = 1e-5);
        assert_relative_eq!(steps[1].point.y, 1.0, epsilon = 1e-5);
        assert_eq!(steps[3].cell, IVec2::new(0, 3));
    }

    #[test]
    fn clipped_segment_inside_grid_is_unchanged() {
        let info = GridInfo::new(10, 10, 1.0, Vec2::ZERO);
        let segment = Segment::new(Vec2::new(0.2, 0.7), Vec2::new(3.6, 2.1));
        let clipped: Vec<_> = SegmentCells::clipped(&info, &segment)
            .expect("segment inside grid")
            .collect();
        let full: Vec<_> = SegmentCells::from_world(&info, &segment).collect();
        assert_eq!(clipped, full);
    }

    #[test]
    fn clipped_misses_grid() {
        let info = GridInfo::new(4, 4, 1.0, Vec2::ZERO);
        let beside = Segment::new(Vec2::new(-3.0, 0.5), Vec2::new(-1.0, 3.5));
        let parallel = Segment::new(Vec2::new(-2.0, 5.0), Vec2::new(8.0, 5.0));
        assert!(SegmentCells::clipped(&info, &beside).is_none());
        assert!(SegmentCells::clipped(&info, &parallel).is_none());
    }
}
