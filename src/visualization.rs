use std::path::Path;

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::grid::OccupancyGrid;
use crate::iterators::line::SegmentCells;
use crate::raycast::TraceHit;
use crate::types::{GridError, Segment, EMPTY};

const EMPTY_GRAY: u8 = 254;
const SOLID_GRAY: u8 = 0;
const PATH_RGB: Rgb<u8> = Rgb([80, 140, 230]);
const HIT_RGB: Rgb<u8> = Rgb([220, 40, 40]);

/// Convert an occupancy grid to a grayscale image preview, one pixel per cell.
///
/// - **EMPTY** (0) becomes white-ish.
/// - Any solid value becomes black.
///
/// Rows are written top to bottom in grid order, so the image has the same
/// y-down orientation as the level it came from.
pub fn occupancy_to_image(grid: &OccupancyGrid) -> GrayImage {
    let width = grid.width();
    let height = grid.height();
    let mut img = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let value = grid
                .get(&glam::UVec2::new(x, y))
                .copied()
                .unwrap_or(EMPTY);
            img.put_pixel(x, y, Luma([occupancy_to_gray(value)]));
        }
    }

    img
}

fn occupancy_to_gray(value: i32) -> u8 {
    if value == EMPTY {
        EMPTY_GRAY
    } else {
        SOLID_GRAY
    }
}

/// Preview of `grid` with the cells crossed by `segment` tinted, and the
/// struck cell marked when `hit` is given.
pub fn draw_trace(grid: &OccupancyGrid, segment: &Segment, hit: Option<&TraceHit>) -> RgbImage {
    let gray = occupancy_to_image(grid);
    let mut img = RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        let [v] = gray.get_pixel(x, y).0;
        Rgb([v, v, v])
    });

    for step in SegmentCells::clipped(grid.info(), segment).into_iter().flatten() {
        if !grid.info().contains_cell(step.cell) {
            continue;
        }
        let cell = step.cell.as_uvec2();
        if let Some(hit) = hit {
            if cell == hit.cell {
                break;
            }
        }
        img.put_pixel(cell.x, cell.y, PATH_RGB);
    }

    if let Some(hit) = hit {
        img.put_pixel(hit.cell.x, hit.cell.y, HIT_RGB);
    }

    img
}

/// Write a trace preview as an image file; the format follows the extension.
pub fn save_trace_preview(
    path: impl AsRef<Path>,
    grid: &OccupancyGrid,
    segment: &Segment,
    hit: Option<&TraceHit>,
) -> Result<(), GridError> {
    draw_trace(grid, segment, hit).save(path)?;
    Ok(())
}
