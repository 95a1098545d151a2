use std::error::Error;

use glam::Vec2;
use tracing::info;
use tracing_subscriber::EnvFilter;

use grid_trace::visualization::save_trace_preview;
use grid_trace::{load_world, Segment};

const USAGE: &str =
    "usage: trace_level <world.ldtk> <level> <layer> <start_x> <start_y> <end_x> <end_y> [preview.png]";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 7 {
        eprintln!("{USAGE}");
        return Ok(());
    }

    let world = load_world(&args[0])?;
    let level = world
        .level_by_identifier(&args[1])
        .ok_or_else(|| format!("level {} not found", args[1]))?;
    let grid = level.collision_grid(&args[2])?;

    let coords = args[3..7]
        .iter()
        .map(|arg| arg.parse::<f32>())
        .collect::<Result<Vec<_>, _>>()?;
    let segment = Segment::new(
        Vec2::new(coords[0], coords[1]),
        Vec2::new(coords[2], coords[3]),
    );

    info!(
        level = %level.identifier,
        layer = %args[2],
        width = grid.width(),
        height = grid.height(),
        "tracing segment"
    );

    let hit = grid.descriptor().trace_ray(segment);
    match &hit {
        Some(hit) => println!(
            "hit value={} cell=({}, {}) position=({:.2}, {:.2}) normal=({}, {}) distance={:.2}",
            hit.value,
            hit.cell.x,
            hit.cell.y,
            hit.position.x,
            hit.position.y,
            hit.normal.x,
            hit.normal.y,
            hit.distance
        ),
        None => println!("no hit"),
    }

    if let Some(path) = args.get(7) {
        save_trace_preview(path, &grid, &segment, hit.as_ref())?;
        info!(path = %path, "wrote trace preview");
    }

    Ok(())
}
