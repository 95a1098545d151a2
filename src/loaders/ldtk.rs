//! Loader for LDtk world files.
//!
//! Only the parts needed to place levels and build collision grids are read:
//! tileset definitions, level placement, and per-layer tiles and IntGrid
//! values. Everything else in the file is ignored.

use std::path::Path;

use glam::Vec2;
use serde::Deserialize;
use tracing::debug;

use crate::grid::OccupancyGrid;
use crate::types::{GridError, GridInfo};

const INT_GRID_LAYER: &str = "IntGrid";

#[derive(Debug, Clone, Deserialize)]
pub struct LdtkWorld {
    #[serde(default)]
    defs: Definitions,
    levels: Vec<Level>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Definitions {
    #[serde(default)]
    tilesets: Vec<Tileset>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tileset {
    pub identifier: String,
    pub uid: i32,
    /// Image path relative to the world file; absent for embedded atlases.
    #[serde(default)]
    pub rel_path: Option<String>,
    pub px_wid: u32,
    pub px_hei: u32,
    pub tile_grid_size: u32,
    #[serde(default)]
    pub spacing: u32,
    #[serde(default)]
    pub padding: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub identifier: String,
    pub uid: i32,
    pub world_x: i32,
    pub world_y: i32,
    #[serde(default)]
    pub world_depth: i32,
    pub px_wid: u32,
    pub px_hei: u32,
    /// Null in the file when levels are saved separately.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub layer_instances: Vec<LayerInstance>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerInstance {
    #[serde(rename = "__identifier")]
    pub identifier: String,
    #[serde(rename = "__type")]
    pub layer_type: String,
    #[serde(rename = "__cWid")]
    pub c_wid: u32,
    #[serde(rename = "__cHei")]
    pub c_hei: u32,
    #[serde(rename = "__gridSize")]
    pub grid_size: u32,
    #[serde(default)]
    pub level_id: i32,
    #[serde(default)]
    pub layer_def_uid: i32,
    #[serde(default)]
    pub px_offset_x: i32,
    #[serde(default)]
    pub px_offset_y: i32,
    #[serde(rename = "__tilesetDefUid", default)]
    pub tileset_def_uid: Option<i32>,
    #[serde(default)]
    pub grid_tiles: Vec<Tile>,
    #[serde(default)]
    pub auto_layer_tiles: Vec<Tile>,
    #[serde(default)]
    pub int_grid_csv: Vec<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Tile {
    /// Pixel position inside the layer.
    pub px: [i32; 2],
    /// Pixel position inside the tileset image.
    pub src: [i32; 2],
    /// Flip bits: 1 = horizontal, 2 = vertical.
    #[serde(default)]
    pub f: u8,
    /// Tile id inside the tileset.
    #[serde(default)]
    pub t: i32,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn load_world(path: impl AsRef<Path>) -> Result<LdtkWorld, GridError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let world = LdtkWorld::from_json_str(&json)?;
    debug!(path = %path.display(), "loaded ldtk world file");
    Ok(world)
}

impl LdtkWorld {
    pub fn from_json_str(json: &str) -> Result<Self, GridError> {
        let world: LdtkWorld = serde_json::from_str(json)?;
        world.validate()?;
        debug!(
            levels = world.levels.len(),
            tilesets = world.defs.tilesets.len(),
            "parsed ldtk world"
        );
        Ok(world)
    }

    fn validate(&self) -> Result<(), GridError> {
        for level in &self.levels {
            for layer in level.layer_instances.iter().filter(|l| l.is_int_grid()) {
                let expected = (layer.c_wid as usize) * (layer.c_hei as usize);
                if layer.int_grid_csv.len() != expected {
                    return Err(GridError::InvalidMetadata(format!(
                        "layer {} in level {} has {} IntGrid values, expected {}",
                        layer.identifier,
                        level.identifier,
                        layer.int_grid_csv.len(),
                        expected
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn tilesets(&self) -> &[Tileset] {
        &self.defs.tilesets
    }

    pub fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn level_by_identifier(&self, identifier: &str) -> Option<&Level> {
        self.levels.iter().find(|l| l.identifier == identifier)
    }

    pub fn tileset(&self, index: usize) -> Option<&Tileset> {
        self.defs.tilesets.get(index)
    }

    pub fn tileset_by_uid(&self, uid: i32) -> Option<&Tileset> {
        self.defs.tilesets.iter().find(|t| t.uid == uid)
    }

    /// Tileset a layer draws from, if any.
    pub fn layer_tileset(&self, layer: &LayerInstance) -> Option<&Tileset> {
        layer.tileset_def_uid.and_then(|uid| self.tileset_by_uid(uid))
    }

    /// Levels on one world depth, in file order.
    pub fn levels_at_depth(&self, depth: i32) -> impl Iterator<Item = &Level> {
        self.levels.iter().filter(move |l| l.world_depth == depth)
    }
}

impl Level {
    pub fn layer(&self, identifier: &str) -> Option<&LayerInstance> {
        self.layer_instances
            .iter()
            .find(|l| l.identifier == identifier)
    }

    pub fn world_position(&self) -> Vec2 {
        Vec2::new(self.world_x as f32, self.world_y as f32)
    }

    /// Occupancy grid of the IntGrid layer named `identifier`.
    pub fn collision_grid(&self, identifier: &str) -> Result<OccupancyGrid, GridError> {
        let layer = self.layer(identifier).ok_or_else(|| {
            GridError::LayerNotFound(format!("{identifier} in level {}", self.identifier))
        })?;
        layer.int_grid(self)
    }
}

impl LayerInstance {
    pub fn is_int_grid(&self) -> bool {
        self.layer_type == INT_GRID_LAYER
    }

    /// World position of the layer's top-left cell corner.
    pub fn world_offset(&self, level: &Level) -> Vec2 {
        level.world_position() + Vec2::new(self.px_offset_x as f32, self.px_offset_y as f32)
    }

    pub fn grid_info(&self, level: &Level) -> GridInfo {
        GridInfo::new(
            self.c_wid,
            self.c_hei,
            self.grid_size as f32,
            self.world_offset(level),
        )
    }

    /// IntGrid values as an occupancy grid placed in world space.
    pub fn int_grid(&self, level: &Level) -> Result<OccupancyGrid, GridError> {
        if !self.is_int_grid() {
            return Err(GridError::InvalidMetadata(format!(
                "layer {} is {}, not {INT_GRID_LAYER}",
                self.identifier, self.layer_type
            )));
        }
        OccupancyGrid::new(self.grid_info(level), self.int_grid_csv.clone())
    }

    /// Grid tiles followed by auto-layer tiles.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.grid_tiles.iter().chain(self.auto_layer_tiles.iter())
    }
}

impl Tile {
    #[inline]
    pub fn flip_x(&self) -> bool {
        self.f & 1 != 0
    }

    #[inline]
    pub fn flip_y(&self) -> bool {
        self.f & 2 != 0
    }
}
