use super::{EditorConfig, SurfaceClick, SurfaceKind};
use crate::tiles::CellPos;
use bevy::prelude::*;

/// Axis-aligned surface rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub center: Vec2,
    pub size: Vec2,
}

impl SurfaceRect {
    pub const fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// World position of the surface's top-left corner
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(
            self.center.x - self.size.x / 2.0,
            self.center.y + self.size.y / 2.0,
        )
    }

    /// Convert a world position to a surface offset (pixels from the top-left, y down)
    /// Returns None outside `[0, width) x [0, height)`
    pub fn to_offset(&self, world_pos: Vec2) -> Option<Vec2> {
        let top_left = self.top_left();
        let offset = Vec2::new(world_pos.x - top_left.x, top_left.y - world_pos.y);
        let inside = offset.x >= 0.0
            && offset.y >= 0.0
            && offset.x < self.size.x
            && offset.y < self.size.y;
        inside.then_some(offset)
    }

    /// World position of the center of a cell on this surface
    pub fn cell_center(&self, pos: CellPos, cell_size: Vec2) -> Vec2 {
        let top_left = self.top_left();
        Vec2::new(
            top_left.x + (pos.col as f32 + 0.5) * cell_size.x,
            top_left.y - (pos.row as f32 + 0.5) * cell_size.y,
        )
    }
}

/// Where the grid and palette strip sit on screen
#[derive(Resource, Debug, Clone, Copy)]
pub struct EditorLayout {
    pub grid: SurfaceRect,
    pub grid_cell: Vec2,
    pub palette: SurfaceRect,
    pub palette_entry: Vec2,
}

impl EditorLayout {
    /// Place the grid and the palette strip side by side, centred on the origin
    pub fn from_config(config: &EditorConfig) -> Self {
        let grid_size = Vec2::splat(config.grid_surface_px);
        let palette_size = Vec2::new(config.palette_width, config.palette_height);
        let total_width = grid_size.x + config.surface_gap + palette_size.x;
        let left = -total_width / 2.0;

        Self {
            grid: SurfaceRect::new(Vec2::new(left + grid_size.x / 2.0, 0.0), grid_size),
            grid_cell: config.grid_cell_size(),
            palette: SurfaceRect::new(
                Vec2::new(total_width / 2.0 - palette_size.x / 2.0, 0.0),
                palette_size,
            ),
            palette_entry: config.palette_entry_size(),
        }
    }

    /// Find the surface under a world position
    pub fn hit(&self, world_pos: Vec2) -> Option<SurfaceClick> {
        if let Some(offset) = self.grid.to_offset(world_pos) {
            return Some(SurfaceClick {
                surface: SurfaceKind::Grid,
                offset,
            });
        }
        self.palette
            .to_offset(world_pos)
            .map(|offset| SurfaceClick {
                surface: SurfaceKind::Palette,
                offset,
            })
    }
}
