use crate::tiles::{
    coords, Palette, TextureId, TileError, TileGrid, DEFAULT_TEXTURE_PATH, DEFAULT_TEXTURE_PATHS,
    GRID_SIZE, GRID_SURFACE_PX, PALETTE_HEIGHT_PX, PALETTE_WIDTH_PX, SURFACE_GAP_PX,
};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Editor configuration, fixed once the app starts
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Cells along each side of the grid
    pub grid_size: u32,
    /// Pixel size of the square grid surface
    pub grid_surface_px: f32,
    /// Pixel size of the palette strip (entries are stacked vertically)
    pub palette_width: f32,
    pub palette_height: f32,
    /// Space between the grid and the palette strip
    pub surface_gap: f32,
    /// Selectable textures, in palette order
    pub textures: Vec<TextureId>,
    /// Texture every cell starts with
    pub default_texture: TextureId,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            grid_surface_px: GRID_SURFACE_PX,
            palette_width: PALETTE_WIDTH_PX,
            palette_height: PALETTE_HEIGHT_PX,
            surface_gap: SURFACE_GAP_PX,
            textures: DEFAULT_TEXTURE_PATHS
                .into_iter()
                .map(TextureId::from_static)
                .collect(),
            default_texture: TextureId::from_static(DEFAULT_TEXTURE_PATH),
        }
    }
}

impl EditorConfig {
    /// Number of palette entries
    pub fn palette_size(&self) -> usize {
        self.textures.len()
    }

    /// Pixel size of one grid cell
    pub fn grid_cell_size(&self) -> Vec2 {
        Vec2::splat(coords::cell_extent(self.grid_surface_px, self.grid_size))
    }

    /// Pixel size of one palette entry (full strip width, 1/M of its height)
    pub fn palette_entry_size(&self) -> Vec2 {
        Vec2::new(
            self.palette_width,
            coords::cell_extent(self.palette_height, self.palette_size() as u32),
        )
    }

    /// Build the grid and palette described by this config
    pub fn build_models(&self) -> Result<(TileGrid, Palette), TileError> {
        let surfaces = [self.grid_surface_px, self.palette_width, self.palette_height];
        if !surfaces.into_iter().all(is_positive_px) {
            return Err(TileError::InvalidSurface {
                width: self.grid_surface_px.min(self.palette_width),
                height: self.grid_surface_px.min(self.palette_height),
            });
        }
        let grid = TileGrid::new(self.grid_size, self.grid_size, self.default_texture.clone())?;
        let palette = Palette::new(self.textures.iter().cloned())?;
        Ok((grid, palette))
    }
}

/// Rejects zero, negative, NaN and infinite pixel sizes
fn is_positive_px(px: f32) -> bool {
    px.is_finite() && px > 0.0
}
