use super::{error::TileError, types::*};
use bevy::prelude::*;

/// Fixed-size grid of texture ids, one per cell
/// Cells are stored row-major; the size never changes after creation
#[derive(Resource, Debug, Clone)]
pub struct TileGrid {
    width: u32,
    height: u32,
    cells: Box<[TextureId]>,
}

impl TileGrid {
    /// Create a grid with every cell set to `default_id`
    pub fn new(width: u32, height: u32, default_id: TextureId) -> Result<Self, TileError> {
        if width == 0 || height == 0 {
            return Err(TileError::InvalidDimensions { width, height });
        }
        let area = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            cells: vec![default_id; area].into_boxed_slice(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        let col = usize::try_from(col).ok()?;
        let row = usize::try_from(row).ok()?;
        if col >= self.width as usize || row >= self.height as usize {
            return None;
        }
        Some(row * self.width as usize + col)
    }

    fn out_of_bounds(&self, col: i32, row: i32) -> TileError {
        TileError::OutOfBounds {
            col,
            row,
            width: self.width,
            height: self.height,
        }
    }

    /// Get the texture id stored at a cell
    pub fn get_cell(&self, col: i32, row: i32) -> Result<&TextureId, TileError> {
        match self.index(col, row) {
            Some(index) => Ok(&self.cells[index]),
            None => Err(self.out_of_bounds(col, row)),
        }
    }

    /// Overwrite the texture id stored at a cell
    pub fn set_cell(&mut self, col: i32, row: i32, id: TextureId) -> Result<(), TileError> {
        match self.index(col, row) {
            Some(index) => {
                self.cells[index] = id;
                Ok(())
            }
            None => Err(self.out_of_bounds(col, row)),
        }
    }

    /// Iterate all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, &TextureId)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(index, id)| {
            let pos = CellPos::new((index % width) as i32, (index / width) as i32);
            (pos, id)
        })
    }
}

/// Pixel to cell conversions shared by the grid and the palette strip
pub mod coords {
    use super::*;

    /// Map a surface offset to a cell by truncating division
    /// A point exactly on a cell boundary belongs to the higher-index cell
    pub fn map_point_to_cell(x: f32, y: f32, cell_width: f32, cell_height: f32) -> CellPos {
        CellPos::from_point(Vec2::new(x, y), Vec2::new(cell_width, cell_height))
    }

    /// Pixel size of one cell when `cells` cells span `surface_px` pixels
    pub fn cell_extent(surface_px: f32, cells: u32) -> f32 {
        surface_px / cells as f32
    }
}
