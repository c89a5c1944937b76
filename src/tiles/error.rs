use std::fmt;

/// Error type for grid and palette operations
#[derive(Debug, Clone, PartialEq)]
pub enum TileError {
    /// Cell position outside `[0, width) x [0, height)`
    OutOfBounds {
        col: i32,
        row: i32,
        width: u32,
        height: u32,
    },
    /// Palette index outside `[0, len)`
    IndexOutOfBounds { index: i32, len: usize },
    InvalidDimensions { width: u32, height: u32 },
    /// Surface with no positive pixel extent
    InvalidSurface { width: f32, height: f32 },
    EmptyPalette,
    EmptyTextureId,
}

impl TileError {
    /// True for both grid and palette range violations
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            TileError::OutOfBounds { .. } | TileError::IndexOutOfBounds { .. }
        )
    }
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::OutOfBounds {
                col,
                row,
                width,
                height,
            } => write!(
                f,
                "Cell ({}, {}) out of bounds for {}x{} grid",
                col, row, width, height
            ),
            TileError::IndexOutOfBounds { index, len } => {
                write!(f, "Palette index {} out of bounds for {} entries", index, len)
            }
            TileError::InvalidDimensions { width, height } => {
                write!(f, "Invalid grid dimensions: {}x{}", width, height)
            }
            TileError::InvalidSurface { width, height } => {
                write!(f, "Invalid surface size: {}x{}", width, height)
            }
            TileError::EmptyPalette => write!(f, "Palette needs at least one texture"),
            TileError::EmptyTextureId => write!(f, "Texture id must not be empty"),
        }
    }
}

impl std::error::Error for TileError {}
