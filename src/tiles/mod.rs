pub mod constants;
pub mod error;
pub mod grid;
pub mod palette;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use error::TileError;
pub use grid::{coords, TileGrid};
pub use palette::Palette;
pub use types::{CellPos, TextureId};
