/// Number of cells along each side of the tilemap grid
pub const GRID_SIZE: u32 = 32;

/// Pixel size of each grid cell on screen
pub const GRID_CELL_PX: f32 = 20.0;

/// Pixel size of the (square) grid surface
pub const GRID_SURFACE_PX: f32 = GRID_CELL_PX * GRID_SIZE as f32; // 640 pixels

/// Number of selectable textures in the palette strip
pub const PALETTE_SIZE: usize = 8;

/// Palette strip dimensions (one column, PALETTE_SIZE rows)
pub const PALETTE_WIDTH_PX: f32 = 64.0;
pub const PALETTE_HEIGHT_PX: f32 = PALETTE_WIDTH_PX * PALETTE_SIZE as f32; // 512 pixels

/// Horizontal space between the grid and the palette strip
pub const SURFACE_GAP_PX: f32 = 48.0;

/// Texture asset paths, in palette order
pub const DEFAULT_TEXTURE_PATHS: [&str; PALETTE_SIZE] = [
    "tiles/tile1.png",
    "tiles/tile2.png",
    "tiles/tile3.png",
    "tiles/tile4.png",
    "tiles/tile5.png",
    "tiles/tile6.png",
    "tiles/tile7.png",
    "tiles/tile8.png",
];

/// Texture every grid cell starts with
pub const DEFAULT_TEXTURE_PATH: &str = DEFAULT_TEXTURE_PATHS[0];

// Z-positions for editor sprites
pub const Z_SURFACE: f32 = 0.0;
pub const Z_HIGHLIGHT: f32 = 0.5;
pub const Z_TILE: f32 = 1.0;
