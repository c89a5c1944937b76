mod config;
mod layout;
mod systems;
mod ui;

pub use config::*;
pub use layout::*;
pub use systems::*;
pub use ui::*;

use crate::textures::setup_texture_cache;
use bevy::prelude::*;

/// Plugin for the tilemap editor: grid, palette strip, input and drawing
pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EditorConfig>()
            .add_message::<SurfaceClick>()
            .add_systems(
                Startup,
                (
                    setup_texture_cache,
                    setup_editor_models,
                    spawn_editor_surfaces::<AssetServer>,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    route_pointer_clicks,
                    select_palette_entries,
                    paint_grid_cells,
                    redraw_tilemap::<AssetServer>,
                    update_palette_highlight,
                )
                    .chain(),
            );
    }
}

/// Which on-screen surface a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Grid,
    Palette,
}

/// A click in the coordinate space of one surface
/// Offsets are in pixels from the surface's top-left corner, y growing down
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct SurfaceClick {
    pub surface: SurfaceKind,
    pub offset: Vec2,
}

/// Marker component for surface background sprites
#[derive(Component)]
pub struct EditorSurface;

/// Sprite drawing one grid cell
#[derive(Component, Debug, Clone, Copy)]
pub struct GridCell(pub crate::tiles::CellPos);

/// Sprite drawing one palette entry
#[derive(Component, Debug, Clone, Copy)]
pub struct PaletteSlot(pub usize);

/// Marker component for the frame behind the active palette entry
#[derive(Component)]
pub struct PaletteHighlight;
