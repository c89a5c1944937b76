use super::{EditorLayout, GridCell, PaletteHighlight, PaletteSlot, SurfaceClick, SurfaceKind};
use crate::textures::{TextureCache, TextureLoader};
use crate::tiles::{coords, CellPos, Palette, TileError, TileGrid};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Paint the cell under a grid offset with the active palette texture
pub fn paint_at(
    grid: &mut TileGrid,
    palette: &Palette,
    offset: Vec2,
    cell_size: Vec2,
) -> Result<CellPos, TileError> {
    let cell = coords::map_point_to_cell(offset.x, offset.y, cell_size.x, cell_size.y);
    grid.set_cell(cell.col, cell.row, palette.active().clone())?;
    Ok(cell)
}

/// Select the palette entry under a palette strip offset
/// The strip is a single column, so only the row matters
pub fn select_at(palette: &mut Palette, offset: Vec2, entry_size: Vec2) -> Result<usize, TileError> {
    let cell = coords::map_point_to_cell(offset.x, offset.y, entry_size.x, entry_size.y);
    palette.select_by_index(cell.row)?;
    Ok(palette.active_index())
}

/// Turns left clicks on the grid or palette strip into surface clicks
/// Clicks outside both surfaces are dropped here and never reach the models
pub fn route_pointer_clicks(
    buttons: Res<ButtonInput<MouseButton>>,
    window: Single<&Window, With<PrimaryWindow>>,
    camera: Single<(&Camera, &GlobalTransform), With<Camera2d>>,
    layout: Res<EditorLayout>,
    mut clicks: MessageWriter<SurfaceClick>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let (camera, camera_transform) = *camera;
    let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };
    let Some(click) = layout.hit(world_pos) else {
        return;
    };

    #[cfg(feature = "debug_input")]
    info!(
        "Click at {:?} -> {:?} offset {:?}",
        world_pos, click.surface, click.offset
    );

    clicks.write(click);
}

/// Changes the active texture on palette clicks
pub fn select_palette_entries(
    mut clicks: MessageReader<SurfaceClick>,
    layout: Res<EditorLayout>,
    mut palette: ResMut<Palette>,
) {
    for click in clicks.read() {
        if click.surface != SurfaceKind::Palette {
            continue;
        }
        // Only a successful selection marks the palette as changed
        match select_at(
            palette.bypass_change_detection(),
            click.offset,
            layout.palette_entry,
        ) {
            Ok(index) => {
                palette.set_changed();
                debug!("Selected palette entry {} ({})", index, palette.active());
            }
            Err(e) if e.is_out_of_bounds() => {
                warn!("Ignoring palette click at {:?}: {}", click.offset, e)
            }
            Err(e) => error!("Palette click at {:?} failed: {}", click.offset, e),
        }
    }
}

/// Paints grid cells on grid clicks
pub fn paint_grid_cells(
    mut clicks: MessageReader<SurfaceClick>,
    layout: Res<EditorLayout>,
    palette: Res<Palette>,
    mut grid: ResMut<TileGrid>,
) {
    for click in clicks.read() {
        if click.surface != SurfaceKind::Grid {
            continue;
        }
        // Rejected clicks leave the grid unchanged, so no redraw follows
        match paint_at(
            grid.bypass_change_detection(),
            &palette,
            click.offset,
            layout.grid_cell,
        ) {
            Ok(cell) => {
                grid.set_changed();
                debug!("Painted cell {:?} with {}", cell, palette.active());
            }
            Err(e) if e.is_out_of_bounds() => {
                warn!("Ignoring grid click at {:?}: {}", click.offset, e)
            }
            Err(e) => error!("Grid click at {:?} failed: {}", click.offset, e),
        }
    }
}

/// Render step: point every cell sprite at the texture its grid cell names
/// Handles that are still loading simply draw nothing until the image arrives
pub fn redraw_tilemap<L>(
    grid: Res<TileGrid>,
    mut cache: ResMut<TextureCache<L>>,
    mut cells: Query<(&GridCell, &mut Sprite)>,
) where
    L: TextureLoader<Handle = Handle<Image>> + Send + Sync + 'static,
{
    if !grid.is_changed() {
        return;
    }

    for (cell, mut sprite) in &mut cells {
        match grid.get_cell(cell.0.col, cell.0.row) {
            Ok(id) => {
                let handle = cache.get_texture(id);
                if sprite.image != *handle {
                    sprite.image = handle.clone();
                }
            }
            Err(e) => warn!("Cell sprite without a grid cell: {}", e),
        }
    }
}

/// Moves the highlight frame behind the sprite of the active palette entry
pub fn update_palette_highlight(
    palette: Res<Palette>,
    slots: Query<(&PaletteSlot, &Transform), Without<PaletteHighlight>>,
    mut highlight: Query<&mut Transform, With<PaletteHighlight>>,
) {
    if !palette.is_changed() {
        return;
    }

    let active = palette.active_index();
    let Some((_, slot)) = slots.iter().find(|(slot, _)| slot.0 == active) else {
        warn!("No sprite for palette entry {}", active);
        return;
    };
    for mut transform in &mut highlight {
        transform.translation.x = slot.translation.x;
        transform.translation.y = slot.translation.y;
    }
}
