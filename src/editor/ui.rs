use super::{EditorConfig, EditorLayout, EditorSurface, GridCell, PaletteHighlight, PaletteSlot};
use crate::textures::{TextureCache, TextureLoader};
use crate::tiles::{CellPos, Palette, TileGrid, Z_HIGHLIGHT, Z_SURFACE, Z_TILE};
use bevy::prelude::*;

/// Extra size of the highlight frame around the active palette entry
const HIGHLIGHT_BORDER: f32 = 6.0;

/// Builds the grid, palette and layout resources from the editor config
pub fn setup_editor_models(mut commands: Commands, config: Res<EditorConfig>) -> Result {
    let (grid, palette) = config.build_models()?;
    let layout = EditorLayout::from_config(&config);

    info!(
        "Editor ready: {}x{} grid, {} palette entries",
        grid.width(),
        grid.height(),
        palette.len()
    );

    commands.insert_resource(grid);
    commands.insert_resource(palette);
    commands.insert_resource(layout);
    Ok(())
}

/// Spawns the camera, surface backgrounds and one sprite per grid cell and palette entry
pub fn spawn_editor_surfaces<L>(
    mut commands: Commands,
    layout: Res<EditorLayout>,
    grid: Res<TileGrid>,
    palette: Res<Palette>,
    mut cache: ResMut<TextureCache<L>>,
) where
    L: TextureLoader<Handle = Handle<Image>> + Send + Sync + 'static,
{
    commands.spawn(Camera2d);

    // Surface backgrounds (visible behind tiles that have not loaded)
    for rect in [layout.grid, layout.palette] {
        commands.spawn((
            EditorSurface,
            Sprite::from_color(Color::srgb(0.1, 0.1, 0.15), rect.size),
            Transform::from_translation(rect.center.extend(Z_SURFACE)),
        ));
    }

    // Frame behind the active palette entry
    let active = layout.palette.cell_center(
        CellPos::new(0, palette.active_index() as i32),
        layout.palette_entry,
    );
    commands.spawn((
        PaletteHighlight,
        Sprite::from_color(
            Color::srgb(0.95, 0.8, 0.3),
            layout.palette_entry + Vec2::splat(HIGHLIGHT_BORDER),
        ),
        Transform::from_translation(active.extend(Z_HIGHLIGHT)),
    ));

    for (pos, id) in grid.iter() {
        let center = layout.grid.cell_center(pos, layout.grid_cell);
        commands.spawn((
            GridCell(pos),
            Sprite {
                image: cache.get_texture(id).clone(),
                custom_size: Some(layout.grid_cell),
                ..default()
            },
            Transform::from_translation(center.extend(Z_TILE)),
        ));
    }

    for (index, id) in palette.entries().iter().enumerate() {
        let center = layout
            .palette
            .cell_center(CellPos::new(0, index as i32), layout.palette_entry);
        commands.spawn((
            PaletteSlot(index),
            Sprite {
                image: cache.get_texture(id).clone(),
                custom_size: Some(layout.palette_entry),
                ..default()
            },
            Transform::from_translation(center.extend(Z_TILE)),
        ));
    }

    info!(
        "Spawned {} grid cells and {} palette entries ({} textures requested)",
        grid.width() * grid.height(),
        palette.len(),
        cache.len()
    );
}
