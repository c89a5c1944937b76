use super::{error::TileError, types::TextureId};
use bevy::prelude::*;

/// Ordered list of selectable textures plus the active selection
/// The active entry is always one of the entries
#[derive(Resource, Debug, Clone)]
pub struct Palette {
    entries: Box<[TextureId]>,
    active: usize,
}

impl Palette {
    /// Create a palette with the first entry active
    pub fn new(ids: impl IntoIterator<Item = TextureId>) -> Result<Self, TileError> {
        let entries: Box<[TextureId]> = ids.into_iter().collect();
        if entries.is_empty() {
            return Err(TileError::EmptyPalette);
        }
        Ok(Self { entries, active: 0 })
    }

    /// Make the entry at `index` the active texture
    pub fn select_by_index(&mut self, index: i32) -> Result<&TextureId, TileError> {
        match usize::try_from(index) {
            Ok(i) if i < self.entries.len() => {
                self.active = i;
                Ok(&self.entries[i])
            }
            _ => Err(TileError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            }),
        }
    }

    pub fn active(&self) -> &TextureId {
        &self.entries[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn entries(&self) -> &[TextureId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a palette holds at least one entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(count: usize) -> Vec<TextureId> {
        (1..=count)
            .map(|i| TextureId::new(format!("tile{}", i)).unwrap())
            .collect()
    }

    #[test]
    fn test_palette_starts_on_first_entry() {
        let palette = Palette::new(ids(8)).unwrap();
        assert_eq!(palette.len(), 8);
        assert_eq!(palette.active_index(), 0);
        assert_eq!(palette.active().as_str(), "tile1");
    }

    #[test]
    fn test_palette_rejects_empty() {
        assert_eq!(Palette::new(Vec::new()).unwrap_err(), TileError::EmptyPalette);
    }

    #[test]
    fn test_select_by_index() {
        let entries = ids(8);
        let mut palette = Palette::new(entries.clone()).unwrap();

        for (k, expected) in entries.iter().enumerate() {
            let selected = palette.select_by_index(k as i32).unwrap().clone();
            assert_eq!(&selected, expected);
            assert_eq!(palette.active(), expected);
        }
    }

    #[test]
    fn test_invalid_selection_keeps_active() {
        let mut palette = Palette::new(ids(8)).unwrap();
        palette.select_by_index(3).unwrap();

        for index in [8, -1, 100, i32::MIN] {
            let err = palette.select_by_index(index).unwrap_err();
            assert!(err.is_out_of_bounds());
            assert_eq!(err, TileError::IndexOutOfBounds { index, len: 8 });
            assert_eq!(palette.active().as_str(), "tile4");
        }
    }
}
