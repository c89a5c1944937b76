use super::error::TileError;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Opaque name of a drawable asset (a path relative to the asset root)
/// Immutable once created; cloning shares the underlying string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TextureId(Arc<str>);

impl TextureId {
    /// Create an identifier, rejecting the empty string
    pub fn new(id: impl AsRef<str>) -> Result<Self, TileError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(TileError::EmptyTextureId);
        }
        Ok(Self(Arc::from(id)))
    }

    /// Identifier for a built-in asset path
    pub(crate) fn from_static(id: &'static str) -> Self {
        debug_assert!(!id.is_empty(), "built-in texture ids are never empty");
        Self(Arc::from(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TextureId {
    type Error = TileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TextureId> for String {
    fn from(id: TextureId) -> Self {
        id.0.as_ref().to_owned()
    }
}

/// Cell position in grid coordinates (column from x, row from y)
/// Signed so that positions left of or above a surface can be represented and rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub col: i32,
    pub row: i32,
}

impl CellPos {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Convert a surface offset (in pixels, y down) to the cell it falls in
    /// Each axis is divided by the cell size and truncated toward zero
    pub fn from_point(point: Vec2, cell_size: Vec2) -> Self {
        Self {
            col: (point.x / cell_size.x) as i32,
            row: (point.y / cell_size.y) as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_id_rejects_empty() {
        assert_eq!(TextureId::new(""), Err(TileError::EmptyTextureId));
        let id = TextureId::new("tiles/tile1.png").unwrap();
        assert_eq!(id.as_str(), "tiles/tile1.png");
        assert_eq!(id.to_string(), "tiles/tile1.png");
    }

    #[test]
    fn test_texture_id_clones_share_storage() {
        let id = TextureId::new("tiles/tile2.png").unwrap();
        let copy = id.clone();
        assert_eq!(id, copy);
        assert!(Arc::ptr_eq(&id.0, &copy.0));
    }

    #[test]
    fn test_texture_id_try_from_string() {
        assert!(TextureId::try_from(String::new()).is_err());
        let id = TextureId::try_from("tile3".to_string()).unwrap();
        assert_eq!(String::from(id), "tile3");
    }

    #[test]
    fn test_texture_id_deserialize_rejects_empty() {
        use serde::de::value::{Error, SeqDeserializer, StringDeserializer};
        use serde::de::IntoDeserializer;

        let empty: StringDeserializer<Error> = String::new().into_deserializer();
        let err = TextureId::deserialize(empty).unwrap_err();
        assert_eq!(err.to_string(), TileError::EmptyTextureId.to_string());

        let path: StringDeserializer<Error> = "tiles/tile4.png".to_string().into_deserializer();
        assert_eq!(TextureId::deserialize(path).unwrap().as_str(), "tiles/tile4.png");

        // One empty entry fails the whole list
        let list = SeqDeserializer::<_, Error>::new(
            vec!["tiles/tile1.png".to_string(), String::new()].into_iter(),
        );
        assert!(Vec::<TextureId>::deserialize(list).is_err());
    }

    #[test]
    fn test_cell_from_point() {
        let cell = Vec2::splat(10.0);

        // Origin
        assert_eq!(CellPos::from_point(Vec2::new(0.0, 0.0), cell), CellPos::new(0, 0));

        // Inside a cell
        assert_eq!(CellPos::from_point(Vec2::new(25.5, 9.9), cell), CellPos::new(2, 0));

        // Exactly on a boundary belongs to the higher cell
        assert_eq!(CellPos::from_point(Vec2::new(10.0, 20.0), cell), CellPos::new(1, 2));

        // Truncation toward zero for small negative offsets
        assert_eq!(CellPos::from_point(Vec2::new(-5.0, -15.0), cell), CellPos::new(0, -1));
    }
}
