use crate::tiles::TextureId;
use bevy::prelude::*;
use std::collections::HashMap;

/// Starts loading a texture and hands back a drawable handle right away
/// The handle may stay blank until the load finishes (or forever, if it fails)
pub trait TextureLoader {
    type Handle: Clone;

    fn begin_load(&mut self, id: &TextureId) -> Self::Handle;
}

impl TextureLoader for AssetServer {
    type Handle = Handle<Image>;

    fn begin_load(&mut self, id: &TextureId) -> Handle<Image> {
        // Fire and forget: the asset server loads in the background and
        // sprites using the handle start drawing once the image arrives
        AssetServer::load(self, id.as_str().to_owned())
    }
}

/// Texture cache resource: one handle per texture id, loaded on first use
/// Grid cells and palette entries hold ids only and resolve them here at draw time
#[derive(Resource)]
pub struct TextureCache<L: TextureLoader> {
    loader: L,
    textures: HashMap<TextureId, L::Handle>,
}

/// Cache backed by bevy's asset server
pub type ImageCache = TextureCache<AssetServer>;

impl<L: TextureLoader> TextureCache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            textures: HashMap::new(),
        }
    }

    /// Get the handle for a texture, starting its load if this is the first request
    pub fn get_texture(&mut self, id: &TextureId) -> &L::Handle {
        let loader = &mut self.loader;
        self.textures.entry(id.clone()).or_insert_with(|| {
            debug!("Loading texture {}", id);
            loader.begin_load(id)
        })
    }

    /// Number of distinct textures requested so far
    pub fn len(&self) -> usize {
        self.textures.len()
    }
}

/// Creates the image cache once the asset server is available
pub fn setup_texture_cache(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(ImageCache::new(asset_server.clone()));
    info!("Texture cache ready");
}

/// Loader for headless apps: hands out a fresh in-memory image per request
#[cfg(test)]
#[derive(Default)]
pub struct MemoryImageLoader {
    images: Assets<Image>,
}

#[cfg(test)]
impl TextureLoader for MemoryImageLoader {
    type Handle = Handle<Image>;

    fn begin_load(&mut self, _id: &TextureId) -> Handle<Image> {
        self.images.add(Image::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Stand-in for a loaded image
    #[derive(Debug)]
    struct FakeTexture {
        id: TextureId,
    }

    /// Loader that records how often each id was loaded
    #[derive(Default)]
    struct CountingLoader {
        loads: HashMap<TextureId, usize>,
    }

    impl TextureLoader for CountingLoader {
        type Handle = Arc<FakeTexture>;

        fn begin_load(&mut self, id: &TextureId) -> Arc<FakeTexture> {
            *self.loads.entry(id.clone()).or_default() += 1;
            Arc::new(FakeTexture { id: id.clone() })
        }
    }

    fn tex(id: &str) -> TextureId {
        TextureId::new(id).unwrap()
    }

    #[test]
    fn test_same_id_returns_same_handle() {
        let mut cache = TextureCache::new(CountingLoader::default());
        let id = tex("tiles/tile1.png");

        let first = cache.get_texture(&id).clone();
        let second = cache.get_texture(&id).clone();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.id, id);
        assert_eq!(cache.loader.loads[&id], 1);
    }

    #[test]
    fn test_one_load_per_id() {
        let mut cache = TextureCache::new(CountingLoader::default());
        let ids: Vec<_> = (1..=8).map(|i| tex(&format!("tiles/tile{}.png", i))).collect();

        // Repeated lookups, like a full grid redraw, in interleaved order
        for _ in 0..32 {
            for id in &ids {
                cache.get_texture(id);
            }
        }

        assert_eq!(cache.len(), 8);
        assert!(ids.iter().all(|id| cache.loader.loads[id] == 1));
    }

    #[test]
    fn test_distinct_ids_get_distinct_handles() {
        let mut cache = TextureCache::new(CountingLoader::default());
        let a = cache.get_texture(&tex("a")).clone();
        let b = cache.get_texture(&tex("b")).clone();

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.id.as_str(), "a");
        assert_eq!(b.id.as_str(), "b");
    }

    #[test]
    fn test_loads_start_on_first_request() {
        let mut cache = TextureCache::new(CountingLoader::default());
        let id = tex("tiles/tile5.png");

        assert_eq!(cache.len(), 0);
        assert!(cache.loader.loads.is_empty());

        let loaded = cache.get_texture(&id).clone();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.loader.loads[&id], 1);
        assert!(Arc::ptr_eq(&loaded, &cache.textures[&id]));
    }
}
