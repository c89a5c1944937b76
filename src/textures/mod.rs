pub mod cache;

// Re-export commonly used items
pub use cache::{setup_texture_cache, ImageCache, TextureCache, TextureLoader};

#[cfg(test)]
pub use cache::MemoryImageLoader;
