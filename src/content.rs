//! Sprite dimension lookup
//!
//! The simulation never touches pixel data; it only needs to know how big each
//! sprite is to size collision rectangles.

use std::collections::HashMap;

use glam::Vec2;

/// Size used when a sprite is unknown
pub const FALLBACK_SPRITE_SIZE: Vec2 = Vec2::new(32.0, 32.0);

/// Something that knows sprite dimensions by name
pub trait SpriteSource {
    fn sprite_size(&self, name: &str) -> Option<Vec2>;

    /// Size of `name`, or [`FALLBACK_SPRITE_SIZE`] with a warning
    fn size_or_default(&self, name: &str) -> Vec2 {
        self.sprite_size(name).unwrap_or_else(|| {
            log::warn!("Unknown sprite '{}', using fallback size", name);
            FALLBACK_SPRITE_SIZE
        })
    }
}

/// In-memory sprite size table
#[derive(Debug, Clone)]
pub struct SpriteCatalog {
    sizes: HashMap<String, Vec2>,
}

impl Default for SpriteCatalog {
    fn default() -> Self {
        Self::from_pairs([
            ("burger", Vec2::new(48.0, 48.0)),
            ("teddybear", Vec2::new(40.0, 48.0)),
            ("frenchfries", Vec2::new(8.0, 24.0)),
            ("teddybearprojectile", Vec2::new(12.0, 12.0)),
            // One frame of the explosion strip
            ("explosion", Vec2::new(64.0, 64.0)),
        ])
    }
}

impl SpriteCatalog {
    pub fn empty() -> Self {
        Self {
            sizes: HashMap::new(),
        }
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Vec2)>) -> Self {
        Self {
            sizes: pairs
                .into_iter()
                .map(|(name, size)| (name.to_string(), size))
                .collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, size: Vec2) {
        self.sizes.insert(name.into(), size);
    }
}

impl SpriteSource for SpriteCatalog {
    fn sprite_size(&self, name: &str) -> Option<Vec2> {
        self.sizes.get(name).copied()
    }
}
