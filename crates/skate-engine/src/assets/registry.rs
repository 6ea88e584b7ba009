use std::collections::{HashMap, HashSet};
use crate::assets::manifest::AssetManifest;
use crate::components::sprite::{SpriteComponent, AtlasId, BlendMode};

/// Registry of named sprites, built from an AssetManifest.
/// Provides name-based sprite lookup for game code.
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteComponent>,
    /// Names already reported missing, so each is logged once.
    missing: HashSet<String>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
            missing: HashSet::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut sprites = HashMap::with_capacity(manifest.sprites.len());
        for (name, desc) in &manifest.sprites {
            sprites.insert(name.clone(), SpriteComponent {
                atlas: AtlasId(desc.atlas),
                col: desc.col as f32,
                row: desc.row as f32,
                cell_span: desc.span as f32,
                alpha: 1.0,
                blend: BlendMode::Alpha,
            });
        }
        Self {
            sprites,
            missing: HashSet::new(),
        }
    }

    /// Look up a sprite by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&SpriteComponent> {
        self.sprites.get(name)
    }

    /// Look up a sprite by name, falling back to the first atlas cell.
    /// The first miss for each name is logged.
    pub fn get_or_placeholder(&mut self, name: &str) -> SpriteComponent {
        if let Some(sprite) = self.sprites.get(name) {
            return sprite.clone();
        }
        if self.missing.insert(name.to_string()) {
            log::warn!("Sprite '{}' not in manifest, using placeholder", name);
        }
        SpriteComponent::default()
    }

    /// Number of named sprites.
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
