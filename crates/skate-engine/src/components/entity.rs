use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::layer::RenderLayer;
use crate::components::sprite::SpriteComponent;

/// Fat Entity: a single struct with optional components.
/// Games that rebuild their scene every frame spawn these as plain draw records.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are not drawn).
    pub active: bool,
    /// Center position in world space.
    pub pos: Vec2,
    /// Rendered size in world units (width, height).
    pub size: Vec2,
    /// Draw order bucket.
    pub layer: RenderLayer,
    /// Sprite component (optional; entities without sprites are invisible).
    pub sprite: Option<SpriteComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            size: Vec2::ONE,
            layer: RenderLayer::default(),
            sprite: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    /// Position the entity by its top-left corner instead of its center.
    pub fn with_top_left(mut self, top_left: Vec2) -> Self {
        self.pos = top_left + self.size * 0.5;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_left_uses_current_size() {
        let e = Entity::new(EntityId(1))
            .with_size(Vec2::new(100.0, 50.0))
            .with_top_left(Vec2::new(10.0, 20.0));
        assert_eq!(e.pos, Vec2::new(60.0, 45.0));
    }
}
