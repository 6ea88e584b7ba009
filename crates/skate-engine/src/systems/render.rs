use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Orders instances back-to-front by layer and keeps spawn order inside a
/// layer. Neighbours sharing atlas and blend mode are merged into one batch.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut drawable: Vec<&Entity> = entities
        .filter(|e| e.active && e.sprite.is_some())
        .collect();
    drawable.sort_by_key(|e| e.layer);

    let mut dropped = 0usize;
    for entity in drawable {
        let Some(sprite) = &entity.sprite else {
            continue;
        };

        let instance = RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            width: entity.size.x,
            height: entity.size.y,
            sprite_col: sprite.col,
            atlas_row: sprite.row,
            cell_span: sprite.cell_span,
            alpha: sprite.alpha,
        };

        if !buffer.push(
            instance,
            entity.layer.as_u8() as u32,
            sprite.atlas.0,
            sprite.blend.as_u32(),
        ) {
            dropped += 1;
        }
    }

    if dropped > 0 {
        log::warn!("Render buffer full, dropped {} instances", dropped);
    }
}
