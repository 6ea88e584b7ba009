/// Render layer. Controls draw order for entities.
///
/// Layers are drawn back-to-front: Background first, VFX last.
/// Within a layer, entities draw in spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    /// Static backdrop.
    Background = 0,
    /// Scrolling parallax strips.
    Parallax = 1,
    /// Obstacles and collectibles.
    #[default]
    Objects = 2,
    /// The player.
    Actors = 3,
    /// Hit flashes and other short-lived effects.
    VFX = 4,
}

impl RenderLayer {
    /// Convert to u8 for protocol serialization.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_objects() {
        assert_eq!(RenderLayer::default(), RenderLayer::Objects);
    }

    #[test]
    fn ordering_is_back_to_front() {
        assert!(RenderLayer::Background < RenderLayer::Parallax);
        assert!(RenderLayer::Parallax < RenderLayer::Objects);
        assert!(RenderLayer::Objects < RenderLayer::Actors);
        assert!(RenderLayer::Actors < RenderLayer::VFX);
    }

    #[test]
    fn wire_values_follow_draw_order() {
        assert_eq!(RenderLayer::Background.as_u8(), 0);
        assert_eq!(RenderLayer::VFX.as_u8(), 4);
    }
}
