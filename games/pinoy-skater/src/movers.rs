use glam::Vec2;
use skate_engine::{Aabb, Recycle, SoundEvent};

use crate::config::{MoverSpec, SkaterConfig};
use crate::sounds;

/// Every kind of pooled actor that scrolls in from the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoverKind {
    Rock,
    Bird,
    Candy,
    Coin,
    Heart,
}

impl MoverKind {
    pub fn is_obstacle(self) -> bool {
        matches!(self, MoverKind::Rock | MoverKind::Bird)
    }

    /// Sound cue played when the player touches this mover.
    pub fn sound(self) -> SoundEvent {
        match self {
            MoverKind::Rock | MoverKind::Bird => sounds::OUCH,
            MoverKind::Candy => sounds::CANDY,
            MoverKind::Coin | MoverKind::Heart => sounds::COIN,
        }
    }

    pub fn sprite_name(self) -> &'static str {
        match self {
            MoverKind::Rock => "rock",
            MoverKind::Bird => "bird",
            MoverKind::Candy => "candy",
            MoverKind::Coin => "coin",
            MoverKind::Heart => "heart",
        }
    }

    pub fn spec(self, config: &SkaterConfig) -> &MoverSpec {
        match self {
            MoverKind::Rock => &config.rock,
            MoverKind::Bird => &config.bird,
            MoverKind::Candy => &config.candy,
            MoverKind::Coin => &config.coin,
            MoverKind::Heart => &config.heart,
        }
    }
}

/// One pooled obstacle or collectible.
///
/// Positioned by its left edge and bottom edge (y-down), so scaling a rock
/// keeps it standing on its lane.
#[derive(Debug, Clone)]
pub struct Mover {
    pub kind: MoverKind,
    /// Left edge.
    pub x: f32,
    /// Bottom edge, fixed for the mover's lifetime.
    pub bottom: f32,
    /// Unscaled size.
    pub base_size: Vec2,
    pub scale: f32,
    /// Units per tick, assigned at spawn.
    pub speed: f32,
    pub points: u32,
    pub heal: u32,
    spawn_x: f32,
}

impl Mover {
    pub fn new(kind: MoverKind, config: &SkaterConfig) -> Self {
        let spec = kind.spec(config);
        let scale = if kind == MoverKind::Rock { config.rock_min_scale } else { 1.0 };
        Self {
            kind,
            x: config.screen_width,
            bottom: config.bottom_y(spec.lane),
            base_size: spec.size(),
            scale,
            speed: 0.0,
            points: spec.points,
            heal: spec.heal,
            spawn_x: config.screen_width,
        }
    }

    /// `count` movers of `kind`, as configured.
    pub fn batch(kind: MoverKind, config: &SkaterConfig) -> impl Iterator<Item = Mover> + '_ {
        (0..kind.spec(config).count).map(move |_| Mover::new(kind, config))
    }

    pub fn spawn_x(&self) -> f32 {
        self.spawn_x
    }

    pub fn size(&self) -> Vec2 {
        self.base_size * self.scale
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_bottom_left(self.x, self.bottom, self.size())
    }

    /// Put the mover at the spawn edge moving at `speed`.
    pub fn launch(&mut self, speed: f32) {
        self.x = self.spawn_x;
        self.speed = speed;
    }

    /// Move one tick to the left.
    pub fn advance(&mut self) {
        self.x -= self.speed;
    }

    /// True once the mover is entirely past the left edge of the screen.
    pub fn is_offscreen(&self) -> bool {
        self.x <= -self.size().x
    }

    /// Resize around the left and bottom edges.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

impl Recycle for Mover {
    fn recycle(&mut self) {
        self.x = self.spawn_x;
        self.speed = 0.0;
    }
}

/// Rock scale while the growth window is open, or None once it has closed.
pub fn rock_growth_scale(elapsed: f32, window: f32, min_scale: f32) -> Option<f32> {
    if elapsed >= window || window <= 0.0 {
        return None;
    }
    let progress = (elapsed / window).clamp(0.0, 1.0);
    Some(min_scale + (1.0 - min_scale) * progress)
}
