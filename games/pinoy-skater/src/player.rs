use glam::Vec2;
use skate_engine::Aabb;

use crate::config::SkaterConfig;

/// Absorbs f32 drift so a jump ends on the tick its duration is reached.
const PROGRESS_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Normal,
    Jumping,
    Sitting,
}

impl PlayerState {
    pub fn sprite_name(self) -> &'static str {
        match self {
            PlayerState::Normal => "skater",
            PlayerState::Jumping => "skater_jump",
            PlayerState::Sitting => "skater_sit",
        }
    }
}

/// The skater. Stands at a fixed x, jumps on a parabola and ducks on demand.
#[derive(Debug, Clone)]
pub struct Player {
    state: PlayerState,
    /// Left edge.
    x: f32,
    /// Bottom edge while grounded (y-down).
    ground: f32,
    /// Current bottom edge.
    bottom: f32,
    jump_timer: f32,
    jump_height: f32,
    jump_duration: f32,
    hitbox_margin: f32,
    sizes: [Vec2; 3],
}

impl Player {
    pub fn new(config: &SkaterConfig) -> Self {
        let ground = config.bottom_y(config.ground);
        let sizes = &config.player_sizes;
        Self {
            state: PlayerState::Normal,
            x: config.player_x,
            ground,
            bottom: ground,
            jump_timer: 0.0,
            jump_height: config.jump_height,
            jump_duration: config.jump_duration,
            hitbox_margin: config.hitbox_margin,
            sizes: [
                Vec2::from(sizes.normal),
                Vec2::from(sizes.jumping),
                Vec2::from(sizes.sitting),
            ],
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    /// Start a jump. Only possible from Normal.
    pub fn jump(&mut self) -> bool {
        if self.state != PlayerState::Normal {
            return false;
        }
        self.state = PlayerState::Jumping;
        self.jump_timer = 0.0;
        true
    }

    /// Duck. Only possible from Normal.
    pub fn sit(&mut self) -> bool {
        if self.state != PlayerState::Normal {
            return false;
        }
        self.state = PlayerState::Sitting;
        true
    }

    /// Leave the sitting pose. No-op in any other state.
    pub fn stand_up(&mut self) -> bool {
        if self.state != PlayerState::Sitting {
            return false;
        }
        self.state = PlayerState::Normal;
        true
    }

    pub fn update(&mut self, dt: f32) {
        if self.state != PlayerState::Jumping {
            self.bottom = self.ground;
            return;
        }

        self.jump_timer += dt;
        let progress = self.jump_timer / self.jump_duration;
        if progress < 1.0 - PROGRESS_EPSILON {
            let height = 4.0 * self.jump_height * progress * (1.0 - progress);
            self.bottom = self.ground - height;
        } else {
            self.bottom = self.ground;
            self.jump_timer = 0.0;
            self.state = PlayerState::Normal;
        }
    }

    /// Height of the feet above the ground line.
    pub fn height(&self) -> f32 {
        self.ground - self.bottom
    }

    pub fn size(&self) -> Vec2 {
        match self.state {
            PlayerState::Normal => self.sizes[0],
            PlayerState::Jumping => self.sizes[1],
            PlayerState::Sitting => self.sizes[2],
        }
    }

    /// The sprite's box for the current state.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_bottom_left(self.x, self.bottom, self.size())
    }

    /// The box used for collisions: the sprite box trimmed on both sides.
    pub fn hitbox(&self) -> Aabb {
        self.bounds().inset_x(self.hitbox_margin)
    }

    /// Back on the ground, standing.
    pub fn reset(&mut self) {
        self.state = PlayerState::Normal;
        self.bottom = self.ground;
        self.jump_timer = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn player() -> Player {
        Player::new(&SkaterConfig::default())
    }

    #[test]
    fn jump_returns_to_normal_after_duration() {
        let mut p = player();
        assert!(p.jump());
        for _ in 0..59 {
            p.update(DT);
            assert_eq!(p.state(), PlayerState::Jumping);
        }
        p.update(DT);
        assert_eq!(p.state(), PlayerState::Normal);
        assert_eq!(p.height(), 0.0);
    }

    #[test]
    fn jump_follows_parabola() {
        let mut p = player();
        p.jump();
        // Quarter steps are exact in f32.
        p.update(0.25);
        assert_eq!(p.height(), 4.0 * 180.0 * 0.25 * 0.75);
        p.update(0.25);
        assert_eq!(p.height(), 180.0);
        p.update(0.25);
        p.update(0.25);
        assert_eq!(p.state(), PlayerState::Normal);
        assert_eq!(p.height(), 0.0);
    }

    #[test]
    fn jumping_and_sitting_are_exclusive() {
        let mut p = player();
        assert!(p.jump());
        assert!(!p.sit());
        assert!(!p.stand_up());
        assert_eq!(p.state(), PlayerState::Jumping);

        let mut p = player();
        assert!(p.sit());
        assert!(!p.jump());
        assert!(!p.sit());
        assert!(p.stand_up());
        assert_eq!(p.state(), PlayerState::Normal);
        assert!(!p.stand_up());
    }

    #[test]
    fn hitbox_follows_state_size() {
        let mut p = player();
        let standing = p.hitbox();
        assert_eq!(standing.min.x, 125.0);
        assert_eq!(standing.max.x, 185.0);
        assert_eq!(standing.max.y, 570.0);
        assert_eq!(standing.height(), 170.0);

        p.sit();
        let sitting = p.hitbox();
        assert_eq!(sitting.height(), 110.0);
        assert_eq!(sitting.max.y, 570.0);
    }
}
