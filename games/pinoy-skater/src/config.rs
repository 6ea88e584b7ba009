//! Gameplay tuning.
//!
//! A settings document is merged over the defaults field by field, nested
//! tables included, so it only needs the values it overrides. Vertical placements (`ground`, `lane`) are measured upward from
//! the bottom of the screen; the game converts them to y-down world space.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Size and scoring for one kind of pooled mover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoverSpec {
    /// Number of pool slots for this kind.
    pub count: usize,
    pub width: f32,
    pub height: f32,
    /// Height of the bottom edge above the screen bottom.
    pub lane: f32,
    pub points: u32,
    /// Lives restored on pickup.
    pub heal: u32,
}

impl MoverSpec {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Sprite sizes for each player state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSizes {
    pub normal: [f32; 2],
    pub jumping: [f32; 2],
    pub sitting: [f32; 2],
}

impl Default for PlayerSizes {
    fn default() -> Self {
        Self {
            normal: [110.0, 170.0],
            jumping: [110.0, 170.0],
            sitting: [110.0, 110.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxSpeeds {
    /// Seconds between parallax steps.
    pub tick: f32,
    pub clouds: f32,
    pub mountains: f32,
    pub road: f32,
}

impl Default for ParallaxSpeeds {
    fn default() -> Self {
        Self {
            tick: 0.1,
            clouds: 1.0,
            mountains: 5.0,
            road: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkaterConfig {
    pub screen_width: f32,
    pub screen_height: f32,

    /// Seconds between obstacle spawns.
    pub obstacle_interval: f32,
    /// Seconds between collectible spawns.
    pub item_interval: f32,
    /// Heart spawns are drawn uniformly from this range, in seconds.
    pub heart_interval: [f32; 2],

    /// Mover speed in units per tick before the multiplier.
    pub base_speed: f32,
    /// Seconds of play per multiplier step.
    pub speed_step_interval: f32,
    pub speed_step: f32,

    pub player_x: f32,
    /// Height of the player's feet above the screen bottom when grounded.
    pub ground: f32,
    pub jump_height: f32,
    /// Seconds from take-off to landing.
    pub jump_duration: f32,
    /// Trimmed from each side of the player box for collisions.
    pub hitbox_margin: f32,
    pub player_sizes: PlayerSizes,

    pub max_lives: u32,

    pub rock: MoverSpec,
    pub bird: MoverSpec,
    pub candy: MoverSpec,
    pub coin: MoverSpec,
    pub heart: MoverSpec,

    /// Rocks grow from `rock_min_scale` to full size over this many seconds,
    /// then spawn at a random scale.
    pub rock_growth_secs: f32,
    pub rock_min_scale: f32,

    pub parallax: ParallaxSpeeds,

    pub hit_flash_secs: f32,
    pub hit_flash_size: [f32; 2],
}

impl Default for SkaterConfig {
    fn default() -> Self {
        Self {
            screen_width: 1200.0,
            screen_height: 700.0,
            obstacle_interval: 2.5,
            item_interval: 1.0,
            heart_interval: [20.0, 30.0],
            base_speed: 15.0,
            speed_step_interval: 30.0,
            speed_step: 0.5,
            player_x: 100.0,
            ground: 130.0,
            jump_height: 180.0,
            jump_duration: 1.0,
            hitbox_margin: 25.0,
            player_sizes: PlayerSizes::default(),
            max_lives: 3,
            rock: MoverSpec { count: 5, width: 100.0, height: 80.0, lane: 130.0, points: 0, heal: 0 },
            bird: MoverSpec { count: 5, width: 90.0, height: 70.0, lane: 300.0, points: 0, heal: 0 },
            candy: MoverSpec { count: 5, width: 60.0, height: 60.0, lane: 400.0, points: 200, heal: 0 },
            coin: MoverSpec { count: 10, width: 50.0, height: 50.0, lane: 130.0, points: 100, heal: 0 },
            heart: MoverSpec { count: 1, width: 60.0, height: 55.0, lane: 300.0, points: 50, heal: 1 },
            rock_growth_secs: 60.0,
            rock_min_scale: 0.5,
            parallax: ParallaxSpeeds::default(),
            hit_flash_secs: 0.5,
            hit_flash_size: [80.0, 80.0],
        }
    }
}

impl SkaterConfig {
    /// Parse a settings document. Missing fields, at any depth, keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(Self::default())?;
        merge(&mut merged, overrides);
        serde_json::from_value(merged)
    }

    /// Convert a height above the screen bottom to a y-down coordinate.
    pub fn bottom_y(&self, height: f32) -> f32 {
        self.screen_height - height
    }
}

/// Overlay `overrides` onto `base`. Objects merge key by key; anything else replaces.
fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                merge(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, value) => *base = value,
    }
}
