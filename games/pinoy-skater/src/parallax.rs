use skate_engine::IntervalTimer;

use crate::config::SkaterConfig;

/// Two screen-wide tiles scrolling left at a fixed speed, wrapping end to end.
#[derive(Debug, Clone)]
pub struct ParallaxLayer {
    pub sprite: &'static str,
    speed: f32,
    width: f32,
    /// Left edges of the two tiles.
    tiles: [f32; 2],
}

impl ParallaxLayer {
    pub fn new(sprite: &'static str, speed: f32, width: f32) -> Self {
        Self {
            sprite,
            speed,
            width,
            tiles: [0.0, width],
        }
    }

    /// Move both tiles one step. A tile fully off the left edge wraps to the right.
    pub fn step(&mut self) {
        for x in &mut self.tiles {
            *x -= self.speed;
            if *x <= -self.width {
                *x = self.width;
            }
        }
    }

    pub fn tiles(&self) -> [f32; 2] {
        self.tiles
    }

    pub fn reset(&mut self) {
        self.tiles = [0.0, self.width];
    }
}

/// Clouds, mountains and road, stepped together on a fixed cadence.
#[derive(Debug, Clone)]
pub struct Parallax {
    layers: Vec<ParallaxLayer>,
    timer: IntervalTimer,
}

impl Parallax {
    pub fn new(config: &SkaterConfig) -> Self {
        let speeds = &config.parallax;
        let width = config.screen_width;
        Self {
            layers: vec![
                ParallaxLayer::new("clouds", speeds.clouds, width),
                ParallaxLayer::new("mountains", speeds.mountains, width),
                ParallaxLayer::new("road", speeds.road, width),
            ],
            timer: IntervalTimer::new(speeds.tick),
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.timer.tick(dt) {
            for layer in &mut self.layers {
                layer.step();
            }
        }
    }

    /// Back to front.
    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    pub fn reset(&mut self) {
        self.timer.reset();
        for layer in &mut self.layers {
            layer.reset();
        }
    }
}
