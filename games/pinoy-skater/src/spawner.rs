use skate_engine::{IntervalTimer, Pool, Rng};

use crate::movers::Mover;

/// How long a spawner waits between fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnInterval {
    Fixed(f32),
    /// Uniform in `[min, max]`, redrawn after every fire.
    Random { min: f32, max: f32 },
}

/// Timer that decides when a pool gets a new mover.
#[derive(Debug, Clone)]
pub struct Spawner {
    timer: IntervalTimer,
    interval: SpawnInterval,
}

impl Spawner {
    pub fn new(interval: SpawnInterval) -> Self {
        let first = match interval {
            SpawnInterval::Fixed(secs) => secs,
            SpawnInterval::Random { max, .. } => max,
        };
        Self {
            timer: IntervalTimer::new(first),
            interval,
        }
    }

    /// Restart from zero, drawing a fresh interval for random spawners.
    pub fn reset(&mut self, rng: &mut Rng) {
        self.timer.reset();
        self.redraw(rng);
    }

    /// Advance by `dt`. Returns true when the spawner fires.
    pub fn tick(&mut self, dt: f32, rng: &mut Rng) -> bool {
        if !self.timer.tick(dt) {
            return false;
        }
        self.redraw(rng);
        true
    }

    pub fn interval(&self) -> f32 {
        self.timer.interval()
    }

    pub fn elapsed(&self) -> f32 {
        self.timer.elapsed()
    }

    fn redraw(&mut self, rng: &mut Rng) {
        if let SpawnInterval::Random { min, max } = self.interval {
            self.timer.set_interval(rng.range_f32(min, max));
        }
    }
}

/// Launch a random inactive mover from the spawn edge at `speed`.
/// Returns the slot index, or None when every mover is already in play.
pub fn spawn(pool: &mut Pool<Mover>, rng: &mut Rng, speed: f32) -> Option<usize> {
    let index = pool.activate_random(rng)?;
    if let Some(mover) = pool.get_mut(index) {
        mover.launch(speed);
    }
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SkaterConfig;
    use crate::movers::MoverKind;

    const DT: f32 = 1.0 / 60.0;

    fn obstacle_pool(config: &SkaterConfig) -> Pool<Mover> {
        Pool::from_items(
            Mover::batch(MoverKind::Rock, config).chain(Mover::batch(MoverKind::Bird, config)),
        )
    }

    #[test]
    fn fixed_spawner_fires_on_interval_and_restarts() {
        let mut rng = Rng::new(1);
        let mut spawner = Spawner::new(SpawnInterval::Fixed(0.25));
        let fires = (0..60).filter(|_| spawner.tick(0.125, &mut rng)).count();
        // 60 ticks of 0.125 s = 7.5 s, one fire every two ticks.
        assert_eq!(fires, 30);
        assert_eq!(spawner.elapsed(), 0.0);
    }

    #[test]
    fn random_spawner_redraws_after_each_fire() {
        let mut rng = Rng::new(9);
        let mut spawner = Spawner::new(SpawnInterval::Random { min: 20.0, max: 30.0 });
        spawner.reset(&mut rng);
        for _ in 0..20 {
            let interval = spawner.interval();
            assert!((20.0..=30.0).contains(&interval));
            // Jump straight to the fire.
            assert!(spawner.tick(interval, &mut rng));
            assert_eq!(spawner.elapsed(), 0.0);
        }
    }

    #[test]
    fn spawn_places_mover_at_edge_with_speed() {
        let config = SkaterConfig::default();
        let mut pool = obstacle_pool(&config);
        let mut rng = Rng::new(42);

        let index = spawn(&mut pool, &mut rng, 22.5).unwrap();
        let mover = pool.get(index).unwrap();
        assert_eq!(mover.x, config.screen_width);
        assert_eq!(mover.speed, 22.5);
        assert!(pool.is_active(index));
    }

    #[test]
    fn never_more_active_than_capacity() {
        let config = SkaterConfig::default();
        let mut pool = obstacle_pool(&config);
        let mut rng = Rng::new(3);
        let mut spawned = 0;
        for _ in 0..25 {
            if spawn(&mut pool, &mut rng, 15.0).is_some() {
                spawned += 1;
            }
            assert!(pool.active_count() <= pool.capacity());
        }
        assert_eq!(spawned, 10);
        assert!(spawn(&mut pool, &mut rng, 15.0).is_none());
    }

    #[test]
    fn spawn_timer_fires_at_two_and_a_half_seconds() {
        let config = SkaterConfig::default();
        let mut rng = Rng::new(5);
        let mut spawner = Spawner::new(SpawnInterval::Fixed(config.obstacle_interval));
        let first = (1..=1000).find(|_| spawner.tick(DT, &mut rng)).unwrap();
        // 150 ticks is 2.5 s; f32 accumulation may land one tick late.
        assert!((150..=151).contains(&first));
    }
}
