/// Score, lives and the difficulty clock for one round of play.
#[derive(Debug, Clone)]
pub struct Round {
    score: u32,
    lives: u32,
    max_lives: u32,
    elapsed: f32,
    step_interval: f32,
    step: f32,
}

impl Round {
    pub fn new(max_lives: u32, step_interval: f32, step: f32) -> Self {
        Self {
            score: 0,
            lives: max_lives,
            max_lives,
            elapsed: 0.0,
            step_interval,
            step,
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.max_lives;
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// `1 + step * floor(elapsed / step_interval)`.
    pub fn multiplier(&self) -> f32 {
        if self.step_interval <= 0.0 {
            return 1.0;
        }
        1.0 + self.step * (self.elapsed / self.step_interval).floor()
    }

    /// Take one life. Returns the number actually lost (0 once out of lives).
    pub fn lose_life(&mut self) -> u32 {
        let before = self.lives;
        self.lives = self.lives.saturating_sub(1);
        before - self.lives
    }

    /// Restore up to `amount` lives without passing the maximum.
    /// Returns the number actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.lives;
        self.lives = self.lives.saturating_add(amount).min(self.max_lives);
        self.lives - before
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_over(&self) -> bool {
        self.lives == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_steps_every_interval() {
        let mut round = Round::new(3, 30.0, 0.5);
        assert_eq!(round.multiplier(), 1.0);
        round.advance(29.5);
        assert_eq!(round.multiplier(), 1.0);
        round.advance(0.5);
        assert_eq!(round.multiplier(), 1.5);
        round.advance(30.0);
        assert_eq!(round.multiplier(), 2.0);
        round.advance(35.0);
        assert_eq!(round.multiplier(), 2.5);
    }

    #[test]
    fn lives_saturate_at_zero() {
        let mut round = Round::new(3, 30.0, 0.5);
        assert_eq!(round.lose_life(), 1);
        assert_eq!(round.lose_life(), 1);
        assert_eq!(round.lose_life(), 1);
        assert!(round.is_over());
        assert_eq!(round.lose_life(), 0);
        assert_eq!(round.lives(), 0);
    }

    #[test]
    fn heal_never_exceeds_max() {
        let mut round = Round::new(3, 30.0, 0.5);
        assert_eq!(round.heal(1), 0);
        assert_eq!(round.lives(), 3);
        round.lose_life();
        assert_eq!(round.heal(5), 1);
        assert_eq!(round.lives(), 3);
    }

    #[test]
    fn reset_restores_a_fresh_round() {
        let mut round = Round::new(3, 30.0, 0.5);
        round.add_points(300);
        round.lose_life();
        round.advance(45.0);
        round.reset();
        assert_eq!(round.score(), 0);
        assert_eq!(round.lives(), 3);
        assert_eq!(round.multiplier(), 1.0);
    }
}
