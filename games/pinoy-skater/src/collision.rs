use skate_engine::{Aabb, Pool, SoundEvent};

use crate::movers::{Mover, MoverKind};
use crate::round::Round;

/// Outcome of the player touching one mover.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub kind: MoverKind,
    pub points: u32,
    /// Net change in lives: -1 for a hit (0 once out of lives), +n for a heal.
    pub lives_delta: i32,
    /// Mover box at the moment of contact.
    pub bounds: Aabb,
    pub sound: SoundEvent,
}

/// Release every active mover overlapping `hitbox` and apply its effect to
/// the round. Collisions are reported in slot order.
pub fn resolve(hitbox: &Aabb, pool: &mut Pool<Mover>, round: &mut Round) -> Vec<Collision> {
    let hits: Vec<(usize, Aabb)> = pool
        .iter_active()
        .map(|(index, mover)| (index, mover.bounds()))
        .filter(|(_, bounds)| hitbox.overlaps(bounds))
        .collect();

    let mut collisions = Vec::with_capacity(hits.len());
    for (index, bounds) in hits {
        let Some(mover) = pool.get(index) else {
            continue;
        };
        let (kind, points, heal) = (mover.kind, mover.points, mover.heal);
        pool.release(index);

        let lives_delta = if kind.is_obstacle() {
            -(round.lose_life() as i32)
        } else {
            round.add_points(points);
            round.heal(heal) as i32
        };

        collisions.push(Collision {
            kind,
            points: if kind.is_obstacle() { 0 } else { points },
            lives_delta,
            bounds,
            sound: kind.sound(),
        });
    }
    collisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SkaterConfig;
    use crate::player::Player;
    use crate::sounds;
    use skate_engine::Rng;

    /// Activate every slot and park the movers at `x`.
    fn pool_at(kind: MoverKind, config: &SkaterConfig, x: f32) -> Pool<Mover> {
        let mut pool = Pool::from_items(Mover::batch(kind, config));
        let mut rng = Rng::new(7);
        while let Some(index) = pool.activate_random(&mut rng) {
            if let Some(mover) = pool.get_mut(index) {
                mover.launch(15.0);
                mover.x = x;
            }
        }
        pool
    }

    #[test]
    fn obstacle_hit_costs_exactly_one_life_and_recycles() {
        let mut config = SkaterConfig::default();
        config.rock.count = 1;
        let player = Player::new(&config);
        let mut pool = pool_at(MoverKind::Rock, &config, 150.0);
        let mut round = Round::new(3, 30.0, 0.5);

        let collisions = resolve(&player.hitbox(), &mut pool, &mut round);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].lives_delta, -1);
        assert_eq!(collisions[0].sound, sounds::OUCH);
        assert_eq!(round.lives(), 2);
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.get(0).unwrap().x, config.screen_width);
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let config = SkaterConfig::default();
        let player = Player::new(&config);
        // Hitbox right edge is 185.
        let mut pool = pool_at(MoverKind::Coin, &config, 185.0);
        let mut round = Round::new(3, 30.0, 0.5);
        assert!(resolve(&player.hitbox(), &mut pool, &mut round).is_empty());
        assert_eq!(pool.active_count(), pool.capacity());
    }

    #[test]
    fn margin_is_trimmed_from_the_hitbox() {
        let config = SkaterConfig::default();
        let player = Player::new(&config);
        // Overlaps the sprite box (ends at 210) but not the hitbox (ends at 185).
        let mut pool = pool_at(MoverKind::Coin, &config, 195.0);
        let mut round = Round::new(3, 30.0, 0.5);
        assert!(resolve(&player.hitbox(), &mut pool, &mut round).is_empty());
    }

    #[test]
    fn collectibles_score_and_heart_heals_to_cap() {
        let config = SkaterConfig::default();
        let player = Player::new(&config);
        let mut round = Round::new(3, 30.0, 0.5);

        let mut coins = pool_at(MoverKind::Coin, &config, 150.0);
        let collisions = resolve(&player.hitbox(), &mut coins, &mut round);
        assert_eq!(collisions.len(), 10);
        assert_eq!(round.score(), 1000);
        assert!(collisions.iter().all(|c| c.sound == sounds::COIN && c.lives_delta == 0));

        // The heart lane is above a standing player; jump to its height.
        let mut heart = pool_at(MoverKind::Heart, &config, 150.0);
        assert!(resolve(&player.hitbox(), &mut heart, &mut round).is_empty());

        let mut jumper = Player::new(&config);
        jumper.jump();
        jumper.update(0.5);
        round.lose_life();
        let collisions = resolve(&jumper.hitbox(), &mut heart, &mut round);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].lives_delta, 1);
        assert_eq!(collisions[0].points, 50);
        assert_eq!(round.lives(), 3);
        assert_eq!(round.score(), 1050);
    }
}
