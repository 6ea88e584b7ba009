use glam::Vec2;
use skate_engine::input::queue::keys;
use skate_engine::*;

use crate::collision::{self, Collision};
use crate::config::SkaterConfig;
use crate::events;
use crate::movers::{rock_growth_scale, Mover, MoverKind};
use crate::parallax::Parallax;
use crate::player::Player;
use crate::round::Round;
use crate::sounds;
use crate::spawner::{self, SpawnInterval, Spawner};

const FIXED_DT: f32 = 1.0 / 60.0;
const SEED: u64 = 42;
const MAX_INSTANCES: usize = 128;

// Pointer bands in world y (y-down)
const JUMP_BAND_END: f32 = 300.0;
const SIT_BAND_START: f32 = 580.0;

/// Screens the game moves through. The host UI draws the menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Instructions,
    Playing,
    GameOver,
}

impl Phase {
    fn index(self) -> f32 {
        match self {
            Phase::Start => 0.0,
            Phase::Instructions => 1.0,
            Phase::Playing => 2.0,
            Phase::GameOver => 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerAction {
    Jump,
    StandUp,
    Sit,
}

fn pointer_action(y: f32) -> PointerAction {
    if y < JUMP_BAND_END {
        PointerAction::Jump
    } else if y < SIT_BAND_START {
        PointerAction::StandUp
    } else {
        PointerAction::Sit
    }
}

/// Impact sprite shown briefly after an obstacle hit.
#[derive(Debug, Clone)]
struct HitFlash {
    center: Vec2,
    timer: IntervalTimer,
}

impl HitFlash {
    /// Fades from 1 to 0 over the flash lifetime.
    fn opacity(&self) -> f32 {
        let interval = self.timer.interval();
        if interval <= 0.0 {
            return 1.0;
        }
        (1.0 - self.timer.elapsed() / interval).clamp(0.0, 1.0)
    }
}

pub struct PinoySkater {
    config: SkaterConfig,
    phase: Phase,
    player: Player,
    round: Round,
    /// Rocks and birds.
    obstacles: Pool<Mover>,
    /// Candy and coins.
    collectibles: Pool<Mover>,
    hearts: Pool<Mover>,
    obstacle_spawner: Spawner,
    item_spawner: Spawner,
    heart_spawner: Spawner,
    parallax: Parallax,
    hit_flash: Option<HitFlash>,
    /// Settings loaded mid-round, applied when the next round starts.
    pending_config: Option<SkaterConfig>,
}

impl PinoySkater {
    pub fn new() -> Self {
        Self::with_config(SkaterConfig::default())
    }

    pub fn with_config(config: SkaterConfig) -> Self {
        let obstacles = Pool::from_items(
            Mover::batch(MoverKind::Rock, &config).chain(Mover::batch(MoverKind::Bird, &config)),
        );
        let collectibles = Pool::from_items(
            Mover::batch(MoverKind::Candy, &config).chain(Mover::batch(MoverKind::Coin, &config)),
        );
        let hearts = Pool::from_items(Mover::batch(MoverKind::Heart, &config));
        let [heart_min, heart_max] = config.heart_interval;

        Self {
            phase: Phase::Start,
            player: Player::new(&config),
            round: Round::new(config.max_lives, config.speed_step_interval, config.speed_step),
            obstacles,
            collectibles,
            hearts,
            obstacle_spawner: Spawner::new(SpawnInterval::Fixed(config.obstacle_interval)),
            item_spawner: Spawner::new(SpawnInterval::Fixed(config.item_interval)),
            heart_spawner: Spawner::new(SpawnInterval::Random { min: heart_min, max: heart_max }),
            parallax: Parallax::new(&config),
            hit_flash: None,
            pending_config: None,
            config,
        }
    }

    /// Rebuild pools, timers and the player from `config`, keeping the phase.
    fn apply_config(&mut self, config: SkaterConfig) {
        let phase = self.phase;
        *self = Self::with_config(config);
        self.phase = phase;
        log::info!(
            "Settings applied: {} lives, base speed {}",
            self.config.max_lives,
            self.config.base_speed
        );
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn set_phase(&mut self, ctx: &mut EngineContext, phase: Phase) {
        log::info!("Phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        ctx.emit_event(GameEvent::new(events::PHASE, phase.index()));
    }

    /// Menu click: Start goes to Instructions, Instructions and GameOver start a round.
    fn advance_phase(&mut self, ctx: &mut EngineContext) {
        match self.phase {
            Phase::Start => self.set_phase(ctx, Phase::Instructions),
            Phase::Instructions | Phase::GameOver => self.start_round(ctx),
            Phase::Playing => return,
        }
        ctx.emit_sound(sounds::CLICK);
    }

    fn start_round(&mut self, ctx: &mut EngineContext) {
        if let Some(config) = self.pending_config.take() {
            self.apply_config(config);
        }
        self.round.reset();
        self.player.reset();
        self.obstacles.release_all();
        self.collectibles.release_all();
        self.hearts.release_all();
        self.obstacle_spawner.reset(&mut ctx.rng);
        self.item_spawner.reset(&mut ctx.rng);
        self.heart_spawner.reset(&mut ctx.rng);
        self.parallax.reset();
        self.hit_flash = None;
        self.grow_rocks();

        self.set_phase(ctx, Phase::Playing);
        ctx.emit_sound(sounds::MUSIC_START);
        self.emit_score(ctx);
        self.emit_lives(ctx);
        log::info!(
            "Round started: {} lives, next heart in {:.1}s",
            self.round.lives(),
            self.heart_spawner.interval()
        );
    }

    fn end_round(&mut self, ctx: &mut EngineContext) {
        log::info!(
            "Game over: score {} after {:.1}s",
            self.round.score(),
            self.round.elapsed()
        );
        self.set_phase(ctx, Phase::GameOver);
        ctx.emit_sound(sounds::GAME_OVER);
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        let playing = self.phase == Phase::Playing;
        match *event {
            InputEvent::PointerDown { y, .. } => {
                if playing {
                    self.apply_pointer(y);
                } else {
                    self.advance_phase(ctx);
                }
            }
            InputEvent::PointerMove { y, .. } if playing => self.apply_pointer(y),
            InputEvent::KeyDown { key_code } if playing => match key_code {
                keys::W | keys::ARROW_UP => {
                    self.player.jump();
                }
                keys::S | keys::ARROW_DOWN => {
                    self.player.sit();
                }
                _ => {}
            },
            InputEvent::KeyUp { key_code } if playing => {
                if matches!(key_code, keys::S | keys::ARROW_DOWN) {
                    self.player.stand_up();
                }
            }
            InputEvent::Custom { kind, .. } if kind == events::CUSTOM_START && !playing => {
                self.advance_phase(ctx);
            }
            _ => {}
        }
    }

    fn apply_pointer(&mut self, y: f32) {
        match pointer_action(y) {
            PointerAction::Jump => self.player.jump(),
            PointerAction::StandUp => self.player.stand_up(),
            PointerAction::Sit => self.player.sit(),
        };
    }

    /// One tick of play.
    fn step(&mut self, ctx: &mut EngineContext, dt: f32) {
        self.round.advance(dt);
        self.parallax.update(dt);
        self.grow_rocks();
        self.player.update(dt);
        self.spawn_movers(dt, &mut ctx.rng);

        for pool in [&mut self.obstacles, &mut self.collectibles, &mut self.hearts] {
            for (_, mover) in pool.iter_active_mut() {
                mover.advance();
            }
            pool.release_where(Mover::is_offscreen);
        }

        self.resolve_collisions(ctx);

        let flash_done = self
            .hit_flash
            .as_mut()
            .is_some_and(|flash| flash.timer.tick(dt));
        if flash_done {
            self.hit_flash = None;
        }

        if self.round.is_over() {
            self.end_round(ctx);
        }
    }

    /// While the growth window is open every rock, in play or not, shares one scale.
    fn grow_rocks(&mut self) {
        let Some(scale) = rock_growth_scale(
            self.round.elapsed(),
            self.config.rock_growth_secs,
            self.config.rock_min_scale,
        ) else {
            return;
        };
        for index in 0..self.obstacles.capacity() {
            if let Some(mover) = self.obstacles.get_mut(index) {
                if mover.kind == MoverKind::Rock {
                    mover.set_scale(scale);
                }
            }
        }
    }

    fn spawn_movers(&mut self, dt: f32, rng: &mut Rng) {
        let speed = self.config.base_speed * self.round.multiplier();
        let growing = rock_growth_scale(
            self.round.elapsed(),
            self.config.rock_growth_secs,
            self.config.rock_min_scale,
        )
        .is_some();

        if self.obstacle_spawner.tick(dt, rng) {
            let spawned = spawner::spawn(&mut self.obstacles, rng, speed);
            if let Some(mover) = spawned.and_then(|index| self.obstacles.get_mut(index)) {
                if mover.kind == MoverKind::Rock && !growing {
                    mover.set_scale(rng.range_f32(self.config.rock_min_scale, 1.0));
                }
            }
        }
        if self.item_spawner.tick(dt, rng) {
            spawner::spawn(&mut self.collectibles, rng, speed);
        }
        if self.heart_spawner.tick(dt, rng) {
            if spawner::spawn(&mut self.hearts, rng, speed).is_some() {
                log::debug!("Heart launched, next in {:.1}s", self.heart_spawner.interval());
            }
        }
    }

    fn resolve_collisions(&mut self, ctx: &mut EngineContext) {
        let hitbox = self.player.hitbox();
        let score = self.round.score();
        let lives = self.round.lives();

        let mut collisions = collision::resolve(&hitbox, &mut self.obstacles, &mut self.round);
        collisions.extend(collision::resolve(&hitbox, &mut self.collectibles, &mut self.round));
        collisions.extend(collision::resolve(&hitbox, &mut self.hearts, &mut self.round));

        for hit in &collisions {
            log::debug!(
                "{:?} collision: +{} points, lives {:+}",
                hit.kind,
                hit.points,
                hit.lives_delta
            );
            ctx.emit_sound(hit.sound);
            if hit.kind.is_obstacle() {
                self.show_hit(ctx, hit);
            }
        }

        if self.round.score() != score {
            self.emit_score(ctx);
        }
        if self.round.lives() != lives {
            self.emit_lives(ctx);
        }
    }

    /// Flash sits just ahead of the player, level with the obstacle.
    fn show_hit(&mut self, ctx: &mut EngineContext, hit: &Collision) {
        let [width, _] = self.config.hit_flash_size;
        let center = Vec2::new(
            self.player.x() + hit.bounds.width() + width * 0.5,
            hit.bounds.center().y,
        );
        self.hit_flash = Some(HitFlash {
            center,
            timer: IntervalTimer::new(self.config.hit_flash_secs),
        });
        ctx.emit_event(GameEvent::new(events::HIT, center.x).with_b(center.y));
    }

    fn emit_score(&self, ctx: &mut EngineContext) {
        ctx.emit_event(GameEvent::new(events::SCORE, self.round.score() as f32));
    }

    fn emit_lives(&self, ctx: &mut EngineContext) {
        ctx.emit_event(
            GameEvent::new(events::LIVES, self.round.lives() as f32)
                .with_b(self.round.max_lives() as f32),
        );
    }

    fn spawn_sprite(ctx: &mut EngineContext, name: &str, bounds: Aabb, layer: RenderLayer) {
        let sprite = ctx.sprite(name);
        Self::spawn_entity(ctx, name, sprite, bounds, layer);
    }

    fn spawn_entity(
        ctx: &mut EngineContext,
        name: &str,
        sprite: SpriteComponent,
        bounds: Aabb,
        layer: RenderLayer,
    ) {
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(name)
                .with_pos(bounds.center())
                .with_size(Vec2::new(bounds.width(), bounds.height()))
                .with_layer(layer)
                .with_sprite(sprite),
        );
    }

    /// Rebuild the scene from game state. Runs every tick.
    fn sync_entities(&self, ctx: &mut EngineContext) {
        ctx.scene.clear();
        let screen = Vec2::new(self.config.screen_width, self.config.screen_height);

        Self::spawn_sprite(
            ctx,
            "background",
            Aabb::from_min_size(Vec2::ZERO, screen),
            RenderLayer::Background,
        );

        for layer in self.parallax.layers() {
            for x in layer.tiles() {
                Self::spawn_sprite(
                    ctx,
                    layer.sprite,
                    Aabb::from_min_size(Vec2::new(x, 0.0), screen),
                    RenderLayer::Parallax,
                );
            }
        }

        for pool in [&self.obstacles, &self.collectibles, &self.hearts] {
            for (_, mover) in pool.iter_active() {
                Self::spawn_sprite(ctx, mover.kind.sprite_name(), mover.bounds(), RenderLayer::Objects);
            }
        }

        Self::spawn_sprite(
            ctx,
            self.player.state().sprite_name(),
            self.player.bounds(),
            RenderLayer::Actors,
        );

        if let Some(flash) = &self.hit_flash {
            let size = Vec2::from(self.config.hit_flash_size);
            let sprite = ctx
                .sprite("hit")
                .with_blend(BlendMode::Additive)
                .with_alpha(flash.opacity());
            Self::spawn_entity(
                ctx,
                "hit",
                sprite,
                Aabb::from_min_size(flash.center - size * 0.5, size),
                RenderLayer::VFX,
            );
        }
    }
}

impl Default for PinoySkater {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for PinoySkater {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: FIXED_DT,
            world_width: self.config.screen_width,
            world_height: self.config.screen_height,
            max_instances: MAX_INSTANCES,
            seed: SEED,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.emit_event(GameEvent::new(events::PHASE, self.phase.index()));
        self.sync_entities(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            self.handle_input(ctx, event);
        }

        if self.phase == Phase::Playing {
            self.step(ctx, FIXED_DT);
        }

        self.sync_entities(ctx);
    }

    /// Replace the tuning. Outside a round it applies at once; during a round
    /// it is held until the next round starts.
    fn load_settings(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let config = SkaterConfig::from_json(json)?;
        if self.phase == Phase::Playing {
            log::info!("Settings received mid-round, applying at the next round");
            self.pending_config = Some(config);
        } else {
            self.apply_config(config);
        }
        Ok(())
    }
}
