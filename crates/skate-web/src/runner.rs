use skate_engine::{
    Game, GameConfig, GameEvent, EngineContext, RenderContext,
    InputEvent, InputQueue, RenderBuffer,
    FixedTimestep, ProtocolLayout,
};
use skate_engine::systems::render::build_render_buffer;

/// Generic game runner that wires up the engine loop.
///
/// wasm-bindgen cannot export generic structs, so each game keeps a
/// `thread_local!` GameRunner and exports free functions through `export_game!`.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    /// Handed to catch-up steps so a press is seen once.
    empty_input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    /// Flat buffer of sound event IDs for host reads.
    sound_buffer: Vec<u8>,
    /// Game events published for the last frame.
    event_buffer: Vec<GameEvent>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);

        Self {
            game,
            ctx: EngineContext::with_seed(config.seed),
            input: InputQueue::new(),
            empty_input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            timestep,
            sound_buffer: Vec::with_capacity(config.max_sounds),
            event_buffer: Vec::with_capacity(config.max_events),
            layout,
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    /// Sounds and events emitted here are published with the first frame.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: fixed updates, then render and frame data packing.
    ///
    /// Queued input is handed to the first fixed step and drained. A frame that
    /// runs no step leaves the queue for the next frame that does.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            let input = if step == 0 { &self.input } else { &self.empty_input };
            self.game.update(&mut self.ctx, input);
        }
        if steps > 0 {
            self.input.clear();
        }

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
            };
            self.game.render(&mut render_ctx);
        }
        if self.render_buffer.batches.len() > self.layout.max_batches {
            log::warn!(
                "{} batches exceed capacity {}, truncating",
                self.render_buffer.batches.len(),
                self.layout.max_batches
            );
            self.render_buffer.batches.truncate(self.layout.max_batches);
        }

        self.publish_frame_data();
    }

    /// Copy pending sounds and events into the host buffers, then clear them.
    fn publish_frame_data(&mut self) {
        self.sound_buffer.clear();
        self.sound_buffer.extend(
            self.ctx.sounds.iter().take(self.layout.max_sounds).map(|s| s.0 as u8),
        );

        if self.ctx.events.len() > self.layout.max_events {
            log::warn!(
                "{} game events exceed capacity {}, truncating",
                self.ctx.events.len(),
                self.layout.max_events
            );
        }
        self.event_buffer.clear();
        self.event_buffer.extend(self.ctx.events.iter().take(self.layout.max_events).copied());

        self.ctx.clear_frame_data();
    }

    /// Forward an asset manifest to the engine. A bad document is logged and
    /// the previous sprites stay in place.
    pub fn load_manifest(&mut self, json: &str) {
        if let Err(e) = self.ctx.load_manifest(json) {
            log::error!("Failed to parse asset manifest: {}", e);
        }
    }

    /// Forward a settings document to the game. A bad document is logged and
    /// the current settings stay in place.
    pub fn load_settings(&mut self, json: &str) {
        if let Err(e) = self.game.load_settings(json) {
            log::error!("Failed to parse game settings: {}", e);
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Pointer accessors for host reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn batches_ptr(&self) -> *const u32 {
        self.render_buffer.batches_ptr()
    }

    pub fn batch_count(&self) -> u32 {
        self.render_buffer.batch_count()
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.event_buffer.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.event_buffer.len() as u32
    }

    /// Events published for the last frame.
    pub fn game_events(&self) -> &[GameEvent] {
        &self.event_buffer
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_batches(&self) -> u32 {
        self.layout.max_batches as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.layout.max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use skate_engine::{Entity, GameEvent, SoundEvent};

    /// Counts updates and the pointer presses it was shown.
    #[derive(Default)]
    struct Counter {
        updates: u32,
        presses_seen: u32,
        threshold: Option<u32>,
    }

    #[derive(serde::Deserialize)]
    struct CounterSettings {
        threshold: u32,
    }

    impl Game for Counter {
        fn config(&self) -> GameConfig {
            GameConfig {
                fixed_dt: 0.1,
                max_sounds: 2,
                ..GameConfig::default()
            }
        }

        fn init(&mut self, ctx: &mut EngineContext) {
            ctx.emit_event(GameEvent::new(9.0, 0.0));
            let id = ctx.next_id();
            let sprite = ctx.sprite("dot");
            ctx.scene.spawn(
                Entity::new(id)
                    .with_pos(Vec2::new(10.0, 10.0))
                    .with_size(Vec2::splat(4.0))
                    .with_sprite(sprite),
            );
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            for event in input.iter() {
                if let InputEvent::PointerDown { .. } = event {
                    self.presses_seen += 1;
                    ctx.emit_sound(SoundEvent(3));
                    ctx.emit_event(GameEvent::new(1.0, self.presses_seen as f32));
                }
            }
        }

        fn load_settings(&mut self, json: &str) -> Result<(), serde_json::Error> {
            let settings: CounterSettings = serde_json::from_str(json)?;
            self.threshold = Some(settings.threshold);
            Ok(())
        }
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut runner = GameRunner::new(Counter::default());
        runner.tick(1.0);
        assert_eq!(runner.game().updates, 0);
    }

    #[test]
    fn input_is_seen_by_first_step_only() {
        let mut runner = GameRunner::new(Counter::default());
        runner.init();
        runner.push_input(InputEvent::PointerDown { x: 1.0, y: 1.0 });
        runner.tick(0.35);
        assert_eq!(runner.game().updates, 3);
        assert_eq!(runner.game().presses_seen, 1);
        assert_eq!(runner.sound_events_len(), 1);
        // The init event plus one press.
        assert_eq!(runner.game_events_len(), 2);

        // Queue was cleared; the next frame sees nothing.
        runner.tick(0.1);
        assert_eq!(runner.game().presses_seen, 1);
        assert_eq!(runner.sound_events_len(), 0);
    }

    #[test]
    fn input_waits_for_a_frame_that_steps() {
        let mut runner = GameRunner::new(Counter::default());
        runner.init();
        runner.push_input(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        // Half-step frames: only every second one runs an update.
        runner.tick(0.05);
        assert_eq!(runner.game().updates, 0);
        runner.tick(0.05);
        runner.tick(0.05);
        assert_eq!(runner.game().presses_seen, 1);

        runner.tick(0.05);
        assert_eq!(runner.game().updates, 2);
        assert_eq!(runner.game().presses_seen, 1);
    }

    #[test]
    fn init_events_reach_the_first_frame() {
        let mut runner = GameRunner::new(Counter::default());
        runner.init();
        runner.push_input(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        runner.tick(0.1);
        let kinds: Vec<f32> = runner.game_events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![9.0, 1.0]);

        runner.tick(0.1);
        assert_eq!(runner.game_events_len(), 0);
    }

    #[test]
    fn init_events_survive_a_frame_without_steps() {
        let mut runner = GameRunner::new(Counter::default());
        runner.init();
        runner.tick(0.01);
        assert_eq!(runner.game_events_len(), 1);
    }

    #[test]
    fn sounds_are_capped_per_frame() {
        let mut runner = GameRunner::new(Counter::default());
        runner.init();
        for _ in 0..5 {
            runner.push_input(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        }
        runner.tick(0.1);
        assert_eq!(runner.sound_events_len(), 2);
    }

    #[test]
    fn scene_is_rendered() {
        let mut runner = GameRunner::new(Counter::default());
        runner.init();
        runner.tick(0.1);
        assert_eq!(runner.instance_count(), 1);
        assert_eq!(runner.batch_count(), 1);
    }

    #[test]
    fn bad_documents_are_ignored() {
        let mut runner = GameRunner::new(Counter::default());
        runner.init();
        runner.load_settings(r#"{ "threshold": 7 }"#);
        runner.load_settings("nope");
        assert_eq!(runner.game().threshold, Some(7));

        runner.load_manifest(r#"{ "atlases": [], "sprites": { "dot": { "atlas": 0, "col": 1, "row": 0 } } }"#);
        runner.load_manifest("{");
        assert_eq!(runner.context().sprites.len(), 1);
    }

    #[test]
    fn capacities_follow_config() {
        let runner = GameRunner::new(Counter::default());
        assert_eq!(runner.max_sounds(), 2);
        assert_eq!(runner.max_instances(), 256);
        assert_eq!(runner.max_events(), 32);
        assert_eq!(runner.world_width(), 800.0);
    }
}
