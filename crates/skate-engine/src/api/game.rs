use crate::api::types::{EntityId, SoundEvent, GameEvent};
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::SpriteRegistry;
use crate::components::sprite::SpriteComponent;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::instance::RenderBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum number of render instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of render batches (default: 32).
    pub max_batches: usize,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Seed for the engine RNG. Same seed, same spawn sequence.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_instances: 256,
            max_batches: 32,
            max_sounds: 32,
            max_events: 32,
            seed: 42,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed tick. `input` holds the events queued since the previous frame
    /// on the first tick of a frame and is empty on any catch-up ticks.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Optional read-only render pass for custom render commands.
    fn render(&self, _ctx: &mut RenderContext) {}

    /// Apply a host-provided settings document. Games without tunables ignore it.
    fn load_settings(&mut self, _json: &str) -> Result<(), serde_json::Error> {
        Ok(())
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub sprites: SpriteRegistry,
    pub rng: Rng,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_seed(GameConfig::default().seed)
    }

    /// Create an EngineContext whose RNG starts from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            scene: Scene::new(),
            sprites: SpriteRegistry::new(),
            rng: Rng::new(seed),
            sounds: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next entity ID. IDs wrap around after `u32::MAX`; the
    /// scene is rebuilt every tick, so live IDs never collide.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Emit a sound event to be forwarded to the host.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }

    /// Parse an asset manifest and replace the sprite registry with its sprites.
    /// On a parse error the current registry is left untouched.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let manifest = AssetManifest::from_json(json)?;
        for name in manifest.unbound_sounds() {
            log::warn!("Sound '{}' has no event_id and can never be triggered", name);
        }
        self.sprites = SpriteRegistry::from_manifest(&manifest);
        log::info!(
            "Manifest loaded: {} atlases, {} sprites, {} sounds",
            manifest.atlases.len(),
            manifest.sprites.len(),
            manifest.sounds.len()
        );
        Ok(())
    }

    /// Look up a sprite by name, substituting a placeholder if the manifest lacks it.
    pub fn sprite(&mut self, name: &str) -> SpriteComponent {
        self.sprites.get_or_placeholder(name)
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for optional custom render commands.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
}
