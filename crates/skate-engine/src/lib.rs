pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{EntityId, SoundEvent, GameEvent};
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::sprite::{SpriteComponent, AtlasId, BlendMode};
pub use core::scene::Scene;
pub use core::pool::{Pool, Recycle};
pub use core::bounds::Aabb;
pub use core::rng::Rng;
pub use core::time::{FixedTimestep, IntervalTimer};
pub use renderer::instance::{RenderInstance, RenderBuffer, LayerBatch};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::AssetManifest;
pub use assets::registry::SpriteRegistry;
pub use bridge::protocol::ProtocolLayout;
pub use systems::render::build_render_buffer;
