// Game event kinds (Rust → host UI)
pub const PHASE: f32 = 1.0;
pub const SCORE: f32 = 2.0;
pub const LIVES: f32 = 3.0;
pub const HIT: f32 = 4.0;

// Custom event kinds (host UI → Rust)
pub const CUSTOM_START: u32 = 1;
