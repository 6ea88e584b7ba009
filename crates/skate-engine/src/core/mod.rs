pub mod scene;
pub mod pool;
pub mod bounds;
pub mod rng;
pub mod time;
