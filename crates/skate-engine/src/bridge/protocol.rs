/// Per-frame capacities of the buffers the host reads.
///
/// The host reads each section through its own pointer and length export:
/// ```text
/// instances  RenderInstance × max_instances  (8 floats each)
/// batches    LayerBatch × max_batches        (5 u32 each)
/// sounds     u8 × max_sounds
/// events     GameEvent × max_events          (4 floats each)
/// ```
/// Anything past a capacity is dropped for that frame.

use crate::api::game::GameConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_batches: usize,
    pub max_sounds: usize,
    pub max_events: usize,
}

impl ProtocolLayout {
    pub fn new(max_instances: usize, max_batches: usize, max_sounds: usize, max_events: usize) -> Self {
        Self {
            max_instances,
            max_batches,
            max_sounds,
            max_events,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_batches,
            config.max_sounds,
            config.max_events,
        )
    }
}
