use bytemuck::{Pod, Zeroable};

/// Per-instance render data read by the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Center X in world space.
    pub x: f32,
    /// Center Y in world space (y-down).
    pub y: f32,
    /// Rendered width in world units.
    pub width: f32,
    /// Rendered height in world units.
    pub height: f32,
    /// Atlas column.
    pub sprite_col: f32,
    /// Atlas row.
    pub atlas_row: f32,
    /// UV cell span (1.0 = single cell, 2.0 = 2x2 block).
    pub cell_span: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// A contiguous run of instances sharing layer, atlas and blend mode.
/// The host issues one draw call per batch.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct LayerBatch {
    pub layer: u32,
    pub atlas: u32,
    pub blend: u32,
    /// Index of the first instance in the batch.
    pub start: u32,
    /// Number of instances in the batch.
    pub count: u32,
}

impl LayerBatch {
    pub const WORDS: usize = 5;
}

/// Render buffer containing all sprite instances and their draw batches.
pub struct RenderBuffer {
    /// Sprite instances, ordered back-to-front by layer.
    pub instances: Vec<RenderInstance>,
    /// Draw batches covering `instances` in order.
    pub batches: Vec<LayerBatch>,
    /// Instances past this count are dropped.
    max_instances: usize,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(max_instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_instances),
            batches: Vec::with_capacity(32),
            max_instances,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.batches.clear();
    }

    /// Append an instance tagged with (layer, atlas, blend).
    /// Extends the last batch when its key matches, otherwise opens a new one.
    /// Returns false if the buffer is full.
    pub fn push(&mut self, instance: RenderInstance, layer: u32, atlas: u32, blend: u32) -> bool {
        if self.instances.len() >= self.max_instances {
            return false;
        }
        let start = self.instances.len() as u32;
        self.instances.push(instance);
        match self.batches.last_mut() {
            Some(b) if b.layer == layer && b.atlas == atlas && b.blend == blend => b.count += 1,
            _ => self.batches.push(LayerBatch { layer, atlas, blend, start, count: 1 }),
        }
        true
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn batch_count(&self) -> u32 {
        self.batches.len() as u32
    }

    /// Raw pointer to instance data for host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Raw pointer to batch data for host reads.
    pub fn batches_ptr(&self) -> *const u32 {
        self.batches.as_ptr() as *const u32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), RenderInstance::STRIDE_BYTES);
        assert_eq!(std::mem::size_of::<LayerBatch>(), LayerBatch::WORDS * 4);
    }

    #[test]
    fn consecutive_pushes_share_a_batch() {
        let mut buf = RenderBuffer::new();
        buf.push(RenderInstance::default(), 2, 0, 0);
        buf.push(RenderInstance::default(), 2, 0, 0);
        buf.push(RenderInstance::default(), 3, 0, 0);
        assert_eq!(buf.instance_count(), 3);
        assert_eq!(buf.batch_count(), 2);
        assert_eq!(buf.batches[0].count, 2);
        assert_eq!(buf.batches[1].start, 2);
    }

    #[test]
    fn full_buffer_drops_instances() {
        let mut buf = RenderBuffer::with_capacity(1);
        assert!(buf.push(RenderInstance::default(), 0, 0, 0));
        assert!(!buf.push(RenderInstance::default(), 0, 0, 0));
        assert_eq!(buf.instance_count(), 1);
    }
}
