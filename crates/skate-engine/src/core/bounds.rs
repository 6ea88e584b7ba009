use glam::Vec2;

/// Axis-aligned bounding box in world units (y-down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from its top-left corner and size.
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self { min, max: min + size }
    }

    /// Box from its left edge, bottom edge and size.
    pub fn from_bottom_left(left: f32, bottom: f32, size: Vec2) -> Self {
        Self::from_min_size(Vec2::new(left, bottom - size.y), size)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Shrink the box by `margin` on the left and right sides.
    /// Never inverts: a margin wider than half the box collapses it to its center line.
    pub fn inset_x(&self, margin: f32) -> Self {
        let margin = margin.min(self.width() * 0.5);
        Self {
            min: Vec2::new(self.min.x + margin, self.min.y),
            max: Vec2::new(self.max.x - margin, self.max.y),
        }
    }

    /// Strict overlap test: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}
