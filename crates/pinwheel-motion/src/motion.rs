use glam::Vec2;

/// Constant motion parameters applied every frame.
///
/// Speeds are per second; `scale` is applied to the rotation block after it is
/// rewritten, so it never accumulates across frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Motion {
    /// Forward speed along the heading, in units per second.
    pub forward_speed: f32,

    /// Heading change rate in radians per second. Negative turns clockwise.
    pub angular_speed: f32,

    /// Per-axis scale fused into the rotation block.
    pub scale: Vec2,

    /// Translation applied once when the transform is seeded.
    pub seed_offset: Vec2,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            forward_speed: 2.5,
            angular_speed: -5.0,
            scale: Vec2::splat(0.1),
            seed_offset: Vec2::new(-0.5, 0.0),
        }
    }
}

impl Motion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_forward_speed(mut self, speed: f32) -> Self {
        self.forward_speed = speed;
        self
    }

    pub fn with_angular_speed(mut self, speed: f32) -> Self {
        self.angular_speed = speed;
        self
    }

    pub fn with_scale(mut self, sx: f32, sy: f32) -> Self {
        self.scale = Vec2::new(sx, sy);
        self
    }

    pub fn with_seed_offset(mut self, x: f32, y: f32) -> Self {
        self.seed_offset = Vec2::new(x, y);
        self
    }
}
