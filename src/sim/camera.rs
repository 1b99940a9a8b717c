//! Horizontal camera following the plane

use serde::{Deserialize, Serialize};

use crate::clamp_lenient;

/// Visible area size in world units (supplied by the host, may change per frame)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Camera offset into the world, `x ∈ [0, world_width - viewport.width]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
}

impl Camera {
    /// Center the viewport on `target_x`, clamped to the world
    pub fn follow(&mut self, target_x: f32, viewport: &Viewport, world_width: f32) {
        self.x = clamp_lenient(
            target_x - viewport.width / 2.0,
            0.0,
            world_width - viewport.width,
        );
    }

    /// World-space x range considered "in view" (viewport plus margin)
    pub fn window(&self, viewport: &Viewport, margin: f32) -> (f32, f32) {
        (self.x - margin, self.x + viewport.width + margin)
    }

    /// Whether a world x lies inside the margin-extended view
    pub fn in_view(&self, x: f32, viewport: &Viewport, margin: f32) -> bool {
        let (min, max) = self.window(viewport, margin);
        x >= min && x <= max
    }
}
