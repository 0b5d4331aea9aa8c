//! Horizontal follow camera

use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_SMOOTHING, VIEWPORT_WIDTH, WORLD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Left edge of the view in world space
    pub x: f32,
    pub world_width: f32,
    pub viewport_width: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(WORLD_WIDTH, VIEWPORT_WIDTH)
    }
}

impl Camera {
    pub fn new(world_width: f32, viewport_width: f32) -> Self {
        Self {
            x: 0.0,
            world_width,
            viewport_width,
        }
    }

    /// Largest allowed offset (zero when the world fits the viewport)
    pub fn max_offset(&self) -> f32 {
        (self.world_width - self.viewport_width).max(0.0)
    }

    /// Ease toward centering `focus_x`, then clamp to the world
    pub fn follow(&mut self, focus_x: f32) {
        let target = focus_x - self.viewport_width / 2.0;
        self.x += (target - self.x) * CAMERA_SMOOTHING;
        self.x = self.x.clamp(0.0, self.max_offset());
    }

    pub fn reset(&mut self) {
        self.x = 0.0;
    }
}
