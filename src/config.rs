use crate::*;

/// Image and sampling settings shared by every scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub image_width: usize,
    pub aspect_ratio: Float,
    pub samples_per_pixel: usize,
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 1.0,
            samples_per_pixel: 100,
            max_depth: 50,
        }
    }
}

impl RenderConfig {
    pub fn image_height(&self) -> usize {
        ((self.image_width as Float / self.aspect_ratio) as usize).max(1)
    }
}
