//! Coregistered color and depth buffers.

use crate::image2d::Image2D;
use crate::pixel::{Gray32F, RGBA8};

#[derive(Debug, Clone)]
pub struct Framebuffer {
    pub color: Image2D<RGBA8>,
    pub depth: Image2D<Gray32F>,
}

impl Framebuffer {
    /// Depth is initialized to 1.0 (far plane), color to opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        let mut depth = Image2D::<Gray32F>::new(width, height);
        depth.fill(Gray32F::new(1.0));
        Self {
            color: Image2D::<RGBA8>::new(width, height),
            depth,
        }
    }

    pub fn width(&self) -> u32 {
        self.color.width()
    }

    pub fn height(&self) -> u32 {
        self.color.height()
    }

    pub fn clear(&mut self, color: RGBA8) {
        self.color.fill(color);
        self.depth.fill(Gray32F::new(1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clears_depth_to_far_plane() {
        let fb = Framebuffer::new(4, 4);
        assert_eq!(fb.depth.get(0, 0).color(), 1.0);
    }

    #[test]
    fn new_clears_color_to_opaque_black() {
        let fb = Framebuffer::new(4, 4);
        assert_eq!(fb.color.get(0, 0), RGBA8::default());
    }

    #[test]
    fn clear_resets_both_buffers() {
        let mut fb = Framebuffer::new(2, 2);
        fb.color.set(0, 0, RGBA8::new(255, 0, 0, 255));
        fb.depth.set(0, 0, Gray32F::new(0.1));
        fb.clear(RGBA8::new(1, 2, 3, 255));
        assert_eq!(fb.color.get(0, 0), RGBA8::new(1, 2, 3, 255));
        assert_eq!(fb.depth.get(0, 0).color(), 1.0);
    }
}
