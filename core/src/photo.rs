//! Decoded profile photograph and its blitting helpers.

extern crate alloc;

use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb888;

use crate::framebuffer::DisplayBuffers;
use crate::ui::Rect;

/// Raw RGB pixels of the cover photograph, decoded by the host.
pub struct Photo {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

impl Photo {
    pub fn new(width: u32, height: u32, rgb: Vec<u8>) -> Self {
        debug_assert_eq!(rgb.len(), (width * height * 3) as usize);
        Self { width, height, rgb }
    }

    fn sample(&self, x: usize, y: usize) -> Rgb888 {
        let idx = (y * self.width as usize + x) * 3;
        match self.rgb.get(idx..idx + 3) {
            Some(px) => Rgb888::new(px[0], px[1], px[2]),
            None => Rgb888::new(0, 0, 0),
        }
    }

    /// Nearest-neighbour blit cropped to the inscribed circle of
    /// `rect`, for the round cover portrait.
    pub fn draw_circular(&self, buffers: &mut DisplayBuffers, rect: Rect) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let diameter = rect.w.min(rect.h).max(1);
        let radius = diameter / 2;
        let center = (diameter - 1) as f32 / 2.0;
        // Crop the source to its centered square so the portrait is
        // not squeezed.
        let src_side = self.width.min(self.height) as usize;
        let src_x0 = (self.width as usize - src_side) / 2;
        let src_y0 = (self.height as usize - src_side) / 2;
        for ty in 0..diameter {
            for tx in 0..diameter {
                let dx = tx as f32 - center;
                let dy = ty as f32 - center;
                if dx * dx + dy * dy > (radius * radius) as f32 {
                    continue;
                }
                let sx = src_x0 + (tx as usize * src_side) / diameter as usize;
                let sy = src_y0 + (ty as usize * src_side) / diameter as usize;
                buffers.set_pixel(rect.x + tx, rect.y + ty, self.sample(sx, sy));
            }
        }
    }
}
