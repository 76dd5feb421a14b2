extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics::{
    Pixel,
    pixelcolor::{Rgb888, RgbColor},
    prelude::{DrawTarget, OriginDimensions, Size},
};

pub const WIDTH: usize = 1200;
pub const HEIGHT: usize = 780;
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT;

/// RGB888 framebuffer the whole scene is composed into, packed as
/// `0x00RRGGBB` words ready for the host surface.
pub struct DisplayBuffers {
    framebuffer: Vec<u32>,
}

impl DisplayBuffers {
    pub fn new() -> Self {
        Self {
            framebuffer: vec![0; BUFFER_SIZE],
        }
    }

    pub fn data(&self) -> &[u32] {
        &self.framebuffer
    }

    pub fn clear_screen(&mut self, color: Rgb888) {
        self.framebuffer.fill(pack(color));
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb888) {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return;
        }
        self.framebuffer[y as usize * WIDTH + x as usize] = pack(color);
    }
}

impl Default for DisplayBuffers {
    fn default() -> Self {
        Self::new()
    }
}

fn pack(color: Rgb888) -> u32 {
    ((color.r() as u32) << 16) | ((color.g() as u32) << 8) | color.b() as u32
}

impl OriginDimensions for DisplayBuffers {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for DisplayBuffers {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }
}
