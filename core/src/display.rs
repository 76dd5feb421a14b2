use crate::framebuffer::DisplayBuffers;

/// Seam between the core renderer and whatever surface hosts it.
pub trait Display {
    fn present(&mut self, buffers: &DisplayBuffers);
}
