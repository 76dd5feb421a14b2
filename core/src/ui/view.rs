use crate::framebuffer::DisplayBuffers;
use crate::ui::geom::Rect;

pub struct UiContext<'a> {
    pub buffers: &'a mut DisplayBuffers,
}

pub trait View {
    fn render(&mut self, ctx: &mut UiContext<'_>, rect: Rect);
}
