use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Integer rectangle used for scene layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn inset(&self, d: i32) -> Rect {
        Rect::new(self.x + d, self.y + d, (self.w - 2 * d).max(0), (self.h - 2 * d).max(0))
    }

    /// Left half, up to (and excluding) the vertical centerline.
    pub fn left_half(&self) -> Rect {
        Rect::new(self.x, self.y, self.w / 2, self.h)
    }

    pub fn right_half(&self) -> Rect {
        let half = self.w / 2;
        Rect::new(self.x + half, self.y, self.w - half, self.h)
    }
}

impl From<Rect> for Rectangle {
    fn from(rect: Rect) -> Self {
        Rectangle::new(
            Point::new(rect.x, rect.y),
            Size::new(rect.w.max(0) as u32, rect.h.max(0) as u32),
        )
    }
}
