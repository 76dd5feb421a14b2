//! The whole book scene: backdrop, resting pages, the folding leaf
//! mid-flip, spine, and the control strip.

extern crate alloc;

use alloc::vec::Vec;

use embedded_graphics::{
    Drawable,
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_6X13},
    },
    pixelcolor::Rgb888,
    prelude::{Point, Primitive, Size},
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Baseline, Text},
};

use crate::content;
use crate::photo::Photo;
use crate::presenter::{BookPresenter, BookState, FlipDirection, PageLayout};
use crate::ui::geom::Rect;
use crate::ui::page_content;
use crate::ui::palette;
use crate::ui::view::{UiContext, View};

const BOOK_WIDTH: i32 = 1040;
const BOOK_TOP: i32 = 28;
const CONTROL_STRIP: i32 = 72;
const SPINE_WIDTH: i32 = 22;
const RULED_LINES: i32 = 30;
const EDGE_LINES: i32 = 18;

/// Fraction of the flip window during which the moving page is
/// treated as edge-on and its content is not drawn.
const CONTENT_FADE_IN: f32 = 0.3;
const CONTENT_FADE_OUT: f32 = 0.7;

pub struct BookView<'a> {
    pub presenter: &'a BookPresenter,
    /// Raw progress through the flip window, `0.0..=1.0`. Ignored
    /// while no flip is in flight.
    pub progress: f32,
    pub photo: Option<&'a Photo>,
}

impl View for BookView<'_> {
    fn render(&mut self, ctx: &mut UiContext<'_>, rect: Rect) {
        ctx.buffers.clear_screen(palette::BACKDROP);

        let book = Rect::new(
            rect.x + (rect.w - BOOK_WIDTH) / 2,
            rect.y + BOOK_TOP,
            BOOK_WIDTH,
            rect.h - BOOK_TOP - CONTROL_STRIP,
        );

        // Drop shadow under the block of the book.
        fill(ctx, Rect::new(book.x + 14, book.y + 14, book.w, book.h), Rgb888::new(6, 10, 24));

        self.draw_left_page(ctx, book);
        if !self.presenter.is_open() {
            draw_closed_edges(ctx, book.right_half());
        }
        self.draw_right_stack(ctx, book);
        if self.presenter.is_open() {
            draw_spine(ctx, book);
        }
        self.draw_folding_leaves(ctx, book);
        self.draw_controls(ctx, rect, book);
    }
}

impl BookView<'_> {
    /// Static left page: the back face of the last flipped leaf.
    fn draw_left_page(&self, ctx: &mut UiContext<'_>, book: Rect) {
        let spread = self.presenter.current_spread();
        if spread == 0 {
            return;
        }
        let panel = book.left_half();
        paper_panel(ctx, panel, Side::Left);
        page_content::render_page(
            ctx.buffers,
            panel,
            content::page(spread * 2 - 1).kind,
            self.photo,
        );
    }

    /// Resting right-hand pages in stacking order. During a forward
    /// flip this also lays down the incoming spread's front face,
    /// which the moving leaf lifts away from.
    fn draw_right_stack(&self, ctx: &mut UiContext<'_>, book: Rect) {
        let mut stack: Vec<(usize, PageLayout)> = (0..self.presenter.page_count())
            .filter_map(|i| self.presenter.page_layout(i).map(|layout| (i, layout)))
            .collect();
        stack.sort_by_key(|(_, layout)| layout.z);

        for (index, layout) in stack {
            if layout.flip.is_some() {
                continue;
            }
            let panel = book.right_half();
            paper_panel(ctx, panel, Side::Right);
            page_content::render_page(ctx.buffers, panel, content::page(index).kind, self.photo);
        }

        if let BookState::Flipping { from, to } = self.presenter.state() {
            if to > from {
                let panel = book.right_half();
                paper_panel(ctx, panel, Side::Right);
                if to * 2 < self.presenter.page_count() {
                    page_content::render_page(
                        ctx.buffers,
                        panel,
                        content::page(to * 2).kind,
                        self.photo,
                    );
                }
            }
        }
    }

    /// The moving leaf draws above everything else in the scene.
    fn draw_folding_leaves(&self, ctx: &mut UiContext<'_>, book: Rect) {
        for index in 0..self.presenter.page_count() {
            if let Some(layout) = self.presenter.page_layout(index) {
                if let Some(direction) = layout.flip {
                    self.draw_folding_leaf(ctx, book, index, direction);
                }
            }
        }
    }

    /// The moving leaf as a panel hinged at the spine. Its width
    /// follows the cosine of the turn angle: full on the right, zero
    /// edge-on at the midpoint, then growing on the left showing the
    /// back face.
    fn draw_folding_leaf(
        &self,
        ctx: &mut UiContext<'_>,
        book: Rect,
        index: usize,
        direction: FlipDirection,
    ) {
        let t = self.progress.clamp(0.0, 1.0);
        let eased = t * t * (3.0 - 2.0 * t);
        let fold = match direction {
            FlipDirection::Forward => 1.0 - 2.0 * eased,
            FlipDirection::Backward => 2.0 * eased - 1.0,
        };
        let half = book.w / 2;
        let width = (fold.abs() * half as f32) as i32;
        if width < 2 {
            return;
        }
        let spine_x = book.x + half;
        let edge_on = t > CONTENT_FADE_IN && t < CONTENT_FADE_OUT;

        if fold > 0.0 {
            // Front face, shrinking toward (or growing from) the spine.
            let panel = Rect::new(spine_x, book.y, width, book.h);
            paper_panel(ctx, panel, Side::Right);
            if !edge_on {
                page_content::render_page(ctx.buffers, panel, content::page(index).kind, self.photo);
            }
        } else {
            // Back face laying over onto the left side.
            let panel = Rect::new(spine_x - width, book.y, width, book.h);
            paper_panel(ctx, panel, Side::Left);
            if !edge_on && index + 1 < content::page_count() {
                page_content::render_page(
                    ctx.buffers,
                    panel,
                    content::page(index + 1).kind,
                    self.photo,
                );
            }
        }
    }

    fn draw_controls(&self, ctx: &mut UiContext<'_>, rect: Rect, book: Rect) {
        let cx = rect.center_x();
        let y = book.bottom() + 22;

        let label = self.presenter.status_label();
        let pill_w = label.len() as i32 * 6 + 32;
        let pill = Rect::new(cx - pill_w / 2, y - 6, pill_w, 24);
        RoundedRectangle::with_equal_corners(Rectangle::from(pill), Size::new(12, 12))
            .into_styled(PrimitiveStyle::with_fill(palette::BACKDROP_GLOW))
            .draw(ctx.buffers)
            .ok();
        let status_style = MonoTextStyle::new(&FONT_6X13, palette::COVER_TEXT);
        let label_w = label.len() as i32 * 6;
        Text::with_baseline(&label, Point::new(cx - label_w / 2, y), status_style, Baseline::Top)
            .draw(ctx.buffers)
            .ok();

        let hint = if self.presenter.is_open() || self.presenter.is_flipping() {
            "Left: previous   Right: next   Esc: quit"
        } else {
            "Enter: open book   Esc: quit"
        };
        let hint_color = if self.presenter.is_flipping() {
            palette::MUTED
        } else {
            palette::COVER_MUTED
        };
        let hint_style = MonoTextStyle::new(&FONT_6X10, hint_color);
        let hint_w = hint.len() as i32 * 6;
        Text::with_baseline(hint, Point::new(cx - hint_w / 2, y + 26), hint_style, Baseline::Top)
            .draw(ctx.buffers)
            .ok();
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

fn fill(ctx: &mut UiContext<'_>, rect: Rect, color: Rgb888) {
    Rectangle::from(rect)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(ctx.buffers)
        .ok();
}

/// Blank page: paper, ruled lines, and a shading strip along the
/// spine edge.
fn paper_panel(ctx: &mut UiContext<'_>, panel: Rect, side: Side) {
    fill(ctx, panel, palette::PAPER);
    for i in 1..RULED_LINES {
        let y = panel.y + i * panel.h / RULED_LINES;
        fill(ctx, Rect::new(panel.x, y, panel.w, 1), palette::RULE_LINE);
    }
    let shade_w = panel.w.min(10);
    let shade = match side {
        Side::Left => Rect::new(panel.right() - shade_w, panel.y, shade_w, panel.h),
        Side::Right => Rect::new(panel.x, panel.y, shade_w, panel.h),
    };
    fill(ctx, shade, palette::PAPER_SHADE);
}

/// Stacked page edges peeking out behind the closed cover.
fn draw_closed_edges(ctx: &mut UiContext<'_>, panel: Rect) {
    for i in 0..EDGE_LINES {
        let x = panel.right() - 2 - i * 3;
        let color = if i % 2 == 0 {
            palette::SPINE_EDGE
        } else {
            palette::PAGE_EDGE
        };
        fill(ctx, Rect::new(x, panel.y + 3, 2, panel.h - 6), color);
    }
}

fn draw_spine(ctx: &mut UiContext<'_>, book: Rect) {
    let spine = Rect::new(book.center_x() - SPINE_WIDTH / 2, book.y, SPINE_WIDTH, book.h);
    fill(ctx, spine, palette::SPINE);
    fill(ctx, Rect::new(spine.x, spine.y, 2, spine.h), palette::SPINE_EDGE);
    fill(ctx, Rect::new(spine.right() - 2, spine.y, 2, spine.h), palette::SPINE_EDGE);
    // Owner's initials running down the spine.
    let style = MonoTextStyle::new(&FONT_6X10, palette::COVER_TEXT);
    let mut y = book.y + book.h / 2 - 21;
    for initial in ["M", "B", "N"] {
        Text::with_baseline(initial, Point::new(spine.x + SPINE_WIDTH / 2 - 3, y), style, Baseline::Top)
            .draw(ctx.buffers)
            .ok();
        y += 14;
    }
}
