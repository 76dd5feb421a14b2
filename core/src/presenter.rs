//! Book presenter: the navigation state machine and the per-page
//! layout function.
//!
//! The lifecycle is a tagged variant rather than loose flags, so an
//! invalid combination (flipping while closed, a spread out of range)
//! cannot be represented. Transitions are two-phase: a navigation
//! command arms a flip, [`BookPresenter::complete_flip`] commits it.
//! The wall-clock window between the two lives in the application
//! layer, which keeps this module deterministic under test.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Animation window for a single flip, in milliseconds.
pub const FLIP_DURATION_MS: u32 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookState {
    Closed,
    /// Reading spread `spread`, in `1..=max_spread`.
    Open { spread: usize },
    /// A flip is in flight. `from`/`to` are spread indices; 0 means
    /// the closed book, so `from: 0` is the cover opening and
    /// `to: 0` the cover closing.
    Flipping { from: usize, to: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipDirection {
    /// Rotating 0 -> -180: opening the cover or advancing a spread.
    Forward,
    /// Rotating -180 -> 0: retreating a spread or closing the cover.
    Backward,
}

/// Resting rotation of a page surface around the spine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageRotation {
    Deg0,
    Deg180,
}

/// Placement of one page surface for the current render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLayout {
    pub rotation: PageRotation,
    /// Stacking order; higher draws on top.
    pub z: i32,
    /// Set while this surface is the one animating.
    pub flip: Option<FlipDirection>,
}

/// The cover renders above every resting page, and the moving page
/// above everything for the duration of its flip.
const COVER_Z: i32 = 100;
const FLIP_Z: i32 = 200;

pub struct BookPresenter {
    state: BookState,
    page_count: usize,
}

impl BookPresenter {
    pub fn new(page_count: usize) -> Self {
        assert!(page_count >= 2, "a book needs at least one leaf");
        Self {
            state: BookState::Closed,
            page_count,
        }
    }

    pub fn state(&self) -> BookState {
        self.state
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn max_spread(&self) -> usize {
        self.page_count / 2
    }

    /// The spread as the reader currently sees it. While a flip is in
    /// flight this stays at the departing spread; it moves only when
    /// the flip commits.
    pub fn current_spread(&self) -> usize {
        match self.state {
            BookState::Closed => 0,
            BookState::Open { spread } => spread,
            BookState::Flipping { from, .. } => from,
        }
    }

    pub fn is_open(&self) -> bool {
        self.current_spread() > 0
    }

    pub fn is_flipping(&self) -> bool {
        matches!(self.state, BookState::Flipping { .. })
    }

    pub fn can_open(&self) -> bool {
        self.state == BookState::Closed
    }

    pub fn can_next(&self) -> bool {
        matches!(self.state, BookState::Open { spread } if spread < self.max_spread())
    }

    pub fn can_previous(&self) -> bool {
        matches!(self.state, BookState::Open { .. })
    }

    /// Begin opening the cover. Only valid from `Closed`; anything
    /// else is silently rejected, including an in-flight flip.
    pub fn open(&mut self) -> bool {
        if self.state != BookState::Closed {
            return false;
        }
        self.state = BookState::Flipping { from: 0, to: 1 };
        true
    }

    /// Begin advancing one spread. Rejected at the last spread, while
    /// closed, and while a flip is in flight.
    pub fn next(&mut self) -> bool {
        match self.state {
            BookState::Open { spread } if spread < self.max_spread() => {
                self.state = BookState::Flipping { from: spread, to: spread + 1 };
                true
            }
            _ => false,
        }
    }

    /// Begin retreating one spread; from the first spread this closes
    /// the book. Rejected while closed or flipping.
    pub fn previous(&mut self) -> bool {
        match self.state {
            BookState::Open { spread } => {
                self.state = BookState::Flipping { from: spread, to: spread - 1 };
                true
            }
            _ => false,
        }
    }

    /// Commit an in-flight flip. No-op when nothing is in flight.
    pub fn complete_flip(&mut self) {
        if let BookState::Flipping { to, .. } = self.state {
            self.state = if to == 0 {
                BookState::Closed
            } else {
                BookState::Open { spread: to }
            };
        }
    }

    /// Human-readable navigation status for the control strip.
    pub fn status_label(&self) -> String {
        match self.current_spread() {
            0 => String::from("Closed"),
            spread => format!("Spread {} of {}", spread, self.max_spread()),
        }
    }

    /// Placement of the page surface at `index` for the current
    /// render, or `None` when the surface is not drawn at all.
    ///
    /// Odd surfaces of the moving leaf stay `None`: the renderer draws
    /// them as the back face of the moving page.
    pub fn page_layout(&self, index: usize) -> Option<PageLayout> {
        assert!(index < self.page_count, "page index out of range");
        let leaf = index / 2;
        let spread = self.current_spread();

        let mut layout = if !self.is_open() {
            // Closed stack: only the cover shows.
            (index == 0).then_some(PageLayout {
                rotation: PageRotation::Deg0,
                z: COVER_Z,
                flip: None,
            })
        } else if leaf < spread {
            // Flipped past: fully rotated away, face hidden.
            None
        } else if leaf == spread {
            // Active spread: its front face lies face-up on the right.
            (index % 2 == 0).then_some(PageLayout {
                rotation: PageRotation::Deg0,
                z: self.resting_z(index),
                flip: None,
            })
        } else {
            // Future stack: only the surface on top of it would show,
            // and that surface belongs to the active spread above.
            (index == spread * 2).then_some(PageLayout {
                rotation: PageRotation::Deg0,
                z: self.resting_z(index),
                flip: None,
            })
        };

        if let BookState::Flipping { from, to } = self.state {
            if leaf == from.min(to) && index % 2 == 0 {
                let direction = if to > from {
                    FlipDirection::Forward
                } else {
                    FlipDirection::Backward
                };
                layout = Some(PageLayout {
                    rotation: match direction {
                        FlipDirection::Forward => PageRotation::Deg0,
                        FlipDirection::Backward => PageRotation::Deg180,
                    },
                    z: FLIP_Z,
                    flip: Some(direction),
                });
            }
        }

        layout
    }

    fn resting_z(&self, index: usize) -> i32 {
        if index == 0 {
            COVER_Z
        } else {
            self.page_count as i32 - index as i32
        }
    }
}

#[cfg(test)]
mod tests;
