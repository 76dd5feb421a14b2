//! Frame-driven glue: feeds input edges into the presenter, runs the
//! flip window clock, and redraws when something changed.

use crate::content;
use crate::display::Display;
use crate::framebuffer::{DisplayBuffers, HEIGHT, WIDTH};
use crate::input;
use crate::photo::Photo;
use crate::presenter::{BookPresenter, FLIP_DURATION_MS};
use crate::ui::{BookView, Rect, UiContext, View};

pub struct Application<'a> {
    dirty: bool,
    display_buffers: &'a mut DisplayBuffers,
    presenter: BookPresenter,
    photo: Option<Photo>,
    flip_elapsed_ms: u32,
}

impl<'a> Application<'a> {
    pub fn new(display_buffers: &'a mut DisplayBuffers, photo: Option<Photo>) -> Self {
        Self {
            dirty: true,
            display_buffers,
            presenter: BookPresenter::new(content::page_count()),
            photo,
            flip_elapsed_ms: 0,
        }
    }

    pub fn presenter(&self) -> &BookPresenter {
        &self.presenter
    }

    /// Advance one frame. `elapsed_ms` is the wall-clock time since
    /// the previous call; while a flip is in flight it feeds the
    /// animation window and navigation input is dropped, not queued.
    pub fn update(&mut self, buttons: &input::ButtonState, elapsed_ms: u32) {
        if self.presenter.is_flipping() {
            self.flip_elapsed_ms = self.flip_elapsed_ms.saturating_add(elapsed_ms);
            if self.flip_elapsed_ms >= FLIP_DURATION_MS {
                self.presenter.complete_flip();
                log::debug!("flip complete: {}", self.presenter.status_label());
            }
            self.dirty = true;
            return;
        }

        if buttons.is_pressed(input::Buttons::Open) && self.presenter.open() {
            log::info!("opening the book");
            self.begin_flip();
        } else if buttons.is_pressed(input::Buttons::Next) && self.presenter.next() {
            log::debug!("flipping forward from {}", self.presenter.current_spread());
            self.begin_flip();
        } else if buttons.is_pressed(input::Buttons::Previous) && self.presenter.previous() {
            if self.presenter.current_spread() == 1 {
                log::info!("closing the book");
            } else {
                log::debug!("flipping back from {}", self.presenter.current_spread());
            }
            self.begin_flip();
        }
    }

    fn begin_flip(&mut self) {
        self.flip_elapsed_ms = 0;
        self.dirty = true;
    }

    pub fn draw(&mut self, display: &mut impl Display) {
        if !self.dirty {
            return;
        }
        let progress = self.flip_elapsed_ms as f32 / FLIP_DURATION_MS as f32;
        let mut view = BookView {
            presenter: &self.presenter,
            progress,
            photo: self.photo.as_ref(),
        };
        let mut ctx = UiContext {
            buffers: &mut *self.display_buffers,
        };
        view.render(&mut ctx, Rect::new(0, 0, WIDTH as i32, HEIGHT as i32));
        display.present(self.display_buffers);
        // Keep redrawing while the animation runs.
        self.dirty = self.presenter.is_flipping();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ButtonState, Buttons};
    use crate::presenter::BookState;

    fn press(button: Buttons) -> ButtonState {
        let mut state = ButtonState::new();
        state.update(1 << (button as u8));
        state
    }

    fn idle() -> ButtonState {
        ButtonState::new()
    }

    #[test]
    fn flip_window_gates_completion() {
        let mut buffers = DisplayBuffers::new();
        let mut app = Application::new(&mut buffers, None);

        app.update(&press(Buttons::Open), 16);
        assert!(app.presenter().is_flipping());

        app.update(&idle(), 300);
        assert!(app.presenter().is_flipping());

        app.update(&idle(), 300);
        assert_eq!(app.presenter().state(), BookState::Open { spread: 1 });
    }

    #[test]
    fn input_during_a_flip_is_dropped() {
        let mut buffers = DisplayBuffers::new();
        let mut app = Application::new(&mut buffers, None);

        app.update(&press(Buttons::Open), 16);
        // Mashing next mid-flip neither queues nor interrupts.
        app.update(&press(Buttons::Next), 100);
        app.update(&press(Buttons::Next), 600);
        assert_eq!(app.presenter().state(), BookState::Open { spread: 1 });

        app.update(&press(Buttons::Next), 16);
        app.update(&idle(), 600);
        assert_eq!(app.presenter().state(), BookState::Open { spread: 2 });
    }

    #[test]
    fn navigation_before_opening_is_ignored() {
        let mut buffers = DisplayBuffers::new();
        let mut app = Application::new(&mut buffers, None);

        app.update(&press(Buttons::Next), 16);
        app.update(&press(Buttons::Previous), 16);
        assert_eq!(app.presenter().state(), BookState::Closed);
    }
}
