use folio_core::{
    display::Display,
    framebuffer::{DisplayBuffers, HEIGHT, WIDTH},
    input::{ButtonState, Buttons},
};

pub struct MinifbDisplay {
    window: minifb::Window,
    buttons: ButtonState,
}

impl MinifbDisplay {
    pub fn new(mut window: minifb::Window) -> Self {
        window.set_target_fps(60);
        Self {
            window,
            buttons: ButtonState::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(minifb::Key::Escape)
    }

    pub fn update(&mut self) {
        self.window.update();
        let mut current: u8 = 0;
        if self.window.is_key_down(minifb::Key::Enter) {
            current |= 1 << (Buttons::Open as u8);
        }
        if self.window.is_key_down(minifb::Key::Right) {
            current |= 1 << (Buttons::Next as u8);
        }
        if self.window.is_key_down(minifb::Key::Left) {
            current |= 1 << (Buttons::Previous as u8);
        }
        self.buttons.update(current);
    }

    pub fn get_buttons(&self) -> ButtonState {
        self.buttons
    }
}

impl Display for MinifbDisplay {
    fn present(&mut self, buffers: &DisplayBuffers) {
        self.window
            .update_with_buffer(buffers.data(), WIDTH, HEIGHT)
            .unwrap_or_else(|e| {
                log::error!("Failed to present frame: {}", e);
            });
    }
}
