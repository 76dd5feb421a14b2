/// The three logical navigation commands.
#[repr(u8)]
#[derive(Clone, Copy)]
pub enum Buttons {
    Open,
    Next,
    Previous,
}

/// Edge-detecting button mask fed once per frame by the host.
#[derive(Clone, Copy, Default)]
pub struct ButtonState {
    current: u8,
    previous: u8,
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, current: u8) {
        self.previous = self.current;
        self.current = current;
    }

    fn pressed(&self) -> u8 {
        self.current & !self.previous
    }

    pub fn is_pressed(&self, button: Buttons) -> bool {
        let mask = 1 << (button as u8);
        (self.pressed() & mask) != 0
    }
}
