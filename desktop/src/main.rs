use std::time::Instant;

use folio_core::{
    application::Application,
    framebuffer::{DisplayBuffers, HEIGHT, WIDTH},
    photo::Photo,
};

use crate::display::MinifbDisplay;

mod display;

const PROFILE_PHOTO: &[u8] = include_bytes!("../assets/profile.png");

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Folio desktop application started");

    let window = minifb::Window::new(
        "Folio",
        WIDTH,
        HEIGHT,
        minifb::WindowOptions::default(),
    )
    .unwrap_or_else(|e| {
        panic!("Unable to open window: {}", e);
    });

    let mut display_buffers = Box::new(DisplayBuffers::new());
    let mut display = MinifbDisplay::new(window);
    let mut application = Application::new(&mut display_buffers, load_profile_photo());

    let mut last_frame = Instant::now();
    while display.is_open() {
        display.update();
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_frame).as_millis() as u32;
        last_frame = now;
        application.update(&display.get_buttons(), elapsed_ms);
        application.draw(&mut display);
    }
}

fn load_profile_photo() -> Option<Photo> {
    match image::load_from_memory(PROFILE_PHOTO) {
        Ok(img) => {
            let rgb = img.to_rgb8();
            let (width, height) = rgb.dimensions();
            Some(Photo::new(width, height, rgb.into_raw()))
        }
        Err(err) => {
            log::warn!("Failed to decode profile photo: {err}");
            None
        }
    }
}
